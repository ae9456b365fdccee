//! Storage layer for the phonebook.
//!
//! This module provides:
//! - The contact record and its on-disk labels (`types`)
//! - The ordered in-memory directory (`directory`)
//! - Search criteria (`filter`)
//! - The `DirectoryStore` trait and its JSON file implementation

pub mod directory;
pub mod filter;
pub mod json_file;
pub mod traits;
pub mod types;

pub use directory::Directory;
pub use filter::ContactFilter;
pub use json_file::JsonFileStore;
pub use traits::DirectoryStore;
pub use types::{contact_key, Contact, UNSET_BIRTH_DATE};
