//! # Phonebook Core
//!
//! Core library for Phonebook - a single-user contact directory kept in a
//! flat JSON file.
//!
//! This crate provides the domain logic, storage abstractions, and data models
//! independent of the interactive menu.
//!
//! ## Architecture
//!
//! - **validation**: Name, phone, and birth date checks; age calculation
//! - **storage**: Contact records, the ordered directory, search filters,
//!   and the JSON file store

pub mod error;
pub mod fs;
pub mod storage;
pub mod validation;

pub use error::{PhonebookError, Result};
pub use storage::{Contact, ContactFilter, Directory, DirectoryStore, JsonFileStore};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
