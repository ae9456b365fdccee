//! Storage trait definition.
//!
//! The `DirectoryStore` trait is the seam between the menu loop and wherever
//! the phonebook lives between sessions.

use super::directory::Directory;
use crate::error::Result;

/// Load-all / save-all persistence for a [`Directory`].
///
/// There is exactly one reader and one writer (the running session), so
/// implementations need no locking.
pub trait DirectoryStore {
    /// Read the whole directory.
    ///
    /// A store that has never been saved yields an empty directory.
    ///
    /// # Errors
    ///
    /// Returns `PhonebookError::Storage` if the backing data cannot be read,
    /// or `PhonebookError::Serialization` if it is not a valid document.
    fn load(&self) -> Result<Directory>;

    /// Replace the stored directory with `directory`.
    ///
    /// # Errors
    ///
    /// Returns `PhonebookError::Storage` if the data cannot be written.
    fn save(&self, directory: &Directory) -> Result<()>;
}
