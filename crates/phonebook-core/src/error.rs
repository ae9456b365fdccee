//! Error types for Phonebook core operations.
//!
//! Validation variants carry the exact message shown to the user when a
//! guarded prompt rejects input. Storage variants are fatal to a session and
//! are reported by the CLI before exiting.

use thiserror::Error;

/// Result type alias for Phonebook operations.
pub type Result<T> = std::result::Result<T, PhonebookError>;

/// Core error type for Phonebook operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PhonebookError {
    /// First or last name failed the name pattern
    #[error("Names may only contain Latin letters, digits, and spaces, starting with a letter.")]
    InvalidName,

    /// Phone number is not 11 digits starting with 8
    #[error("Invalid phone number! Expected 11 digits starting with 8 (or +7).")]
    InvalidPhone,

    /// Birth date did not parse or is not in the past
    #[error("Invalid date! Use DD.MM.YYYY with a date earlier than today.")]
    InvalidDate,

    /// Reading or writing the phonebook file failed
    #[error("Storage error: {0}")]
    Storage(String),

    /// The phonebook file is not a valid document
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<std::io::Error> for PhonebookError {
    fn from(err: std::io::Error) -> Self {
        PhonebookError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for PhonebookError {
    fn from(err: serde_json::Error) -> Self {
        PhonebookError::Serialization(err.to_string())
    }
}
