//! Error types for the address book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Field validation failures live in [`crate::domain::ValidationError`] and are wrapped
//! by [`BookError`].

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors raised by record and address book operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookError {
    /// A field value broke its validation rule
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The named contact does not exist
    #[error("Contact not found: {0}")]
    ContactNotFound(String),

    /// A birthday was set on a record that already has one
    #[error("Birthday already set.")]
    BirthdayAlreadySet,
}

/// Errors that can occur while loading or saving the address book file.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Reading or writing the file failed
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid JSON or holds invalid field values
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// The file was written by an incompatible format version
    #[error("Unsupported address book format version {found} (expected {expected})")]
    UnsupportedVersion { found: u32, expected: u32 },

    /// Two records in the file share a name
    #[error("Duplicate contact in address book file: {0}")]
    DuplicateContact(String),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Errors produced by the command layer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// The underlying book operation failed
    #[error(transparent)]
    Book(#[from] BookError),

    /// Required arguments were missing
    #[error("Usage: {0}")]
    Usage(&'static str),
}

impl From<ValidationError> for CommandError {
    fn from(err: ValidationError) -> Self {
        CommandError::Book(BookError::Validation(err))
    }
}

impl CommandError {
    /// The text shown to the user for this error.
    pub fn user_message(&self) -> String {
        match self {
            CommandError::Book(BookError::ContactNotFound(_)) => "Contact not found.".to_string(),
            CommandError::Book(err) => err.to_string(),
            CommandError::Usage(_) => {
                "Enter the command followed by necessary arguments.".to_string()
            }
        }
    }
}

/// Convenience type alias for Results with BookError
pub type BookResult<T> = Result<T, BookError>;

/// Convenience type alias for Results with StorageError
pub type StorageResult<T> = Result<T, StorageError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;
