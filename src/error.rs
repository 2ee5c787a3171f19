//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Field validation failures are not errors at this level: they are reported as
//! messages by [`crate::validation`] and live in the session's error map.

use crate::domain::{ContactId, ValidationError};
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when persisting contacts.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Reading or writing the contact file failed
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to encode the contact document
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// No per-user documents location exists on this platform
    #[error("Could not determine a documents directory for the contact file")]
    NoDocumentsDir,
}

impl StoreError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Errors returned by [`crate::services::EditSession`] operations.
///
/// All variants except `Persistence` are precondition violations: the call is
/// rejected before any state is touched.
#[derive(Error, Debug)]
pub enum SessionError {
    /// Edit or Remove requires a selected stored contact
    #[error("No contact is selected")]
    NoSelection,

    /// Field writes, Apply and Cancel require an edit in progress
    #[error("No edit is in progress")]
    NotEditing,

    /// Edit or Remove was requested while another edit is in progress
    #[error("An edit is already in progress")]
    EditInProgress,

    /// The id does not name an entry of the collection
    #[error("Unknown contact: {0}")]
    UnknownContact(ContactId),

    /// Apply was refused because the working copy has validation errors
    #[error("Contact has validation errors and cannot be applied")]
    InvalidContact,

    /// The change was committed in memory but could not be written to disk
    #[error("Failed to persist contacts: {0}")]
    Persistence(#[from] StoreError),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Errors that can occur while parsing a shell command line.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CommandError {
    /// The line holds no command
    #[error("Empty command")]
    Empty,

    /// The command word is not recognized
    #[error("Unknown command: {0} (try 'help')")]
    Unknown(String),

    /// A required argument is absent
    #[error("'{command}' needs {argument}")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },

    /// A list position is not a positive number
    #[error("Invalid position: {0}")]
    InvalidPosition(String),

    /// The field name is not recognized
    #[error(transparent)]
    InvalidField(#[from] ValidationError),
}

/// Convenience type alias for Results with StoreError
pub type StoreResult<T> = Result<T, StoreError>;

/// Convenience type alias for Results with SessionError
pub type SessionResult<T> = Result<T, SessionError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;
