//! Error types for the reference-copying library.

use std::path::PathBuf;

use thiserror::Error;

/// Comprehensive error type for all reference-copying operations.
///
/// Every variant is local and non-fatal to the host process: commands report
/// the error through the notification sink and return, nothing is retried.
/// A cursor with no enclosing block is not an error at all: the locator
/// returns `None` and the invoking command stays disabled.
#[derive(Error, Debug)]
pub enum NotelinkError {
    /// The external deep-link integration is not installed or enabled
    #[error("Deep-link integration is not installed or enabled")]
    FeatureUnavailable,

    /// The note-level unique id could not be read or written
    #[error("Could not obtain a unique id for the note: {reason}")]
    Identity { reason: String },

    /// A user-supplied timestamp pattern did not format
    #[error("Invalid timestamp format '{pattern}': {source}")]
    TimestampFormat {
        pattern: String,
        #[source]
        source: jiff::Error,
    },

    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },

    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },

    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),

    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },

    /// Another copy command is still mid-flight against the same document
    #[error("Another copy operation is still in progress")]
    Busy,
}

impl NotelinkError {
    /// Creates an identity-acquisition error from any displayable cause.
    pub fn identity(reason: impl ToString) -> Self {
        NotelinkError::Identity {
            reason: reason.to_string(),
        }
    }
}

/// Result type alias for reference-copying operations
pub type Result<T> = std::result::Result<T, NotelinkError>;
