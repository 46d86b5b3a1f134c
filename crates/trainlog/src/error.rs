//! Error types for trainlog.
//!
//! Every fallible operation in the crate returns [`Result`]. Argument
//! validation is left to clap and never reaches this type.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for trainlog operations.
#[derive(Error, Debug)]
pub enum Error {
    // === Storage Errors ===
    /// The data file is missing or unreadable.
    #[error("failed to read {path}: {source}")]
    Read {
        /// Path to the data file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The data file could not be written.
    #[error("failed to write {path}: {source}")]
    Write {
        /// Path to the data file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The data file is not a JSON array of well-formed train records.
    #[error("malformed train data in {path}: {source}")]
    Parse {
        /// Path to the data file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: serde_json::Error,
    },

    /// Records could not be serialized.
    #[error("JSON error: {0}")]
    Serialize(#[from] serde_json::Error),

    // === Configuration Errors ===
    /// Failed to load configuration.
    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    /// Configuration validation failed.
    #[error("invalid configuration: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    // === I/O Errors ===
    /// Any other I/O failure, such as writing to the output stream.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized Result type for trainlog operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl Error {
    /// Check if this error came from reading or writing a file.
    #[must_use]
    pub fn is_io_error(&self) -> bool {
        matches!(self, Self::Read { .. } | Self::Write { .. } | Self::Io(_))
    }

    /// Check if this error means the data file content was malformed.
    #[must_use]
    pub fn is_parse_error(&self) -> bool {
        matches!(self, Self::Parse { .. })
    }
}
