//! Error types for the journey library.
//!
//! Store operations never fail; these errors only come from the edges of the
//! system: parsing field names and platform values handed in by a
//! presentation layer, and writing exported documents to disk.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for everything outside the (total) store operations.
#[derive(Error, Debug)]
pub enum CujError {
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Serialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> CujError {
        CujError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl CujError {
    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Creates a file system error for `path`.
    pub fn file_system(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CujError::FileSystem {
            path: path.into(),
            source,
        }
    }

    /// Whether the error was caused by the caller's input rather than the
    /// environment.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, CujError::InvalidInput { .. })
    }
}

/// Result type alias for journey operations
pub type Result<T> = std::result::Result<T, CujError>;
