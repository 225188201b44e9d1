//! # Student Errors
//!
//! Error types for the student records module.

use thiserror::Error;

/// Result type for student operations
pub type StudentResult<T> = Result<T, StudentError>;

/// Student record errors
///
/// `NotFound` covers both a missing record and an empty result set for a
/// collection query. Callers tell those apart by message, not by kind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StudentError {
    /// Malformed or out-of-range input (non-positive id, negative age or
    /// grade, empty name, unparseable body)
    #[error("{0}")]
    InvalidArgument(String),

    /// No matching record, or an empty collection result
    #[error("{0}")]
    NotFound(String),

    /// Store lock was poisoned
    #[error("Storage error: {0}")]
    Storage(String),
}

impl StudentError {
    /// Returns the HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            StudentError::InvalidArgument(_) => 400,
            StudentError::NotFound(_) => 404,
            StudentError::Storage(_) => 500,
        }
    }

    /// Returns the human-readable message
    pub fn message(&self) -> &str {
        match self {
            StudentError::InvalidArgument(msg)
            | StudentError::NotFound(msg)
            | StudentError::Storage(msg) => msg,
        }
    }
}
