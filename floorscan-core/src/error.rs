//! Error types for floorscan

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Main error type for floorscan operations
///
/// Every variant maps to exactly one [`ErrorKind`]. Errors are always returned
/// to the caller of the failing operation; nothing in the workspace logs an
/// error and carries on.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Failed to load {path}: {reason}")]
    LoadFailure { path: String, reason: String },

    #[error("Insufficient data: {0}")]
    InsufficientData(String),

    #[error("Argument mismatch: {paths} scan paths but {transforms} transforms")]
    ArgumentMismatch { paths: usize, transforms: usize },

    #[error("Validation failed{}: {message}", index_suffix(.index))]
    ValidationFailure {
        index: Option<usize>,
        message: String,
    },

    #[error("Failed to export {path}: {reason}")]
    ExportFailure { path: String, reason: String },
}

fn index_suffix(index: &Option<usize>) -> String {
    match index {
        Some(i) => format!(" at index {}", i),
        None => String::new(),
    }
}

impl Error {
    /// Create a load failure for the given path
    pub fn load(path: impl fmt::Display, reason: impl fmt::Display) -> Self {
        Error::LoadFailure {
            path: path.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Create an export failure for the given path
    pub fn export(path: impl fmt::Display, reason: impl fmt::Display) -> Self {
        Error::ExportFailure {
            path: path.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Create a validation failure that is not yet tied to an input index
    pub fn validation(message: impl Into<String>) -> Self {
        Error::ValidationFailure {
            index: None,
            message: message.into(),
        }
    }

    /// Attach the offending input index to a validation failure.
    ///
    /// Other variants are returned unchanged.
    pub fn at_index(self, index: usize) -> Self {
        match self {
            Error::ValidationFailure { message, .. } => Error::ValidationFailure {
                index: Some(index),
                message,
            },
            other => other,
        }
    }

    /// The taxonomy kind of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::LoadFailure { .. } => ErrorKind::LoadFailure,
            Error::InsufficientData(_) => ErrorKind::InsufficientData,
            Error::ArgumentMismatch { .. } => ErrorKind::ArgumentMismatch,
            Error::ValidationFailure { .. } => ErrorKind::ValidationFailure,
            Error::ExportFailure { .. } => ErrorKind::ExportFailure,
        }
    }
}

/// Transport-agnostic error kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    /// An input asset is missing or could not be parsed
    LoadFailure,
    /// Too few scans, or too few usable floor vertices
    InsufficientData,
    /// Path and transform counts differ
    ArgumentMismatch,
    /// A transform is malformed or has a non-positive scale
    ValidationFailure,
    /// The composite scene could not be persisted
    ExportFailure,
}

impl ErrorKind {
    /// Stable error code for binding layers
    pub fn code(&self) -> &'static str {
        match self {
            ErrorKind::LoadFailure => "LOAD_FAILURE",
            ErrorKind::InsufficientData => "INSUFFICIENT_DATA",
            ErrorKind::ArgumentMismatch => "ARGUMENT_MISMATCH",
            ErrorKind::ValidationFailure => "VALIDATION_FAILURE",
            ErrorKind::ExportFailure => "EXPORT_FAILURE",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Result type alias for floorscan operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_message_names_index() {
        let err = Error::validation("scale must be positive").at_index(3);
        assert_eq!(err.to_string(), "Validation failed at index 3: scale must be positive");
        assert_eq!(err.kind(), ErrorKind::ValidationFailure);
    }

    #[test]
    fn test_validation_message_without_index() {
        let err = Error::validation("rotation is not finite");
        assert_eq!(err.to_string(), "Validation failed: rotation is not finite");
    }

    #[test]
    fn test_at_index_leaves_other_kinds_alone() {
        let err = Error::InsufficientData("need 2 scans".to_string()).at_index(1);
        assert_eq!(err, Error::InsufficientData("need 2 scans".to_string()));
    }

    #[test]
    fn test_kind_codes() {
        assert_eq!(Error::load("a.obj", "missing").kind().code(), "LOAD_FAILURE");
        assert_eq!(Error::export("b.json", "disk full").kind().code(), "EXPORT_FAILURE");
        assert_eq!(
            Error::ArgumentMismatch { paths: 2, transforms: 1 }.kind().code(),
            "ARGUMENT_MISMATCH"
        );
        assert_eq!(ErrorKind::InsufficientData.to_string(), "INSUFFICIENT_DATA");
    }

    #[test]
    fn test_kind_serializes_as_code() {
        let json = serde_json::to_string(&ErrorKind::ValidationFailure).unwrap();
        assert_eq!(json, "\"VALIDATION_FAILURE\"");
    }
}
