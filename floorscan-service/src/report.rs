//! Structured error reports

use floorscan_core::{Error, ErrorKind};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::fmt;
use thiserror::Error;

/// Error shape handed to callers outside the workspace
///
/// `code` is one of the stable [`ErrorKind`] codes. `details` carries the
/// machine-readable parts of the failure (offending index, path, counts).
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[error("{code}: {message}")]
pub struct ErrorReport {
    pub code: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl ErrorReport {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            code: kind.code().to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }

    /// Report for a blocking task that panicked or was cancelled
    pub fn worker_failure(kind: ErrorKind, cause: impl fmt::Display) -> Self {
        Self::new(kind, format!("worker task failed: {}", cause))
    }

    pub fn has_code(&self, kind: ErrorKind) -> bool {
        self.code == kind.code()
    }
}

impl From<Error> for ErrorReport {
    fn from(error: Error) -> Self {
        let details = match &error {
            Error::LoadFailure { path, .. } | Error::ExportFailure { path, .. } => Some(json!({ "path": path })),
            Error::ArgumentMismatch { paths, transforms } => {
                Some(json!({ "paths": paths, "transforms": transforms }))
            }
            Error::ValidationFailure { index: Some(index), .. } => Some(json!({ "index": index })),
            Error::ValidationFailure { index: None, .. } | Error::InsufficientData(_) => None,
        };
        Self {
            code: error.kind().code().to_string(),
            message: error.to_string(),
            details,
        }
    }
}
