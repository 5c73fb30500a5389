//! Persistence error types.

use crate::core::ValidationReport;
use thiserror::Error;

/// Errors that can occur while saving or loading a definition file.
#[derive(Debug, Error)]
pub enum PersistError {
    /// The file could not be opened, read, or written
    #[error("file access failed: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not valid JSON or not in the definition record shape
    #[error("malformed definition file: {0}")]
    Json(#[from] serde_json::Error),

    /// The record parsed but violates the automaton invariants
    #[error("{0}")]
    Invalid(ValidationReport),
}
