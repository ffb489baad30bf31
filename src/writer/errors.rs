//! # Result Writing Errors

use thiserror::Error;

/// Result type for writing operations
pub type WriteResult<T> = Result<T, WriteError>;

/// Result writing errors
#[derive(Debug, Error)]
pub enum WriteError {
    #[error("Unsupported output format for '{0}' (expected .csv or .json)")]
    UnsupportedFormat(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
