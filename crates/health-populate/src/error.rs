//! Error types for writing and loading record files.

use health_core::ValidationError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while writing or loading records.
#[derive(Error, Debug)]
pub enum PopulateError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A stored value could not be turned back into a record.
    #[error("Failed to parse '{path}': {message}")]
    Parse { path: PathBuf, message: String },

    /// Neither a CSV summary nor any per-person JSON file was found.
    #[error("No health data found in '{0}'")]
    NoData(PathBuf),

    /// Invalid generation request.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}
