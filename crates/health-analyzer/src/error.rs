//! Error types for the analyzer.

use thiserror::Error;

/// Errors that can occur during analysis.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    /// Analysis needs at least one record.
    #[error("Cannot analyze an empty dataset")]
    EmptyDataset,
}
