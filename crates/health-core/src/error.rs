//! Error types shared across the workspace.

use thiserror::Error;

/// Errors raised when an input to generation or a record fails validation.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    /// Record count must be positive
    #[error("Record count must be positive, got {0}")]
    InvalidCount(usize),

    /// A configured range has min > max (or a non-finite bound)
    #[error("Invalid range for '{field}': min {min} is greater than max {max}")]
    InvalidRange {
        field: &'static str,
        min: f64,
        max: f64,
    },

    /// Diastolic values could never stay below systolic values
    #[error(
        "Diastolic range minimum ({diastolic_min}) must be below systolic range minimum ({systolic_min})"
    )]
    BloodPressureOverlap {
        systolic_min: u32,
        diastolic_min: u32,
    },

    /// A probability outside [0, 1]
    #[error("Invalid probability for '{field}': {value} is not within [0, 1]")]
    InvalidProbability { field: &'static str, value: f64 },

    /// A pool that every record draws from is empty
    #[error("Data pool '{0}' is empty")]
    EmptyPool(&'static str),

    /// A record breaks one of its internal invariants
    #[error("Record invariant violated: {0}")]
    InvariantViolated(String),
}

/// Errors raised while loading or saving configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Error reading or writing the config file
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    /// Error parsing YAML
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Error parsing JSON
    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Parsed config has invalid values
    #[error("Invalid config: {0}")]
    Validation(#[from] ValidationError),
}
