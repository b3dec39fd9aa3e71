//! Core types for the health-datagen workspace.
//!
//! This crate provides the foundational types shared by the generator,
//! the analyzer and the file populator:
//!
//! - [`HealthRecord`] - One synthetic person (personal info, metrics, history)
//! - [`GeneratorConfig`] - Value ranges and history settings for generation
//! - [`OutputConfig`] - Output toggles used by the file populator
//! - [`ValidationError`] / [`ConfigError`] - Error taxonomy
//!
//! # Architecture
//!
//! ```text
//! health-core (this crate)
//!    │
//!    ├─── health-generator  (produces HealthRecord values)
//!    ├─── health-analyzer   (aggregates HealthRecord batches)
//!    └─── health-populate   (writes/loads HealthRecord batches)
//! ```
//!
//! # Example
//!
//! ```rust
//! use health_core::{Config, IntRange};
//!
//! let config = Config::from_yaml("age_range: [20, 40]").unwrap();
//! assert_eq!(config.generator.age_range, IntRange::new(20, 40));
//! // Keys that are not present fall back to their defaults
//! assert_eq!(config.generator.heart_rate_range, IntRange::new(60, 100));
//! ```

pub mod config;
pub mod error;
pub mod record;

// Re-exports for convenience
pub use config::{Config, FloatRange, GeneratorConfig, HistoryConfig, IntRange, Locale, OutputConfig};
pub use error::{ConfigError, ValidationError};
pub use record::{
    calculate_bmi, round1, BloodType, Gender, HealthMetrics, HealthRecord, MedicalHistory,
    PersonalInfo, CREATED_DATE_FORMAT,
};
