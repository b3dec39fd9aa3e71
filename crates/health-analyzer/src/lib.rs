//! Batch analysis of synthetic health records.
//!
//! [`analyze`] turns a slice of [`HealthRecord`](health_core::HealthRecord)s
//! into an [`AnalysisReport`]: demographic breakdowns, summary statistics for
//! every vital sign and the most common medical-history entries. The
//! [`format`] module renders a report as terminal tables, markdown or JSON.
//!
//! # Example
//!
//! ```rust
//! use health_analyzer::{analyze, format_table};
//! use health_core::GeneratorConfig;
//! use health_generator::RecordGenerator;
//!
//! let mut generator = RecordGenerator::from_config(GeneratorConfig::default(), 7).unwrap();
//! let records = generator.generate_batch(20).unwrap();
//!
//! let report = analyze(&records).unwrap();
//! assert_eq!(report.total_records, 20);
//! assert!(format_table(&report).contains("Blood type"));
//! ```
//!
//! Floating point values in the report are rounded to one decimal; standard
//! deviations use the sample (N - 1) divisor.

pub mod analyzer;
pub mod categories;
pub mod error;
pub mod format;
pub mod report;
pub mod stats;

pub use analyzer::{analyze, analyze_with, builtin_none_markers, AnalyzeOptions, DEFAULT_TOP_K};
pub use categories::{AgeGroup, BloodPressureCategory, BmiCategory};
pub use error::AnalysisError;
pub use format::{format_json, format_markdown, format_table};
pub use report::{
    AnalysisReport, CategoryShare, Demographics, FrequencyTable, HistorySummary, ItemFrequency,
    SummaryStats, VitalSigns,
};
