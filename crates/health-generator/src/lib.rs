//! Synthetic health record generator.
//!
//! This crate provides the [`RecordGenerator`] which produces deterministic,
//! internally-consistent [`HealthRecord`](health_core::HealthRecord) values.
//! The generator uses a seeded RNG to ensure reproducibility across runs with
//! the same seed.
//!
//! # Architecture
//!
//! ```text
//! GeneratorConfig + DataPools
//!        │
//!        ▼
//! ┌──────────────────┐
//! │ RecordGenerator  │
//! │                  │
//! │  - rng (StdRng)  │
//! │  - created_at    │
//! └────────┬─────────┘
//!          │
//!          ▼
//!    HealthRecord { personal_info, health_metrics, medical_history }
//! ```
//!
//! # Example
//!
//! ```rust
//! use health_core::GeneratorConfig;
//! use health_generator::RecordGenerator;
//!
//! let mut generator = RecordGenerator::from_config(GeneratorConfig::default(), 42).unwrap();
//! let records = generator.generate_batch(10).unwrap();
//! assert_eq!(records.len(), 10);
//! for record in &records {
//!     assert!(record.health_metrics.blood_pressure_systolic
//!         > record.health_metrics.blood_pressure_diastolic);
//! }
//! ```
//!
//! # Consistency rules
//!
//! - Height and weight come from the ranges of the record's own gender
//! - `bmi` is derived from the stored height and weight, never sampled
//! - Diastolic pressure is sampled below the record's systolic pressure
//! - Blood sugar and cholesterol scale with age from their base ranges

pub mod generator;
pub mod generators;
pub mod pools;

// Re-exports for convenience
pub use generator::{RecordGenerator, RecordIterator};
pub use pools::{DataPools, HistoryPool, NameStyle};
