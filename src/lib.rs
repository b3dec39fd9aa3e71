//! health-datagen
//!
//! Command-line front end for generating synthetic health records and
//! analyzing generated batches.
//!
//! # CLI Usage
//!
//! ```bash
//! # Generate 100 people into ./generated_health_data
//! health-datagen generate -n 100
//!
//! # Reproducible English-locale batch with a custom config
//! health-datagen generate -n 500 -c config.yaml --seed 7 --locale en-US \
//!   --created-at "2024-01-01 09:00:00" -o out
//!
//! # Analyze a batch and print a markdown report
//! health-datagen analyze -d out --format markdown --print
//!
//! # Print a single record / write the default config
//! health-datagen sample --locale en-US
//! health-datagen init-config --path config.yaml
//! ```
//!
//! The work is done by the library crates:
//!
//! - `health_core` - record types, configuration and validation
//! - `health_generator` - seeded record generation
//! - `health_populate` - CSV / JSON output and loading
//! - `health_analyzer` - batch statistics and report rendering

pub mod cli;
pub mod commands;

pub use cli::{Cli, Commands};
