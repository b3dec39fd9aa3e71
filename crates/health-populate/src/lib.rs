//! File output for generated health records.
//!
//! [`RecordPopulator`] streams records from a
//! [`RecordGenerator`](health_generator::RecordGenerator) into an output
//! directory: a flat `health_data_summary.csv` plus one folder per person
//! holding `health_data.json`. [`load_records`] reads such a directory back,
//! preferring the CSV when it exists.
//!
//! # Example
//!
//! ```no_run
//! use health_core::{GeneratorConfig, OutputConfig};
//! use health_generator::RecordGenerator;
//! use health_populate::{load_records, RecordPopulator};
//!
//! let mut generator = RecordGenerator::from_config(GeneratorConfig::default(), 42)?;
//! let populator = RecordPopulator::new(OutputConfig::default());
//! let metrics = populator.populate(&mut generator, 100)?;
//! assert_eq!(metrics.records_written, 100);
//!
//! let records = load_records("./generated_health_data")?;
//! assert_eq!(records.len(), 100);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod error;
mod loader;
mod populator;
mod row;

pub use error::PopulateError;
pub use loader::{load_csv, load_json, load_records, load_records_with_source, DataSource};
pub use populator::{
    folder_index, folder_name, PopulateMetrics, RecordPopulator, DEFAULT_BUFFER_SIZE, PERSON_JSON,
    SUMMARY_CSV,
};
pub use row::{CsvRow, LIST_SEPARATOR};
