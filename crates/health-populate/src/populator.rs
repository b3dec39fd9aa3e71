//! Writes record batches to the output directory.

use crate::error::PopulateError;
use crate::row::CsvRow;
use csv::Writer;
use health_core::{HealthRecord, OutputConfig};
use health_generator::RecordGenerator;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Default buffer size for file writing.
pub const DEFAULT_BUFFER_SIZE: usize = 8192;

/// File name of the flat summary written into the output directory.
pub const SUMMARY_CSV: &str = "health_data_summary.csv";

/// File name of the nested record written into each person folder.
pub const PERSON_JSON: &str = "health_data.json";

/// Metrics from a populate operation.
#[derive(Debug, Clone, Default)]
pub struct PopulateMetrics {
    /// Number of records written.
    pub records_written: u64,
    /// Number of person folders created.
    pub folders_created: u64,
    /// Number of per-person JSON files written.
    pub json_files_written: u64,
    /// Summary CSV path, when one was written.
    pub csv_path: Option<PathBuf>,
    /// Summary CSV size in bytes.
    pub csv_size_bytes: u64,
    /// Total time taken.
    pub total_duration: Duration,
    /// Time spent generating data.
    pub generation_duration: Duration,
    /// Time spent writing data.
    pub write_duration: Duration,
}

impl PopulateMetrics {
    /// Calculate records per second.
    pub fn records_per_second(&self) -> f64 {
        if self.total_duration.as_secs_f64() > 0.0 {
            self.records_written as f64 / self.total_duration.as_secs_f64()
        } else {
            0.0
        }
    }
}

/// Writes records to the layout described by an [`OutputConfig`]:
///
/// ```text
/// <output_directory>/
/// ├── health_data_summary.csv       (generate_csv)
/// ├── 0001_<name>/                  (create_folders)
/// │   ├── health_data.json          (generate_json)
/// │   └── <template image>          (copy_template)
/// └── 0002_<name>/
/// ```
pub struct RecordPopulator {
    output: OutputConfig,
}

impl RecordPopulator {
    pub fn new(output: OutputConfig) -> Self {
        Self { output }
    }

    /// Override the output directory.
    pub fn with_output_directory(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output.output_directory = dir.into();
        self
    }

    pub fn output(&self) -> &OutputConfig {
        &self.output
    }

    /// Generate `count` records and write them as they are produced.
    pub fn populate(
        &self,
        generator: &mut RecordGenerator,
        count: usize,
    ) -> Result<PopulateMetrics, PopulateError> {
        info!(
            "Generating {} health records into '{}'",
            count,
            self.output.output_directory.display()
        );
        let records = generator.records(count)?;
        self.write_records(records)
    }

    /// Write an already-built sequence of records.
    pub fn write_records<I>(&self, records: I) -> Result<PopulateMetrics, PopulateError>
    where
        I: IntoIterator<Item = HealthRecord>,
    {
        let start_time = Instant::now();
        let mut metrics = PopulateMetrics::default();

        let output_dir = &self.output.output_directory;
        fs::create_dir_all(output_dir)?;
        clear_previous_batch(output_dir)?;

        let template = self.template_to_copy();

        let csv_path = output_dir.join(SUMMARY_CSV);
        let mut csv_writer = if self.output.generate_csv {
            let file = File::create(&csv_path)?;
            Some(Writer::from_writer(BufWriter::with_capacity(
                DEFAULT_BUFFER_SIZE,
                file,
            )))
        } else {
            None
        };

        if !self.output.generate_csv && !self.output.create_folders {
            warn!("CSV output and person folders are both disabled; nothing will be written");
        }

        let mut generation_time = Duration::ZERO;
        let mut write_time = Duration::ZERO;
        let mut gen_start = Instant::now();

        for record in records {
            generation_time += gen_start.elapsed();

            let write_start = Instant::now();
            let index = metrics.records_written + 1;

            if self.output.create_folders {
                let person_dir = output_dir.join(folder_name(index, &record.personal_info.name));
                fs::create_dir_all(&person_dir)?;
                metrics.folders_created += 1;

                if let Some(template) = template {
                    if let Some(file_name) = template.file_name() {
                        fs::copy(template, person_dir.join(file_name))?;
                    }
                }

                if self.output.generate_json {
                    write_json(&person_dir.join(PERSON_JSON), &record)?;
                    metrics.json_files_written += 1;
                }
            }

            if let Some(writer) = csv_writer.as_mut() {
                writer.serialize(CsvRow::from(&record))?;
            }
            write_time += write_start.elapsed();

            metrics.records_written += 1;
            if metrics.records_written % 100 == 0 {
                debug!("Written {} records", metrics.records_written);
            }

            gen_start = Instant::now();
        }

        if let Some(mut writer) = csv_writer {
            writer.flush()?;
            let inner = writer
                .into_inner()
                .map_err(|e| PopulateError::Io(std::io::Error::other(e.to_string())))?;
            drop(inner);

            metrics.csv_size_bytes = fs::metadata(&csv_path)?.len();
            metrics.csv_path = Some(csv_path);
        }

        metrics.total_duration = start_time.elapsed();
        metrics.generation_duration = generation_time;
        metrics.write_duration = write_time;

        info!(
            "Generation complete: {} records, {} folders, {} JSON files in {:?} ({:.2} records/sec)",
            metrics.records_written,
            metrics.folders_created,
            metrics.json_files_written,
            metrics.total_duration,
            metrics.records_per_second()
        );
        info!("Output directory: {}", output_dir.display());

        Ok(metrics)
    }

    /// Template image to copy into person folders, if enabled and present.
    fn template_to_copy(&self) -> Option<&Path> {
        if !self.output.copy_template || !self.output.create_folders {
            return None;
        }

        match self.output.template_image.as_deref() {
            Some(path) if path.is_file() => Some(path),
            Some(path) => {
                warn!(
                    "Template image '{}' not found, skipping copy",
                    path.display()
                );
                None
            }
            None => {
                warn!("copy_template is enabled but no template_image is set");
                None
            }
        }
    }
}

fn write_json(path: &Path, record: &HealthRecord) -> Result<(), PopulateError> {
    let file = File::create(path)?;
    let mut writer = BufWriter::with_capacity(DEFAULT_BUFFER_SIZE, file);
    serde_json::to_writer_pretty(&mut writer, record)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

/// Remove the summary CSV and person folders left by an earlier run, so a
/// reload never mixes two batches. Other files in `dir` are kept.
fn clear_previous_batch(dir: &Path) -> Result<(), PopulateError> {
    let csv_path = dir.join(SUMMARY_CSV);
    if csv_path.is_file() {
        fs::remove_file(&csv_path)?;
    }

    let mut removed = 0usize;
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_dir() {
            continue;
        }
        let is_person = entry.file_name().to_str().and_then(folder_index).is_some();
        if is_person {
            fs::remove_dir_all(entry.path())?;
            removed += 1;
        }
    }

    if removed > 0 {
        info!(
            "Removed {} person folders from a previous run in '{}'",
            removed,
            dir.display()
        );
    }
    Ok(())
}

/// Folder name for the `index`-th person (1-based): `0007_王小明`.
///
/// Path separators and other characters that are unsafe in file names are
/// replaced with `_`.
pub fn folder_name(index: u64, name: &str) -> String {
    let safe: String = name
        .trim()
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();
    format!("{index:04}_{safe}")
}

/// Index parsed back out of a [`folder_name`]; `None` for any other name.
pub fn folder_index(name: &str) -> Option<u64> {
    let (digits, _) = name.split_once('_')?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}
