//! Loads a previously written batch back into memory.

use crate::error::PopulateError;
use crate::populator::{folder_index, PERSON_JSON, SUMMARY_CSV};
use crate::row::CsvRow;
use csv::Reader;
use health_core::HealthRecord;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Where a loaded batch came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    /// The flat summary CSV
    Csv(PathBuf),
    /// Per-person JSON files, in folder order
    JsonFiles(usize),
}

/// Load every record under `dir`.
///
/// The summary CSV is preferred when present; otherwise every
/// `*/health_data.json` is read, in folder-name order.
pub fn load_records(dir: impl AsRef<Path>) -> Result<Vec<HealthRecord>, PopulateError> {
    load_records_with_source(dir).map(|(records, _)| records)
}

/// Like [`load_records`], also reporting which files were read.
pub fn load_records_with_source(
    dir: impl AsRef<Path>,
) -> Result<(Vec<HealthRecord>, DataSource), PopulateError> {
    let dir = dir.as_ref();
    if !dir.is_dir() {
        return Err(PopulateError::NoData(dir.to_path_buf()));
    }

    let csv_path = dir.join(SUMMARY_CSV);
    if csv_path.is_file() {
        let records = load_csv(&csv_path)?;
        if records.is_empty() {
            return Err(PopulateError::NoData(dir.to_path_buf()));
        }
        info!(
            "Loaded {} records from '{}'",
            records.len(),
            csv_path.display()
        );
        return Ok((records, DataSource::Csv(csv_path)));
    }

    let json_files = person_json_files(dir)?;
    if json_files.is_empty() {
        return Err(PopulateError::NoData(dir.to_path_buf()));
    }

    let records = json_files
        .iter()
        .map(|path| load_json(path))
        .collect::<Result<Vec<_>, _>>()?;
    info!(
        "Loaded {} records from {} JSON files",
        records.len(),
        json_files.len()
    );
    let count = json_files.len();
    Ok((records, DataSource::JsonFiles(count)))
}

/// Read the flat summary CSV.
pub fn load_csv(path: &Path) -> Result<Vec<HealthRecord>, PopulateError> {
    debug!("Reading CSV '{}'", path.display());
    let mut reader = Reader::from_reader(BufReader::new(File::open(path)?));

    let mut records = Vec::new();
    for row in reader.deserialize::<CsvRow>() {
        let record = row?.into_record().map_err(|e| PopulateError::Parse {
            path: path.to_path_buf(),
            message: format!("invalid created_date: {e}"),
        })?;
        records.push(record);
    }
    Ok(records)
}

/// Read one per-person JSON file.
pub fn load_json(path: &Path) -> Result<HealthRecord, PopulateError> {
    debug!("Reading JSON '{}'", path.display());
    let reader = BufReader::new(File::open(path)?);
    serde_json::from_reader(reader).map_err(|e| PopulateError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Every `<dir>/*/health_data.json`, ordered by folder index, then by path.
///
/// Padding is only four digits, so `10000_x` must sort after `9999_y`.
fn person_json_files(dir: &Path) -> Result<Vec<PathBuf>, PopulateError> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_dir() {
            continue;
        }
        let candidate = entry.path().join(PERSON_JSON);
        if candidate.is_file() {
            let index = entry.file_name().to_str().and_then(folder_index);
            files.push((index.unwrap_or(u64::MAX), candidate));
        }
    }
    files.sort();
    Ok(files.into_iter().map(|(_, path)| path).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_directory() {
        let tmp = TempDir::new().unwrap();
        let err = load_records(tmp.path().join("nope")).unwrap_err();
        assert!(matches!(err, PopulateError::NoData(_)));
    }

    #[test]
    fn test_empty_directory() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join("0001_empty")).unwrap();
        let err = load_records(tmp.path()).unwrap_err();
        assert!(matches!(err, PopulateError::NoData(_)));
    }

    #[test]
    fn test_json_files_in_index_order() {
        let tmp = TempDir::new().unwrap();
        let config = health_core::GeneratorConfig::default();
        let records = health_generator::RecordGenerator::from_config(config, 7)
            .unwrap()
            .generate_batch(3)
            .unwrap();
        let folders = ["9999_first", "10000_second", "0002_early"];
        for (folder, record) in folders.iter().zip(&records) {
            let person = tmp.path().join(folder);
            fs::create_dir(&person).unwrap();
            fs::write(
                person.join(PERSON_JSON),
                serde_json::to_string(record).unwrap(),
            )
            .unwrap();
        }

        let loaded = load_records(tmp.path()).unwrap();
        let expected = vec![records[2].clone(), records[0].clone(), records[1].clone()];
        assert_eq!(loaded, expected);
    }

    #[test]
    fn test_malformed_json() {
        let tmp = TempDir::new().unwrap();
        let person = tmp.path().join("0001_broken");
        fs::create_dir(&person).unwrap();
        fs::write(person.join(PERSON_JSON), "{ not json").unwrap();

        let err = load_records(tmp.path()).unwrap_err();
        assert!(matches!(err, PopulateError::Parse { .. }));
    }
}
