//! Configuration for record generation and output.
//!
//! Config files are flat maps; every key is optional and falls back to the
//! documented default. Ranges are written as two-element arrays:
//!
//! ```yaml
//! age_range: [18, 80]
//! male_height_range: [160.0, 185.0]
//! locale: en-US
//! history:
//!   none_probability: 0.2
//! generate_csv: true
//! ```

use crate::error::{ConfigError, ValidationError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

// ============================================================================
// Ranges
// ============================================================================

/// Inclusive integer range, serialized as `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "[u32; 2]", into = "[u32; 2]")]
pub struct IntRange {
    pub min: u32,
    pub max: u32,
}

impl IntRange {
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: u32) -> bool {
        (self.min..=self.max).contains(&value)
    }

    fn validate(&self, field: &'static str) -> Result<(), ValidationError> {
        if self.min > self.max {
            return Err(ValidationError::InvalidRange {
                field,
                min: self.min as f64,
                max: self.max as f64,
            });
        }
        Ok(())
    }
}

impl From<[u32; 2]> for IntRange {
    fn from([min, max]: [u32; 2]) -> Self {
        Self { min, max }
    }
}

impl From<IntRange> for [u32; 2] {
    fn from(range: IntRange) -> Self {
        [range.min, range.max]
    }
}

/// Inclusive float range, serialized as `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct FloatRange {
    pub min: f64,
    pub max: f64,
}

impl FloatRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }

    fn validate(&self, field: &'static str) -> Result<(), ValidationError> {
        // Also rejects NaN and infinite bounds
        if !(self.min.is_finite() && self.max.is_finite() && self.min <= self.max) {
            return Err(ValidationError::InvalidRange {
                field,
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }
}

impl From<[f64; 2]> for FloatRange {
    fn from([min, max]: [f64; 2]) -> Self {
        Self { min, max }
    }
}

impl From<FloatRange> for [f64; 2] {
    fn from(range: FloatRange) -> Self {
        [range.min, range.max]
    }
}

// ============================================================================
// Generator settings
// ============================================================================

/// Locale used to pick name, address and contact formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    #[serde(rename = "zh-TW")]
    ZhTw,
    #[serde(rename = "en-US")]
    EnUs,
}

impl Locale {
    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::ZhTw => "zh-TW",
            Locale::EnUs => "en-US",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Medical history sampling settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoryConfig {
    /// Probability that a category holds only its "none" sentinel
    pub none_probability: f64,
    pub allergies_max: usize,
    pub chronic_diseases_max: usize,
    pub medications_max: usize,
    pub surgeries_max: usize,
    pub family_history_max: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            none_probability: 0.15,
            allergies_max: 3,
            chronic_diseases_max: 2,
            medications_max: 3,
            surgeries_max: 2,
            family_history_max: 3,
        }
    }
}

/// Value ranges and sampling settings for record generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub locale: Locale,
    pub age_range: IntRange,
    pub male_height_range: FloatRange,
    pub male_weight_range: FloatRange,
    pub female_height_range: FloatRange,
    pub female_weight_range: FloatRange,
    pub blood_pressure_systolic_range: IntRange,
    pub blood_pressure_diastolic_range: IntRange,
    pub heart_rate_range: IntRange,
    pub body_temperature_range: FloatRange,
    /// Base range before the age adjustment is applied
    pub blood_sugar_base_range: FloatRange,
    /// Base range before the age adjustment is applied
    pub cholesterol_base_range: FloatRange,
    pub history: HistoryConfig,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            age_range: IntRange::new(18, 80),
            male_height_range: FloatRange::new(160.0, 185.0),
            male_weight_range: FloatRange::new(55.0, 90.0),
            female_height_range: FloatRange::new(150.0, 175.0),
            female_weight_range: FloatRange::new(45.0, 75.0),
            blood_pressure_systolic_range: IntRange::new(110, 140),
            blood_pressure_diastolic_range: IntRange::new(70, 90),
            heart_rate_range: IntRange::new(60, 100),
            body_temperature_range: FloatRange::new(36.0, 37.5),
            blood_sugar_base_range: FloatRange::new(80.0, 120.0),
            cholesterol_base_range: FloatRange::new(150.0, 250.0),
            history: HistoryConfig::default(),
        }
    }
}

impl GeneratorConfig {
    /// Check every range and probability.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.age_range.validate("age_range")?;
        self.male_height_range.validate("male_height_range")?;
        self.male_weight_range.validate("male_weight_range")?;
        self.female_height_range.validate("female_height_range")?;
        self.female_weight_range.validate("female_weight_range")?;
        self.blood_pressure_systolic_range
            .validate("blood_pressure_systolic_range")?;
        self.blood_pressure_diastolic_range
            .validate("blood_pressure_diastolic_range")?;
        self.heart_rate_range.validate("heart_rate_range")?;
        self.body_temperature_range
            .validate("body_temperature_range")?;
        self.blood_sugar_base_range
            .validate("blood_sugar_base_range")?;
        self.cholesterol_base_range
            .validate("cholesterol_base_range")?;

        for (field, range) in [
            ("male_height_range", self.male_height_range),
            ("female_height_range", self.female_height_range),
        ] {
            // BMI divides by height
            if range.min <= 0.0 {
                return Err(ValidationError::InvalidRange {
                    field,
                    min: range.min,
                    max: range.max,
                });
            }
        }

        let systolic_min = self.blood_pressure_systolic_range.min;
        let diastolic_min = self.blood_pressure_diastolic_range.min;
        if diastolic_min >= systolic_min {
            return Err(ValidationError::BloodPressureOverlap {
                systolic_min,
                diastolic_min,
            });
        }

        let p = self.history.none_probability;
        if !(0.0..=1.0).contains(&p) {
            return Err(ValidationError::InvalidProbability {
                field: "history.none_probability",
                value: p,
            });
        }

        Ok(())
    }
}

// ============================================================================
// Output settings
// ============================================================================

/// Output toggles used by the file populator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub output_directory: PathBuf,
    /// Write `health_data_summary.csv`
    pub generate_csv: bool,
    /// Write `health_data.json` into each person folder
    pub generate_json: bool,
    /// Create one folder per person
    pub create_folders: bool,
    /// Copy `template_image` into each person folder
    pub copy_template: bool,
    pub template_image: Option<PathBuf>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            output_directory: PathBuf::from("./generated_health_data"),
            generate_csv: true,
            generate_json: true,
            create_folders: true,
            copy_template: false,
            template_image: None,
        }
    }
}

// ============================================================================
// Top-level config file
// ============================================================================

/// Full configuration file: generator settings and output toggles side by side.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(flatten)]
    pub generator: GeneratorConfig,

    #[serde(flatten)]
    pub output: OutputConfig,
}

impl Config {
    /// Load a config file. `.yaml`/`.yml` files are parsed as YAML, anything else as JSON.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        if is_yaml(path) {
            Self::from_yaml(&content)
        } else {
            Self::from_json(&content)
        }
    }

    /// Parse and validate a YAML config.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_yaml::from_str(yaml)?;
        config.generator.validate()?;
        Ok(config)
    }

    /// Parse and validate a JSON config.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_json::from_str(json)?;
        config.generator.validate()?;
        Ok(config)
    }

    /// Write the config to a file, choosing the format from the extension.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let content = if is_yaml(path) {
            serde_yaml::to_string(self)?
        } else {
            serde_json::to_string_pretty(self)?
        };
        fs::write(path, content)?;
        Ok(())
    }
}

fn is_yaml(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yaml") | Some("yml")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locale_display() {
        assert_eq!(Locale::default().to_string(), "zh-TW");
        assert_eq!(Locale::EnUs.to_string(), "en-US");
    }

    #[test]
    fn test_empty_yaml_uses_defaults() {
        let config = Config::from_yaml("{}").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_partial_yaml_overrides() {
        let yaml = r#"
age_range: [30, 40]
female_weight_range: [50.0, 60.5]
locale: en-US
history:
  none_probability: 0.5
generate_csv: false
"#;
        let config = Config::from_yaml(yaml).unwrap();
        assert_eq!(config.generator.age_range, IntRange::new(30, 40));
        assert_eq!(
            config.generator.female_weight_range,
            FloatRange::new(50.0, 60.5)
        );
        assert_eq!(config.generator.locale, Locale::EnUs);
        assert_eq!(config.generator.history.none_probability, 0.5);
        // Unset history keys keep their defaults
        assert_eq!(config.generator.history.allergies_max, 3);
        assert!(!config.output.generate_csv);
        assert!(config.output.generate_json);
        assert_eq!(
            config.generator.male_height_range,
            FloatRange::new(160.0, 185.0)
        );
    }

    #[test]
    fn test_json_config() {
        let json = r#"{"heart_rate_range": [50, 70], "create_folders": false}"#;
        let config = Config::from_json(json).unwrap();
        assert_eq!(config.generator.heart_rate_range, IntRange::new(50, 70));
        assert!(!config.output.create_folders);
    }

    #[test]
    fn test_inverted_range_rejected() {
        let err = Config::from_yaml("age_range: [80, 18]").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Validation(ValidationError::InvalidRange {
                field: "age_range",
                ..
            })
        ));
    }

    #[test]
    fn test_blood_pressure_overlap_rejected() {
        let mut config = GeneratorConfig::default();
        config.blood_pressure_diastolic_range = IntRange::new(110, 120);
        assert_eq!(
            config.validate(),
            Err(ValidationError::BloodPressureOverlap {
                systolic_min: 110,
                diastolic_min: 110,
            })
        );
    }

    #[test]
    fn test_probability_rejected() {
        let mut config = GeneratorConfig::default();
        config.history.none_probability = 1.5;
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidProbability { .. })
        ));
    }

    #[test]
    fn test_nan_range_rejected() {
        let mut config = GeneratorConfig::default();
        config.body_temperature_range = FloatRange::new(f64::NAN, 37.0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_save_and_load_yaml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");

        let mut config = Config::default();
        config.generator.age_range = IntRange::new(25, 35);
        config.output.template_image = Some(PathBuf::from("1.png"));
        config.save(&path).unwrap();

        let loaded = Config::from_file(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_save_and_load_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let config = Config::default();
        config.save(&path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("\"age_range\": ["));
        assert_eq!(Config::from_file(&path).unwrap(), config);
    }
}
