//! Record types produced by the generator and consumed by the analyzer.
//!
//! A [`HealthRecord`] bundles three groups of fields. Field names here are the
//! serialized names; the JSON and CSV writers keep them verbatim.

use crate::config::GeneratorConfig;
use crate::error::ValidationError;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Serialized format of `created_date`.
pub const CREATED_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Round to one decimal place.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Body mass index from height in centimetres and weight in kilograms,
/// rounded to one decimal.
pub fn calculate_bmi(height_cm: f64, weight_kg: f64) -> f64 {
    let height_m = height_cm / 100.0;
    round1(weight_kg / (height_m * height_m))
}

// ============================================================================
// Enumerations
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub const ALL: [Gender; 2] = [Gender::Male, Gender::Female];

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BloodType {
    A,
    B,
    AB,
    O,
}

impl BloodType {
    pub const ALL: [BloodType; 4] = [BloodType::A, BloodType::B, BloodType::AB, BloodType::O];

    pub fn as_str(&self) -> &'static str {
        match self {
            BloodType::A => "A",
            BloodType::B => "B",
            BloodType::AB => "AB",
            BloodType::O => "O",
        }
    }
}

impl fmt::Display for BloodType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Record parts
// ============================================================================

/// Identity, body measurements and contact details.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonalInfo {
    pub name: String,
    pub age: u32,
    pub gender: Gender,
    /// Centimetres
    pub height: f64,
    /// Kilograms
    pub weight: f64,
    pub blood_type: BloodType,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub emergency_contact: String,
    pub id_number: String,
}

/// Vital signs. `bmi` is always derived from the owning record's height and weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthMetrics {
    pub bmi: f64,
    pub blood_pressure_systolic: u32,
    pub blood_pressure_diastolic: u32,
    pub heart_rate: u32,
    pub body_temperature: f64,
    pub blood_sugar: f64,
    pub cholesterol: f64,
    #[serde(with = "created_date_format")]
    pub created_date: NaiveDateTime,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MedicalHistory {
    pub allergies: Vec<String>,
    pub chronic_diseases: Vec<String>,
    pub medications: Vec<String>,
    pub surgeries: Vec<String>,
    pub family_history: Vec<String>,
}

/// One synthetic person.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthRecord {
    pub personal_info: PersonalInfo,
    pub health_metrics: HealthMetrics,
    pub medical_history: MedicalHistory,
}

impl HealthRecord {
    /// Check the record against the ranges it was generated from.
    ///
    /// Verifies age and gender-specific height/weight bounds, that `bmi`
    /// matches height and weight exactly, and that systolic > diastolic.
    pub fn check_invariants(&self, config: &GeneratorConfig) -> Result<(), ValidationError> {
        let person = &self.personal_info;
        let metrics = &self.health_metrics;

        if !config.age_range.contains(person.age) {
            return Err(ValidationError::InvariantViolated(format!(
                "age {} outside {:?}",
                person.age, config.age_range
            )));
        }

        let (height_range, weight_range) = match person.gender {
            Gender::Male => (config.male_height_range, config.male_weight_range),
            Gender::Female => (config.female_height_range, config.female_weight_range),
        };
        if !height_range.contains(person.height) {
            return Err(ValidationError::InvariantViolated(format!(
                "{} height {} outside {:?}",
                person.gender, person.height, height_range
            )));
        }
        if !weight_range.contains(person.weight) {
            return Err(ValidationError::InvariantViolated(format!(
                "{} weight {} outside {:?}",
                person.gender, person.weight, weight_range
            )));
        }

        let expected_bmi = calculate_bmi(person.height, person.weight);
        if metrics.bmi != expected_bmi {
            return Err(ValidationError::InvariantViolated(format!(
                "bmi {} does not match height {} and weight {} (expected {expected_bmi})",
                metrics.bmi, person.height, person.weight
            )));
        }

        if metrics.blood_pressure_systolic <= metrics.blood_pressure_diastolic {
            return Err(ValidationError::InvariantViolated(format!(
                "systolic {} is not above diastolic {}",
                metrics.blood_pressure_systolic, metrics.blood_pressure_diastolic
            )));
        }

        Ok(())
    }
}

mod created_date_format {
    use super::CREATED_DATE_FORMAT;
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(date: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&date.format(CREATED_DATE_FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&raw, CREATED_DATE_FORMAT).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample_record() -> HealthRecord {
        HealthRecord {
            personal_info: PersonalInfo {
                name: "Test Person".to_string(),
                age: 40,
                gender: Gender::Female,
                height: 165.0,
                weight: 60.0,
                blood_type: BloodType::AB,
                phone: "0912345678".to_string(),
                email: "user1234@gmail.com".to_string(),
                address: "Somewhere".to_string(),
                emergency_contact: "0987654321".to_string(),
                id_number: "A212345678".to_string(),
            },
            health_metrics: HealthMetrics {
                bmi: calculate_bmi(165.0, 60.0),
                blood_pressure_systolic: 120,
                blood_pressure_diastolic: 80,
                heart_rate: 72,
                body_temperature: 36.6,
                blood_sugar: 95.0,
                cholesterol: 180.0,
                created_date: NaiveDate::from_ymd_opt(2024, 5, 1)
                    .unwrap()
                    .and_hms_opt(8, 30, 0)
                    .unwrap(),
            },
            medical_history: MedicalHistory {
                allergies: vec!["Pollen".to_string()],
                ..Default::default()
            },
        }
    }

    #[test]
    fn test_calculate_bmi() {
        assert_eq!(calculate_bmi(165.0, 60.0), 22.0);
        assert_eq!(calculate_bmi(180.0, 90.0), 27.8);
        assert_eq!(calculate_bmi(150.0, 45.0), 20.0);
    }

    #[test]
    fn test_round1() {
        assert_eq!(round1(36.64), 36.6);
        assert_eq!(round1(36.66), 36.7);
        assert_eq!(round1(-1.25), -1.3);
    }

    #[test]
    fn test_serialized_field_names() {
        let json = serde_json::to_value(sample_record()).unwrap();

        assert_eq!(json["personal_info"]["gender"], "female");
        assert_eq!(json["personal_info"]["blood_type"], "AB");
        assert_eq!(
            json["health_metrics"]["created_date"],
            "2024-05-01 08:30:00"
        );
        assert_eq!(json["health_metrics"]["bmi"], 22.0);
        assert_eq!(json["medical_history"]["allergies"][0], "Pollen");
        assert!(json["medical_history"]["family_history"]
            .as_array()
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_invariants_hold() {
        let record = sample_record();
        assert!(record
            .check_invariants(&GeneratorConfig::default())
            .is_ok());
    }

    #[test]
    fn test_invariants_catch_bmi_mismatch() {
        let mut record = sample_record();
        record.health_metrics.bmi = 30.0;
        let err = record
            .check_invariants(&GeneratorConfig::default())
            .unwrap_err();
        assert!(err.to_string().contains("bmi"));
    }

    #[test]
    fn test_invariants_catch_blood_pressure() {
        let mut record = sample_record();
        record.health_metrics.blood_pressure_diastolic = 120;
        assert!(record
            .check_invariants(&GeneratorConfig::default())
            .is_err());
    }

    #[test]
    fn test_invariants_use_gender_ranges() {
        // 180cm is inside the male range but outside the female one
        let mut record = sample_record();
        record.personal_info.height = 180.0;
        record.health_metrics.bmi = calculate_bmi(180.0, 60.0);
        assert!(record
            .check_invariants(&GeneratorConfig::default())
            .is_err());

        record.personal_info.gender = Gender::Male;
        record.personal_info.weight = 60.0;
        assert!(record
            .check_invariants(&GeneratorConfig::default())
            .is_ok());
    }
}
