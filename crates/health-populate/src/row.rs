//! Flat CSV representation of a [`HealthRecord`].

use chrono::NaiveDateTime;
use health_core::{
    BloodType, Gender, HealthMetrics, HealthRecord, MedicalHistory, PersonalInfo,
    CREATED_DATE_FORMAT,
};
use serde::{Deserialize, Serialize};

/// Separator used for list columns in the summary CSV.
pub const LIST_SEPARATOR: &str = "; ";

/// One row of `health_data_summary.csv`.
///
/// Columns follow the nested record: personal info, then metrics, then history.
/// History lists are joined with [`LIST_SEPARATOR`]; an empty list is an empty cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CsvRow {
    pub name: String,
    pub age: u32,
    pub gender: Gender,
    pub height: f64,
    pub weight: f64,
    pub blood_type: BloodType,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub emergency_contact: String,
    pub id_number: String,
    pub bmi: f64,
    pub blood_pressure_systolic: u32,
    pub blood_pressure_diastolic: u32,
    pub heart_rate: u32,
    pub body_temperature: f64,
    pub blood_sugar: f64,
    pub cholesterol: f64,
    pub created_date: String,
    pub allergies: String,
    pub chronic_diseases: String,
    pub medications: String,
    pub surgeries: String,
    pub family_history: String,
}

impl From<&HealthRecord> for CsvRow {
    fn from(record: &HealthRecord) -> Self {
        let p = &record.personal_info;
        let m = &record.health_metrics;
        let h = &record.medical_history;

        Self {
            name: p.name.clone(),
            age: p.age,
            gender: p.gender,
            height: p.height,
            weight: p.weight,
            blood_type: p.blood_type,
            phone: p.phone.clone(),
            email: p.email.clone(),
            address: p.address.clone(),
            emergency_contact: p.emergency_contact.clone(),
            id_number: p.id_number.clone(),
            bmi: m.bmi,
            blood_pressure_systolic: m.blood_pressure_systolic,
            blood_pressure_diastolic: m.blood_pressure_diastolic,
            heart_rate: m.heart_rate,
            body_temperature: m.body_temperature,
            blood_sugar: m.blood_sugar,
            cholesterol: m.cholesterol,
            created_date: m.created_date.format(CREATED_DATE_FORMAT).to_string(),
            allergies: join_list(&h.allergies),
            chronic_diseases: join_list(&h.chronic_diseases),
            medications: join_list(&h.medications),
            surgeries: join_list(&h.surgeries),
            family_history: join_list(&h.family_history),
        }
    }
}

impl CsvRow {
    /// Rebuild the nested record. Fails only on a malformed `created_date`.
    pub fn into_record(self) -> Result<HealthRecord, chrono::ParseError> {
        let created_date = NaiveDateTime::parse_from_str(&self.created_date, CREATED_DATE_FORMAT)?;

        Ok(HealthRecord {
            personal_info: PersonalInfo {
                name: self.name,
                age: self.age,
                gender: self.gender,
                height: self.height,
                weight: self.weight,
                blood_type: self.blood_type,
                phone: self.phone,
                email: self.email,
                address: self.address,
                emergency_contact: self.emergency_contact,
                id_number: self.id_number,
            },
            health_metrics: HealthMetrics {
                bmi: self.bmi,
                blood_pressure_systolic: self.blood_pressure_systolic,
                blood_pressure_diastolic: self.blood_pressure_diastolic,
                heart_rate: self.heart_rate,
                body_temperature: self.body_temperature,
                blood_sugar: self.blood_sugar,
                cholesterol: self.cholesterol,
                created_date,
            },
            medical_history: MedicalHistory {
                allergies: split_list(&self.allergies),
                chronic_diseases: split_list(&self.chronic_diseases),
                medications: split_list(&self.medications),
                surgeries: split_list(&self.surgeries),
                family_history: split_list(&self.family_history),
            },
        })
    }
}

fn join_list(items: &[String]) -> String {
    items.join(LIST_SEPARATOR)
}

fn split_list(cell: &str) -> Vec<String> {
    cell.split(';')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_list() {
        assert_eq!(split_list(""), Vec::<String>::new());
        assert_eq!(split_list("Pollen"), vec!["Pollen"]);
        assert_eq!(split_list("Pollen; Milk;  Eggs "), vec!["Pollen", "Milk", "Eggs"]);
    }

    #[test]
    fn test_join_list() {
        let items = vec!["Pollen".to_string(), "Milk".to_string()];
        assert_eq!(join_list(&items), "Pollen; Milk");
        assert_eq!(join_list(&[]), "");
    }

    fn sample_record() -> HealthRecord {
        HealthRecord {
            personal_info: PersonalInfo {
                name: "Ava Young".to_string(),
                age: 33,
                gender: Gender::Female,
                height: 165.0,
                weight: 60.0,
                blood_type: BloodType::AB,
                phone: "(212) 555-0101".to_string(),
                email: "user1234@gmail.com".to_string(),
                address: "Boston, MA".to_string(),
                emergency_contact: "(212) 555-0102".to_string(),
                id_number: "912-34-5678".to_string(),
            },
            health_metrics: HealthMetrics {
                bmi: 22.0,
                blood_pressure_systolic: 118,
                blood_pressure_diastolic: 76,
                heart_rate: 72,
                body_temperature: 36.6,
                blood_sugar: 92.3,
                cholesterol: 181.4,
                created_date: NaiveDateTime::parse_from_str(
                    "2024-03-01 08:30:00",
                    CREATED_DATE_FORMAT,
                )
                .unwrap(),
            },
            medical_history: MedicalHistory {
                allergies: vec!["Pollen".to_string(), "Milk".to_string()],
                ..Default::default()
            },
        }
    }

    #[test]
    fn test_row_roundtrip() {
        let record = sample_record();
        let row = CsvRow::from(&record);
        assert_eq!(row.created_date, "2024-03-01 08:30:00");
        assert_eq!(row.allergies, "Pollen; Milk");
        assert_eq!(row.medications, "");
        assert_eq!(row.into_record().unwrap(), record);
    }

    #[test]
    fn test_bad_created_date() {
        let broken = CsvRow {
            created_date: "yesterday".to_string(),
            ..CsvRow::from(&sample_record())
        };
        assert!(broken.into_record().is_err());
    }
}
