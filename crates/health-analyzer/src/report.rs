//! Report types produced by the analyzer.
//!
//! All floating point fields are rounded to one decimal.

use crate::stats;
use chrono::{DateTime, Utc};
use health_core::round1;
use serde::{Deserialize, Serialize};

/// Count, centre and spread of one numeric field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SummaryStats {
    pub count: usize,
    pub mean: f64,
    pub median: f64,
    pub min: f64,
    pub max: f64,
    /// Sample standard deviation (N - 1 divisor)
    pub std_dev: f64,
}

impl SummaryStats {
    /// Compute at full precision, then round for the report. `None` when empty.
    pub fn from_values(values: &[f64]) -> Option<Self> {
        Some(Self {
            count: values.len(),
            mean: round1(stats::mean(values)?),
            median: round1(stats::median(values)?),
            min: round1(stats::min(values)?),
            max: round1(stats::max(values)?),
            std_dev: round1(stats::sample_std_dev(values)?),
        })
    }
}

/// One bucket of a categorical breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryShare {
    pub label: String,
    pub count: usize,
    pub percentage: f64,
}

impl CategoryShare {
    pub fn new(label: impl Into<String>, count: usize, total: usize) -> Self {
        Self {
            label: label.into(),
            count,
            percentage: round1(stats::percentage(count, total)),
        }
    }
}

/// How often one history item appears across the batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemFrequency {
    pub item: String,
    pub count: usize,
}

/// Frequencies of one history category, most common first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrequencyTable {
    /// Number of entries across all records, "none" sentinels excluded
    pub total_mentions: usize,
    /// Number of distinct entries before truncation
    pub distinct_items: usize,
    /// Records that list the category's "none" sentinel
    #[serde(default)]
    pub none_count: usize,
    /// Most common entries, truncated to the configured top-K
    pub top: Vec<ItemFrequency>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Demographics {
    pub age: SummaryStats,
    pub gender: Vec<CategoryShare>,
    pub age_groups: Vec<CategoryShare>,
    pub blood_type: Vec<CategoryShare>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VitalSigns {
    pub bmi: SummaryStats,
    pub blood_pressure_systolic: SummaryStats,
    pub blood_pressure_diastolic: SummaryStats,
    pub heart_rate: SummaryStats,
    pub body_temperature: SummaryStats,
    pub blood_sugar: SummaryStats,
    pub cholesterol: SummaryStats,
    pub bmi_categories: Vec<CategoryShare>,
    pub blood_pressure_categories: Vec<CategoryShare>,
}

impl VitalSigns {
    /// Display name and stats of every metric, in report order.
    pub fn metrics(&self) -> [(&'static str, &SummaryStats); 7] {
        [
            ("BMI", &self.bmi),
            ("Systolic BP (mmHg)", &self.blood_pressure_systolic),
            ("Diastolic BP (mmHg)", &self.blood_pressure_diastolic),
            ("Heart rate (bpm)", &self.heart_rate),
            ("Body temperature (C)", &self.body_temperature),
            ("Blood sugar (mg/dL)", &self.blood_sugar),
            ("Cholesterol (mg/dL)", &self.cholesterol),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistorySummary {
    pub allergies: FrequencyTable,
    pub chronic_diseases: FrequencyTable,
    pub medications: FrequencyTable,
    pub surgeries: FrequencyTable,
    pub family_history: FrequencyTable,
}

impl HistorySummary {
    /// Display name and table of every category, in report order.
    pub fn categories(&self) -> [(&'static str, &FrequencyTable); 5] {
        [
            ("Allergies", &self.allergies),
            ("Chronic diseases", &self.chronic_diseases),
            ("Medications", &self.medications),
            ("Surgeries", &self.surgeries),
            ("Family history", &self.family_history),
        ]
    }
}

/// Aggregate statistics over one batch of records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub total_records: usize,
    pub demographics: Demographics,
    pub vitals: VitalSigns,
    pub history: HistorySummary,
    pub analyzed_at: DateTime<Utc>,
}
