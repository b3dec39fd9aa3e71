//! Aggregation of a record batch into an [`AnalysisReport`].

use crate::categories::{AgeGroup, BloodPressureCategory, BmiCategory};
use crate::error::AnalysisError;
use crate::report::{
    AnalysisReport, CategoryShare, Demographics, FrequencyTable, HistorySummary, ItemFrequency,
    SummaryStats, VitalSigns,
};
use chrono::Utc;
use health_core::{BloodType, Gender, HealthRecord, Locale};
use health_generator::DataPools;
use std::collections::{BTreeSet, HashMap};
use tracing::debug;

/// Number of history items reported per category by default.
pub const DEFAULT_TOP_K: usize = 5;

/// Analysis settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyzeOptions {
    /// Keep only the K most frequent items per history category (`None` = keep all)
    pub top_k: Option<usize>,
    /// History entries meaning "nothing to report"; counted in `none_count`
    /// instead of the frequency tables
    pub none_markers: BTreeSet<String>,
}

impl Default for AnalyzeOptions {
    fn default() -> Self {
        Self {
            top_k: Some(DEFAULT_TOP_K),
            none_markers: builtin_none_markers(),
        }
    }
}

/// Sentinels of every built-in locale.
pub fn builtin_none_markers() -> BTreeSet<String> {
    [Locale::ZhTw, Locale::EnUs]
        .into_iter()
        .flat_map(|locale| {
            DataPools::for_locale(locale)
                .sentinels()
                .map(str::to_string)
        })
        .collect()
}

/// Analyze a batch with default options.
pub fn analyze(records: &[HealthRecord]) -> Result<AnalysisReport, AnalysisError> {
    analyze_with(records, &AnalyzeOptions::default())
}

/// Analyze a batch. Fails on an empty batch.
pub fn analyze_with(
    records: &[HealthRecord],
    options: &AnalyzeOptions,
) -> Result<AnalysisReport, AnalysisError> {
    if records.is_empty() {
        return Err(AnalysisError::EmptyDataset);
    }

    debug!("Analyzing {} records", records.len());

    Ok(AnalysisReport {
        total_records: records.len(),
        demographics: analyze_demographics(records),
        vitals: analyze_vitals(records),
        history: analyze_history(records, options),
        analyzed_at: Utc::now(),
    })
}

fn summarize<F>(records: &[HealthRecord], field: F) -> SummaryStats
where
    F: Fn(&HealthRecord) -> f64,
{
    let values: Vec<f64> = records.iter().map(field).collect();
    // Callers guarantee a non-empty batch
    SummaryStats::from_values(&values).unwrap_or_default()
}

/// Count records per bucket, keeping every bucket (even empty ones) in `buckets` order.
fn breakdown<K, L, F>(
    records: &[HealthRecord],
    buckets: &[K],
    label: L,
    key: F,
) -> Vec<CategoryShare>
where
    K: PartialEq,
    L: Fn(&K) -> String,
    F: Fn(&HealthRecord) -> K,
{
    let mut counts = vec![0usize; buckets.len()];
    for record in records {
        let k = key(record);
        if let Some(idx) = buckets.iter().position(|b| *b == k) {
            counts[idx] += 1;
        }
    }

    buckets
        .iter()
        .zip(counts)
        .map(|(bucket, count)| CategoryShare::new(label(bucket), count, records.len()))
        .collect()
}

fn analyze_demographics(records: &[HealthRecord]) -> Demographics {
    Demographics {
        age: summarize(records, |r| r.personal_info.age as f64),
        gender: breakdown(
            records,
            &Gender::ALL,
            |g| g.to_string(),
            |r| r.personal_info.gender,
        ),
        age_groups: breakdown(
            records,
            &AgeGroup::ALL,
            |g| g.label().to_string(),
            |r| AgeGroup::from_age(r.personal_info.age),
        ),
        blood_type: breakdown(
            records,
            &BloodType::ALL,
            |b| b.to_string(),
            |r| r.personal_info.blood_type,
        ),
    }
}

fn analyze_vitals(records: &[HealthRecord]) -> VitalSigns {
    VitalSigns {
        bmi: summarize(records, |r| r.health_metrics.bmi),
        blood_pressure_systolic: summarize(records, |r| {
            r.health_metrics.blood_pressure_systolic as f64
        }),
        blood_pressure_diastolic: summarize(records, |r| {
            r.health_metrics.blood_pressure_diastolic as f64
        }),
        heart_rate: summarize(records, |r| r.health_metrics.heart_rate as f64),
        body_temperature: summarize(records, |r| r.health_metrics.body_temperature),
        blood_sugar: summarize(records, |r| r.health_metrics.blood_sugar),
        cholesterol: summarize(records, |r| r.health_metrics.cholesterol),
        bmi_categories: breakdown(
            records,
            &BmiCategory::ALL,
            |c| c.label().to_string(),
            |r| BmiCategory::from_bmi(r.health_metrics.bmi),
        ),
        blood_pressure_categories: breakdown(
            records,
            &BloodPressureCategory::ALL,
            |c| c.label().to_string(),
            |r| {
                BloodPressureCategory::from_reading(
                    r.health_metrics.blood_pressure_systolic,
                    r.health_metrics.blood_pressure_diastolic,
                )
            },
        ),
    }
}

fn analyze_history(records: &[HealthRecord], options: &AnalyzeOptions) -> HistorySummary {
    HistorySummary {
        allergies: frequencies(records, options, |r| &r.medical_history.allergies),
        chronic_diseases: frequencies(records, options, |r| &r.medical_history.chronic_diseases),
        medications: frequencies(records, options, |r| &r.medical_history.medications),
        surgeries: frequencies(records, options, |r| &r.medical_history.surgeries),
        family_history: frequencies(records, options, |r| &r.medical_history.family_history),
    }
}

/// Count every distinct item, most frequent first (ties broken alphabetically).
///
/// Entries in `options.none_markers` are left out of the counts; each record
/// holding one adds to `none_count` instead.
fn frequencies<F>(records: &[HealthRecord], options: &AnalyzeOptions, items: F) -> FrequencyTable
where
    F: Fn(&HealthRecord) -> &Vec<String>,
{
    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut total_mentions = 0;
    let mut none_count = 0;

    for record in records {
        let mut has_marker = false;
        for item in items(record) {
            if options.none_markers.contains(item) {
                has_marker = true;
                continue;
            }
            *counts.entry(item.as_str()).or_insert(0) += 1;
            total_mentions += 1;
        }
        if has_marker {
            none_count += 1;
        }
    }

    let distinct_items = counts.len();
    let mut top: Vec<ItemFrequency> = counts
        .into_iter()
        .map(|(item, count)| ItemFrequency {
            item: item.to_string(),
            count,
        })
        .collect();
    top.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.item.cmp(&b.item)));

    if let Some(k) = options.top_k {
        top.truncate(k);
    }

    FrequencyTable {
        total_mentions,
        distinct_items,
        none_count,
        top,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use health_core::{calculate_bmi, HealthMetrics, MedicalHistory, PersonalInfo};

    fn record(
        age: u32,
        gender: Gender,
        height: f64,
        weight: f64,
        allergies: &[&str],
    ) -> HealthRecord {
        HealthRecord {
            personal_info: PersonalInfo {
                name: format!("person-{age}"),
                age,
                gender,
                height,
                weight,
                blood_type: BloodType::O,
                phone: "0900000000".to_string(),
                email: "user1000@example.com".to_string(),
                address: "Somewhere".to_string(),
                emergency_contact: "0900000001".to_string(),
                id_number: "A100000000".to_string(),
            },
            health_metrics: HealthMetrics {
                bmi: calculate_bmi(height, weight),
                blood_pressure_systolic: 120,
                blood_pressure_diastolic: 80,
                heart_rate: 70,
                body_temperature: 36.5,
                blood_sugar: 90.0,
                cholesterol: 180.0,
                created_date: NaiveDate::from_ymd_opt(2024, 1, 1)
                    .unwrap()
                    .and_hms_opt(0, 0, 0)
                    .unwrap(),
            },
            medical_history: MedicalHistory {
                allergies: allergies.iter().map(|s| s.to_string()).collect(),
                ..Default::default()
            },
        }
    }

    #[test]
    fn test_empty_dataset() {
        assert_eq!(analyze(&[]).unwrap_err(), AnalysisError::EmptyDataset);
    }

    #[test]
    fn test_single_record() {
        let report = analyze(&[record(40, Gender::Male, 175.0, 70.0, &[])]).unwrap();

        assert_eq!(report.total_records, 1);
        let age = &report.demographics.age;
        assert_eq!(age.count, 1);
        assert_eq!(age.mean, 40.0);
        assert_eq!(age.median, 40.0);
        assert_eq!(age.std_dev, 0.0);
        assert_eq!(age.min, 40.0);
        assert_eq!(age.max, 40.0);

        assert_eq!(report.demographics.gender[0].label, "male");
        assert_eq!(report.demographics.gender[0].percentage, 100.0);
        assert_eq!(report.demographics.gender[1].count, 0);
        assert_eq!(report.demographics.gender[1].percentage, 0.0);
    }

    #[test]
    fn test_age_groups_cover_everyone() {
        let records: Vec<_> = [10, 18, 30, 31, 50, 70, 90]
            .into_iter()
            .map(|age| record(age, Gender::Female, 160.0, 55.0, &[]))
            .collect();
        let report = analyze(&records).unwrap();

        let counts: Vec<usize> = report
            .demographics
            .age_groups
            .iter()
            .map(|g| g.count)
            .collect();
        assert_eq!(counts, vec![1, 2, 1, 1, 1, 1]);
        assert_eq!(report.demographics.age_groups[5].label, "76+");
    }

    #[test]
    fn test_bmi_categories() {
        let records = vec![
            record(30, Gender::Male, 180.0, 55.0, &[]),  // 17.0
            record(30, Gender::Male, 180.0, 70.0, &[]),  // 21.6
            record(30, Gender::Male, 170.0, 80.0, &[]),  // 27.7
            record(30, Gender::Male, 160.0, 90.0, &[]),  // 35.2
        ];
        let report = analyze(&records).unwrap();

        for share in &report.vitals.bmi_categories {
            assert_eq!(share.count, 1, "{}", share.label);
            assert_eq!(share.percentage, 25.0);
        }
    }

    #[test]
    fn test_history_frequencies_sorted_and_truncated() {
        let records = vec![
            record(30, Gender::Male, 170.0, 70.0, &["dust", "pollen"]),
            record(31, Gender::Male, 170.0, 70.0, &["pollen", "milk"]),
            record(32, Gender::Male, 170.0, 70.0, &["pollen", "dust", "eggs"]),
        ];

        let report = analyze_with(&records, &AnalyzeOptions {
            top_k: Some(2),
            ..Default::default()
        }).unwrap();
        let allergies = &report.history.allergies;
        assert_eq!(allergies.total_mentions, 7);
        assert_eq!(allergies.distinct_items, 4);
        assert_eq!(
            allergies.top,
            vec![
                ItemFrequency {
                    item: "pollen".to_string(),
                    count: 3
                },
                ItemFrequency {
                    item: "dust".to_string(),
                    count: 2
                },
            ]
        );

        // Ties are broken alphabetically when nothing is truncated
        let report = analyze_with(&records, &AnalyzeOptions {
            top_k: None,
            ..Default::default()
        }).unwrap();
        let items: Vec<&str> = report
            .history
            .allergies
            .top
            .iter()
            .map(|f| f.item.as_str())
            .collect();
        assert_eq!(items, vec!["pollen", "dust", "eggs", "milk"]);
        assert!(report.history.surgeries.top.is_empty());
    }

    #[test]
    fn test_default_top_k() {
        assert_eq!(AnalyzeOptions::default().top_k, Some(DEFAULT_TOP_K));
    }

    #[test]
    fn test_none_markers_excluded() {
        let records = vec![
            record(30, Gender::Male, 170.0, 70.0, &["No known allergies"]),
            record(31, Gender::Female, 160.0, 55.0, &["無已知過敏"]),
            record(32, Gender::Male, 170.0, 70.0, &["pollen"]),
            record(33, Gender::Female, 160.0, 55.0, &[]),
        ];

        let report = analyze(&records).unwrap();
        let allergies = &report.history.allergies;
        assert_eq!(allergies.none_count, 2);
        assert_eq!(allergies.total_mentions, 1);
        assert_eq!(allergies.distinct_items, 1);
        assert_eq!(
            allergies.top,
            vec![ItemFrequency {
                item: "pollen".to_string(),
                count: 1
            }]
        );

        // With no markers the sentinels are ordinary items
        let options = AnalyzeOptions {
            none_markers: BTreeSet::new(),
            ..Default::default()
        };
        let report = analyze_with(&records, &options).unwrap();
        assert_eq!(report.history.allergies.none_count, 0);
        assert_eq!(report.history.allergies.distinct_items, 3);
    }

    #[test]
    fn test_builtin_none_markers() {
        let markers = builtin_none_markers();
        assert_eq!(markers.len(), 10);
        assert!(markers.contains("無手術史"));
        assert!(markers.contains("No medications"));
    }
}
