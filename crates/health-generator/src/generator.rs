//! Record generator producing internally-consistent synthetic health records.

use crate::generators::name::generate_name;
use crate::generators::numeric::{age_factor, sample_float, sample_float_1dp, sample_int};
use crate::generators::pattern::fill_pattern;
use crate::generators::sample::{pick, sample_history};
use crate::pools::DataPools;
use chrono::{Local, NaiveDateTime, Timelike};
use health_core::{
    calculate_bmi, round1, BloodType, Gender, GeneratorConfig, HealthMetrics, HealthRecord,
    IntRange, MedicalHistory, PersonalInfo, ValidationError,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Generator that produces deterministic synthetic health records.
///
/// The generator owns a seeded random number generator, so the same seed,
/// config, pools and `created_at` always yield the same sequence of records.
pub struct RecordGenerator {
    /// Value ranges and history settings
    config: GeneratorConfig,
    /// Names, addresses, history items and format templates
    pools: DataPools,
    /// Seeded random number generator for reproducibility
    rng: StdRng,
    /// Timestamp stamped on every record as `created_date`
    created_at: NaiveDateTime,
    /// Number of records produced so far
    generated: u64,
}

impl RecordGenerator {
    /// Create a generator with explicit pools.
    ///
    /// Fails if any configured range is invalid or a required pool is empty.
    pub fn new(
        config: GeneratorConfig,
        pools: DataPools,
        seed: u64,
    ) -> Result<Self, ValidationError> {
        config.validate()?;
        pools.validate()?;

        let now = Local::now().naive_local();
        Ok(Self {
            config,
            pools,
            rng: StdRng::seed_from_u64(seed),
            created_at: now.with_nanosecond(0).unwrap_or(now),
            generated: 0,
        })
    }

    /// Create a generator using the built-in pools for the config's locale.
    pub fn from_config(config: GeneratorConfig, seed: u64) -> Result<Self, ValidationError> {
        let pools = DataPools::for_locale(config.locale);
        Self::new(config, pools, seed)
    }

    /// Pin the `created_date` stamped on every record.
    pub fn with_created_at(mut self, created_at: NaiveDateTime) -> Self {
        self.created_at = created_at;
        self
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn pools(&self) -> &DataPools {
        &self.pools
    }

    /// Number of records generated so far.
    pub fn generated_count(&self) -> u64 {
        self.generated
    }

    /// Generate one record.
    pub fn generate_one(&mut self) -> HealthRecord {
        let personal_info = self.generate_personal_info();
        let health_metrics = self.generate_health_metrics(&personal_info);
        let medical_history = self.generate_medical_history();

        self.generated += 1;

        HealthRecord {
            personal_info,
            health_metrics,
            medical_history,
        }
    }

    /// Generate `count` records.
    pub fn generate_batch(&mut self, count: usize) -> Result<Vec<HealthRecord>, ValidationError> {
        Ok(self.records(count)?.collect())
    }

    /// Lazily generate `count` records.
    pub fn records(&mut self, count: usize) -> Result<RecordIterator<'_>, ValidationError> {
        if count == 0 {
            return Err(ValidationError::InvalidCount(count));
        }

        Ok(RecordIterator {
            generator: self,
            remaining: count,
        })
    }

    fn generate_personal_info(&mut self) -> PersonalInfo {
        let Self {
            config, pools, rng, ..
        } = self;

        let gender = Gender::ALL[rng.random_range(0..Gender::ALL.len())];
        let age = sample_int(rng, config.age_range);

        let (height_range, weight_range) = match gender {
            Gender::Male => (config.male_height_range, config.male_weight_range),
            Gender::Female => (config.female_height_range, config.female_weight_range),
        };
        let height = sample_float_1dp(rng, height_range);
        let weight = sample_float_1dp(rng, weight_range);

        let blood_type = BloodType::ALL[rng.random_range(0..BloodType::ALL.len())];
        let name = generate_name(rng, pools, gender);
        let phone = fill_pattern(&pools.phone_pattern, rng, gender);
        let domain = pick(rng, &pools.email_domains);
        let email = format!(
            "{}@{domain}",
            fill_pattern(&pools.email_user_pattern, rng, gender)
        );
        let address = pick(rng, &pools.addresses);
        let emergency_contact = fill_pattern(&pools.phone_pattern, rng, gender);
        let id_number = fill_pattern(&pools.id_number_pattern, rng, gender);

        PersonalInfo {
            name,
            age,
            gender,
            height,
            weight,
            blood_type,
            phone,
            email,
            address,
            emergency_contact,
            id_number,
        }
    }

    fn generate_health_metrics(&mut self, person: &PersonalInfo) -> HealthMetrics {
        let created_date = self.created_at;
        let Self { config, rng, .. } = self;

        // Derived from the stored height and weight, never sampled
        let bmi = calculate_bmi(person.height, person.weight);

        let systolic = sample_int(rng, config.blood_pressure_systolic_range);
        // Config validation guarantees diastolic.min < systolic.min <= systolic
        let diastolic_range = IntRange::new(
            config.blood_pressure_diastolic_range.min,
            config
                .blood_pressure_diastolic_range
                .max
                .min(systolic - 1),
        );
        let diastolic = sample_int(rng, diastolic_range);

        let heart_rate = sample_int(rng, config.heart_rate_range);
        let body_temperature = sample_float_1dp(rng, config.body_temperature_range);

        let factor = age_factor(person.age);
        let blood_sugar = round1(sample_float(rng, config.blood_sugar_base_range) * factor);
        let cholesterol = round1(sample_float(rng, config.cholesterol_base_range) * factor);

        HealthMetrics {
            bmi,
            blood_pressure_systolic: systolic,
            blood_pressure_diastolic: diastolic,
            heart_rate,
            body_temperature,
            blood_sugar,
            cholesterol,
            created_date,
        }
    }

    fn generate_medical_history(&mut self) -> MedicalHistory {
        let Self {
            config, pools, rng, ..
        } = self;
        let history = &config.history;
        let p = history.none_probability;

        MedicalHistory {
            allergies: sample_history(rng, &pools.allergies, history.allergies_max, p),
            chronic_diseases: sample_history(
                rng,
                &pools.chronic_diseases,
                history.chronic_diseases_max,
                p,
            ),
            medications: sample_history(rng, &pools.medications, history.medications_max, p),
            surgeries: sample_history(rng, &pools.surgeries, history.surgeries_max, p),
            family_history: sample_history(
                rng,
                &pools.family_history,
                history.family_history_max,
                p,
            ),
        }
    }
}

/// Iterator that lazily generates records.
pub struct RecordIterator<'a> {
    generator: &'a mut RecordGenerator,
    remaining: usize,
}

impl Iterator for RecordIterator<'_> {
    type Item = HealthRecord;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        self.remaining -= 1;
        Some(self.generator.generate_one())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for RecordIterator<'_> {}
