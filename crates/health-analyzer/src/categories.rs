//! Fixed classification buckets used in the report.

/// Age buckets. Every age falls into exactly one bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgeGroup {
    Under18,
    From18To30,
    From31To45,
    From46To60,
    From61To75,
    Over75,
}

impl AgeGroup {
    pub const ALL: [AgeGroup; 6] = [
        AgeGroup::Under18,
        AgeGroup::From18To30,
        AgeGroup::From31To45,
        AgeGroup::From46To60,
        AgeGroup::From61To75,
        AgeGroup::Over75,
    ];

    pub fn from_age(age: u32) -> Self {
        match age {
            0..=17 => AgeGroup::Under18,
            18..=30 => AgeGroup::From18To30,
            31..=45 => AgeGroup::From31To45,
            46..=60 => AgeGroup::From46To60,
            61..=75 => AgeGroup::From61To75,
            _ => AgeGroup::Over75,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AgeGroup::Under18 => "Under 18",
            AgeGroup::From18To30 => "18-30",
            AgeGroup::From31To45 => "31-45",
            AgeGroup::From46To60 => "46-60",
            AgeGroup::From61To75 => "61-75",
            AgeGroup::Over75 => "76+",
        }
    }
}

/// Clinical BMI classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    pub const ALL: [BmiCategory; 4] = [
        BmiCategory::Underweight,
        BmiCategory::Normal,
        BmiCategory::Overweight,
        BmiCategory::Obese,
    ];

    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < 18.5 {
            BmiCategory::Underweight
        } else if bmi < 25.0 {
            BmiCategory::Normal
        } else if bmi < 30.0 {
            BmiCategory::Overweight
        } else {
            BmiCategory::Obese
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight (<18.5)",
            BmiCategory::Normal => "Normal (18.5-24.9)",
            BmiCategory::Overweight => "Overweight (25-29.9)",
            BmiCategory::Obese => "Obese (>=30)",
        }
    }
}

/// Blood pressure classes, checked in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BloodPressureCategory {
    Normal,
    Elevated,
    Stage1,
    Stage2,
}

impl BloodPressureCategory {
    pub const ALL: [BloodPressureCategory; 4] = [
        BloodPressureCategory::Normal,
        BloodPressureCategory::Elevated,
        BloodPressureCategory::Stage1,
        BloodPressureCategory::Stage2,
    ];

    pub fn from_reading(systolic: u32, diastolic: u32) -> Self {
        if systolic < 120 && diastolic < 80 {
            BloodPressureCategory::Normal
        } else if (120..130).contains(&systolic) && diastolic < 80 {
            BloodPressureCategory::Elevated
        } else if (130..140).contains(&systolic) || (80..90).contains(&diastolic) {
            BloodPressureCategory::Stage1
        } else {
            BloodPressureCategory::Stage2
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BloodPressureCategory::Normal => "Normal (<120/80)",
            BloodPressureCategory::Elevated => "Elevated (120-129/<80)",
            BloodPressureCategory::Stage1 => "Hypertension stage 1 (130-139/80-89)",
            BloodPressureCategory::Stage2 => "Hypertension stage 2 (>=140/90)",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_age_group_boundaries() {
        assert_eq!(AgeGroup::from_age(17), AgeGroup::Under18);
        assert_eq!(AgeGroup::from_age(18), AgeGroup::From18To30);
        assert_eq!(AgeGroup::from_age(30), AgeGroup::From18To30);
        assert_eq!(AgeGroup::from_age(31), AgeGroup::From31To45);
        assert_eq!(AgeGroup::from_age(60), AgeGroup::From46To60);
        assert_eq!(AgeGroup::from_age(75), AgeGroup::From61To75);
        assert_eq!(AgeGroup::from_age(76), AgeGroup::Over75);
    }

    #[test]
    fn test_bmi_boundaries() {
        assert_eq!(BmiCategory::from_bmi(18.4), BmiCategory::Underweight);
        assert_eq!(BmiCategory::from_bmi(18.5), BmiCategory::Normal);
        assert_eq!(BmiCategory::from_bmi(24.9), BmiCategory::Normal);
        assert_eq!(BmiCategory::from_bmi(25.0), BmiCategory::Overweight);
        assert_eq!(BmiCategory::from_bmi(29.9), BmiCategory::Overweight);
        assert_eq!(BmiCategory::from_bmi(30.0), BmiCategory::Obese);
    }

    #[test]
    fn test_blood_pressure_categories() {
        assert_eq!(
            BloodPressureCategory::from_reading(115, 75),
            BloodPressureCategory::Normal
        );
        assert_eq!(
            BloodPressureCategory::from_reading(125, 75),
            BloodPressureCategory::Elevated
        );
        assert_eq!(
            BloodPressureCategory::from_reading(135, 75),
            BloodPressureCategory::Stage1
        );
        assert_eq!(
            BloodPressureCategory::from_reading(115, 85),
            BloodPressureCategory::Stage1
        );
        assert_eq!(
            BloodPressureCategory::from_reading(145, 85),
            BloodPressureCategory::Stage1
        );
        assert_eq!(
            BloodPressureCategory::from_reading(145, 95),
            BloodPressureCategory::Stage2
        );
    }
}
