//! Fixed-order model input vector

use crate::state::{Categorical, PatientRecord};

/// Number of features the model consumes
pub const FEATURE_COUNT: usize = 11;

/// Feature names in the order the model was trained on
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = [
    "age",
    "gender",
    "chest_pain_type",
    "resting_blood_pressure",
    "serum_cholesterol",
    "fasting_blood_sugar",
    "ecg_result",
    "max_heart_rate",
    "exercise_angina",
    "oldpeak",
    "st_slope",
];

/// Model input vector, raw or scaled
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Features(pub [f64; FEATURE_COUNT]);

impl Features {
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }
}

#[cfg(test)]
impl Features {
    /// Look up a feature by name
    pub fn get(&self, name: &str) -> Option<f64> {
        FEATURE_NAMES
            .iter()
            .position(|n| *n == name)
            .map(|idx| self.0[idx])
    }
}

impl From<&PatientRecord> for Features {
    fn from(record: &PatientRecord) -> Self {
        Self([
            f64::from(record.age),
            f64::from(record.gender.code()),
            f64::from(record.chest_pain_type.code()),
            f64::from(record.resting_blood_pressure),
            f64::from(record.serum_cholesterol),
            f64::from(record.fasting_blood_sugar.code()),
            f64::from(record.ecg_result.code()),
            f64::from(record.max_heart_rate),
            f64::from(record.exercise_angina.code()),
            record.oldpeak,
            f64::from(record.st_slope.code()),
        ])
    }
}
