//! Patient record and its categorical values

/// A closed set of labelled options with fixed integer codes
pub trait Categorical: Copy + PartialEq + Sized + 'static {
    /// Options in display order
    const ALL: &'static [Self];

    fn label(self) -> &'static str;

    /// Integer code fed to the model
    fn code(self) -> u8;

    fn labels() -> Vec<&'static str> {
        Self::ALL.iter().map(|v| v.label()).collect()
    }

    /// Option at a display index, clamped to the last option
    fn from_index(index: usize) -> Self {
        Self::ALL[index.min(Self::ALL.len() - 1)]
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|v| *v == self).unwrap_or(0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Gender {
    #[default]
    Male,
    Female,
}

impl Categorical for Gender {
    const ALL: &'static [Self] = &[Self::Male, Self::Female];

    fn label(self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
        }
    }

    fn code(self) -> u8 {
        match self {
            Self::Male => 1,
            Self::Female => 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChestPainType {
    #[default]
    TypicalAngina,
    AtypicalAngina,
    NonAnginalPain,
    Asymptomatic,
}

impl Categorical for ChestPainType {
    const ALL: &'static [Self] = &[
        Self::TypicalAngina,
        Self::AtypicalAngina,
        Self::NonAnginalPain,
        Self::Asymptomatic,
    ];

    fn label(self) -> &'static str {
        match self {
            Self::TypicalAngina => "Typical Angina",
            Self::AtypicalAngina => "Atypical Angina",
            Self::NonAnginalPain => "Non-anginal Pain",
            Self::Asymptomatic => "Asymptomatic",
        }
    }

    fn code(self) -> u8 {
        match self {
            Self::TypicalAngina => 1,
            Self::AtypicalAngina => 2,
            Self::NonAnginalPain => 3,
            Self::Asymptomatic => 4,
        }
    }
}

/// Fasting blood sugar relative to 120 mg/dl
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FastingBloodSugar {
    #[default]
    Below120,
    Above120,
}

impl Categorical for FastingBloodSugar {
    const ALL: &'static [Self] = &[Self::Below120, Self::Above120];

    fn label(self) -> &'static str {
        match self {
            Self::Below120 => "Below 120",
            Self::Above120 => "Above 120",
        }
    }

    fn code(self) -> u8 {
        match self {
            Self::Below120 => 0,
            Self::Above120 => 1,
        }
    }
}

/// Resting electrocardiogram result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EcgResult {
    #[default]
    Normal,
    StTWaveAbnormality,
    LeftVentricularHypertrophy,
}

impl Categorical for EcgResult {
    const ALL: &'static [Self] = &[
        Self::Normal,
        Self::StTWaveAbnormality,
        Self::LeftVentricularHypertrophy,
    ];

    fn label(self) -> &'static str {
        match self {
            Self::Normal => "Normal",
            Self::StTWaveAbnormality => "ST-T wave abnormality",
            Self::LeftVentricularHypertrophy => "Left ventricular hypertrophy",
        }
    }

    fn code(self) -> u8 {
        match self {
            Self::Normal => 0,
            Self::StTWaveAbnormality => 1,
            Self::LeftVentricularHypertrophy => 2,
        }
    }
}

/// Exercise-induced angina
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExerciseAngina {
    #[default]
    No,
    Yes,
}

impl Categorical for ExerciseAngina {
    const ALL: &'static [Self] = &[Self::No, Self::Yes];

    fn label(self) -> &'static str {
        match self {
            Self::No => "No",
            Self::Yes => "Yes",
        }
    }

    fn code(self) -> u8 {
        match self {
            Self::No => 0,
            Self::Yes => 1,
        }
    }
}

/// Slope of the peak exercise ST segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StSlope {
    #[default]
    Upsloping,
    Flat,
    Downsloping,
}

impl Categorical for StSlope {
    const ALL: &'static [Self] = &[Self::Upsloping, Self::Flat, Self::Downsloping];

    fn label(self) -> &'static str {
        match self {
            Self::Upsloping => "Upsloping",
            Self::Flat => "Flat",
            Self::Downsloping => "Downsloping",
        }
    }

    fn code(self) -> u8 {
        match self {
            Self::Upsloping => 1,
            Self::Flat => 2,
            Self::Downsloping => 3,
        }
    }
}

/// Typed snapshot of the patient form
#[derive(Debug, Clone, PartialEq)]
pub struct PatientRecord {
    pub name: String,
    pub age: u32,
    pub gender: Gender,
    pub chest_pain_type: ChestPainType,
    /// mm Hg
    pub resting_blood_pressure: u32,
    /// mg/dl
    pub serum_cholesterol: u32,
    pub fasting_blood_sugar: FastingBloodSugar,
    pub ecg_result: EcgResult,
    pub max_heart_rate: u32,
    pub exercise_angina: ExerciseAngina,
    /// ST depression
    pub oldpeak: f64,
    pub st_slope: StSlope,
}

impl Default for PatientRecord {
    fn default() -> Self {
        Self {
            name: String::new(),
            age: 28,
            gender: Gender::default(),
            chest_pain_type: ChestPainType::default(),
            resting_blood_pressure: 92,
            serum_cholesterol: 85,
            fasting_blood_sugar: FastingBloodSugar::default(),
            ecg_result: EcgResult::default(),
            max_heart_rate: 67,
            exercise_angina: ExerciseAngina::default(),
            oldpeak: 0.0,
            st_slope: StSlope::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn codes<T: Categorical>() -> Vec<(&'static str, u8)> {
        T::ALL.iter().map(|v| (v.label(), v.code())).collect()
    }

    #[test]
    fn test_gender_codes() {
        assert_eq!(codes::<Gender>(), vec![("Male", 1), ("Female", 0)]);
    }

    #[test]
    fn test_chest_pain_codes() {
        assert_eq!(
            codes::<ChestPainType>(),
            vec![
                ("Typical Angina", 1),
                ("Atypical Angina", 2),
                ("Non-anginal Pain", 3),
                ("Asymptomatic", 4),
            ]
        );
    }

    #[test]
    fn test_fasting_blood_sugar_codes() {
        assert_eq!(
            codes::<FastingBloodSugar>(),
            vec![("Below 120", 0), ("Above 120", 1)]
        );
    }

    #[test]
    fn test_ecg_codes() {
        assert_eq!(
            codes::<EcgResult>(),
            vec![
                ("Normal", 0),
                ("ST-T wave abnormality", 1),
                ("Left ventricular hypertrophy", 2),
            ]
        );
    }

    #[test]
    fn test_exercise_angina_codes() {
        assert_eq!(codes::<ExerciseAngina>(), vec![("No", 0), ("Yes", 1)]);
    }

    #[test]
    fn test_st_slope_codes() {
        assert_eq!(
            codes::<StSlope>(),
            vec![("Upsloping", 1), ("Flat", 2), ("Downsloping", 3)]
        );
        assert_eq!(StSlope::Flat.code(), 2);
    }

    #[test]
    fn test_label_round_trip_is_exhaustive() {
        fn check<T: Categorical + std::fmt::Debug>() {
            for value in T::ALL {
                assert!(T::labels().contains(&value.label()));
                assert_eq!(T::from_index(value.index()), *value);
            }
        }
        check::<Gender>();
        check::<ChestPainType>();
        check::<FastingBloodSugar>();
        check::<EcgResult>();
        check::<ExerciseAngina>();
        check::<StSlope>();
    }

    #[test]
    fn test_from_index_clamps() {
        assert_eq!(StSlope::from_index(99), StSlope::Downsloping);
    }

    #[test]
    fn test_defaults_are_first_options() {
        assert_eq!(Gender::default().index(), 0);
        assert_eq!(ChestPainType::default().index(), 0);
        assert_eq!(FastingBloodSugar::default().index(), 0);
        assert_eq!(EcgResult::default().index(), 0);
        assert_eq!(ExerciseAngina::default().index(), 0);
        assert_eq!(StSlope::default().index(), 0);
    }
}
