//! Patient form state

use super::field::FormField;
use crate::state::{
    ChestPainType, EcgResult, ExerciseAngina, FastingBloodSugar, Gender, PatientRecord, StSlope,
};

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField>;
    fn get_field(&self, index: usize) -> Option<&FormField>;
}

/// Buttons below the inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormButton {
    #[default]
    Calculate,
    Reset,
}

impl FormButton {
    pub const ALL: [FormButton; 2] = [FormButton::Calculate, FormButton::Reset];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Calculate => "Calculate",
            Self::Reset => "Reset All",
        }
    }

    pub fn toggle(&mut self) {
        *self = match self {
            Self::Calculate => Self::Reset,
            Self::Reset => Self::Calculate,
        };
    }
}

/// Number of input fields; the buttons row follows them
pub const INPUT_FIELD_COUNT: usize = 12;

/// Index of the buttons row in the focus order
pub const BUTTONS_ROW: usize = INPUT_FIELD_COUNT;

/// Inputs shown in the left column, in focus order; the rest go right
pub const LEFT_COLUMN_FIELDS: usize = 7;

// Patient Form
#[derive(Debug, Clone, PartialEq)]
pub struct PatientForm {
    pub name: FormField,
    pub age: FormField,
    pub gender: FormField,
    pub chest_pain_type: FormField,
    pub resting_blood_pressure: FormField,
    pub serum_cholesterol: FormField,
    pub fasting_blood_sugar: FormField,
    pub ecg_result: FormField,
    pub max_heart_rate: FormField,
    pub exercise_angina: FormField,
    pub oldpeak: FormField,
    pub st_slope: FormField,
    pub active_field_index: usize,
    pub selected_button: FormButton,
}

impl PatientForm {
    pub fn new() -> Self {
        let defaults = PatientRecord::default();
        Self {
            name: FormField::text("name", "Patient Name"),
            age: FormField::integer("age", "Age", 0, 100, defaults.age),
            gender: FormField::choice("gender", "Gender", defaults.gender),
            chest_pain_type: FormField::choice(
                "chest_pain_type",
                "Chest Pain Type",
                defaults.chest_pain_type,
            ),
            resting_blood_pressure: FormField::integer(
                "resting_blood_pressure",
                "Resting BP (mm Hg)",
                0,
                200,
                defaults.resting_blood_pressure,
            ),
            serum_cholesterol: FormField::integer(
                "serum_cholesterol",
                "Cholesterol (mg/dl)",
                0,
                529,
                defaults.serum_cholesterol,
            ),
            fasting_blood_sugar: FormField::choice(
                "fasting_blood_sugar",
                "Fasting Blood Sugar",
                defaults.fasting_blood_sugar,
            ),
            ecg_result: FormField::choice("ecg_result", "Resting ECG", defaults.ecg_result),
            max_heart_rate: FormField::integer(
                "max_heart_rate",
                "Max Heart Rate Achieved",
                0,
                220,
                defaults.max_heart_rate,
            ),
            exercise_angina: FormField::choice(
                "exercise_angina",
                "Exercise Angina",
                defaults.exercise_angina,
            ),
            oldpeak: FormField::decimal(
                "oldpeak",
                "Oldpeak (ST Depression)",
                (0.0, 6.0),
                0.1,
                2,
                defaults.oldpeak,
            ),
            st_slope: FormField::choice("st_slope", "ST Slope", defaults.st_slope),
            active_field_index: 0,
            selected_button: FormButton::default(),
        }
    }

    /// Returns true if the buttons row is currently active
    pub fn is_buttons_row_active(&self) -> bool {
        self.active_field_index == BUTTONS_ROW
    }

    /// Apply any typed input in the focused field
    pub fn commit_active(&mut self) {
        if let Some(field) = self.get_active_field_mut() {
            field.commit();
        }
    }

    /// Typed snapshot of the committed values
    pub fn record(&self) -> PatientRecord {
        PatientRecord {
            name: self.name.as_text().trim().to_string(),
            age: self.age.as_number() as u32,
            gender: self.gender.as_choice::<Gender>(),
            chest_pain_type: self.chest_pain_type.as_choice::<ChestPainType>(),
            resting_blood_pressure: self.resting_blood_pressure.as_number() as u32,
            serum_cholesterol: self.serum_cholesterol.as_number() as u32,
            fasting_blood_sugar: self.fasting_blood_sugar.as_choice::<FastingBloodSugar>(),
            ecg_result: self.ecg_result.as_choice::<EcgResult>(),
            max_heart_rate: self.max_heart_rate.as_number() as u32,
            exercise_angina: self.exercise_angina.as_choice::<ExerciseAngina>(),
            oldpeak: self.oldpeak.as_number(),
            st_slope: self.st_slope.as_choice::<StSlope>(),
        }
    }

    fn field_mut(&mut self, index: usize) -> Option<&mut FormField> {
        match index {
            0 => Some(&mut self.name),
            1 => Some(&mut self.age),
            2 => Some(&mut self.gender),
            3 => Some(&mut self.chest_pain_type),
            4 => Some(&mut self.resting_blood_pressure),
            5 => Some(&mut self.serum_cholesterol),
            6 => Some(&mut self.fasting_blood_sugar),
            7 => Some(&mut self.ecg_result),
            8 => Some(&mut self.max_heart_rate),
            9 => Some(&mut self.exercise_angina),
            10 => Some(&mut self.oldpeak),
            11 => Some(&mut self.st_slope),
            // Index 12 is buttons row, no FormField for it
            _ => None,
        }
    }
}

impl Default for PatientForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for PatientForm {
    fn field_count(&self) -> usize {
        INPUT_FIELD_COUNT + 1 // inputs + buttons
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        // Leaving a field applies what was typed into it
        self.commit_active();
        self.active_field_index = index.min(BUTTONS_ROW);
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField> {
        self.field_mut(self.active_field_index)
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        match index {
            0 => Some(&self.name),
            1 => Some(&self.age),
            2 => Some(&self.gender),
            3 => Some(&self.chest_pain_type),
            4 => Some(&self.resting_blood_pressure),
            5 => Some(&self.serum_cholesterol),
            6 => Some(&self.fasting_blood_sugar),
            7 => Some(&self.ecg_result),
            8 => Some(&self.max_heart_rate),
            9 => Some(&self.exercise_angina),
            10 => Some(&self.oldpeak),
            11 => Some(&self.st_slope),
            _ => None,
        }
    }
}
