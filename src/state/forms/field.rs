//! Form field value objects

use crate::state::Categorical;

/// Bounded numeric input, like a spin box
#[derive(Debug, Clone, PartialEq)]
pub struct NumberInput {
    value: f64,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    /// Digits kept after the decimal point
    pub decimals: u8,
    /// Uncommitted typed text
    buffer: Option<String>,
}

impl NumberInput {
    pub fn new(min: f64, max: f64, step: f64, decimals: u8, value: f64) -> Self {
        let mut input = Self {
            value: min,
            min,
            max,
            step,
            decimals,
            buffer: None,
        };
        input.set(value);
        input
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// Set the value, clamped to the range and rounded to `decimals`
    pub fn set(&mut self, value: f64) {
        let factor = 10f64.powi(i32::from(self.decimals));
        let rounded = (value * factor).round() / factor;
        self.value = rounded.clamp(self.min, self.max);
    }

    /// Typing replaces the value; it takes effect on commit
    pub fn push_char(&mut self, c: char) {
        let accepts_point = self.decimals > 0;
        let buffer = self.buffer.get_or_insert_with(String::new);
        if c.is_ascii_digit() || (c == '.' && accepts_point && !buffer.contains('.')) {
            buffer.push(c);
        }
    }

    pub fn pop_char(&mut self) {
        let current = self.formatted();
        let buffer = self.buffer.get_or_insert(current);
        buffer.pop();
    }

    /// Apply typed text; unparsable or empty text keeps the previous value
    pub fn commit(&mut self) {
        if let Some(text) = self.buffer.take() {
            if let Ok(parsed) = text.parse::<f64>() {
                self.set(parsed);
            }
        }
    }

    pub fn increment(&mut self) {
        self.commit();
        self.set(self.value + self.step);
    }

    pub fn decrement(&mut self) {
        self.commit();
        self.set(self.value - self.step);
    }

    fn formatted(&self) -> String {
        format!("{:.*}", usize::from(self.decimals), self.value)
    }

    pub fn display(&self) -> String {
        self.buffer.clone().unwrap_or_else(|| self.formatted())
    }
}

/// Single selection among fixed options
#[derive(Debug, Clone, PartialEq)]
pub struct ChoiceInput {
    pub options: Vec<&'static str>,
    pub selected: usize,
}

impl ChoiceInput {
    pub fn of<T: Categorical>(initial: T) -> Self {
        Self {
            options: T::labels(),
            selected: initial.index(),
        }
    }

    pub fn next(&mut self) {
        self.selected = (self.selected + 1) % self.options.len();
    }

    pub fn prev(&mut self) {
        if self.selected == 0 {
            self.selected = self.options.len() - 1;
        } else {
            self.selected -= 1;
        }
    }

    pub fn label(&self) -> &'static str {
        self.options.get(self.selected).copied().unwrap_or_default()
    }
}

/// Type-safe field values
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Number(NumberInput),
    Choice(ChoiceInput),
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

/// Represents a single form field with its configuration and value
#[derive(Debug, Clone, PartialEq)]
pub struct FormField {
    #[allow(dead_code)]
    pub name: String,
    pub label: String,
    pub value: FieldValue,
}

impl FormField {
    /// Create a new text field
    pub fn text(name: &str, label: &str) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            value: FieldValue::Text(String::new()),
        }
    }

    /// Create a whole-number field stepping by 1
    pub fn integer(name: &str, label: &str, min: u32, max: u32, value: u32) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            value: FieldValue::Number(NumberInput::new(
                f64::from(min),
                f64::from(max),
                1.0,
                0,
                f64::from(value),
            )),
        }
    }

    /// Create a decimal field
    pub fn decimal(
        name: &str,
        label: &str,
        (min, max): (f64, f64),
        step: f64,
        decimals: u8,
        value: f64,
    ) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            value: FieldValue::Number(NumberInput::new(min, max, step, decimals, value)),
        }
    }

    /// Create a choice field over a categorical type
    pub fn choice<T: Categorical>(name: &str, label: &str, initial: T) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            value: FieldValue::Choice(ChoiceInput::of(initial)),
        }
    }

    /// Get the text value (empty for non-text fields)
    pub fn as_text(&self) -> &str {
        match &self.value {
            FieldValue::Text(s) => s,
            _ => "",
        }
    }

    /// Get the committed numeric value (0 for non-numeric fields)
    pub fn as_number(&self) -> f64 {
        match &self.value {
            FieldValue::Number(n) => n.value(),
            _ => 0.0,
        }
    }

    /// Get the selected categorical value (first option for non-choice fields)
    pub fn as_choice<T: Categorical>(&self) -> T {
        match &self.value {
            FieldValue::Choice(c) => T::from_index(c.selected),
            _ => T::from_index(0),
        }
    }

    /// Push a character to the field value (choices ignore typing)
    pub fn push_char(&mut self, c: char) {
        match &mut self.value {
            FieldValue::Text(s) => s.push(c),
            FieldValue::Number(n) => n.push_char(c),
            FieldValue::Choice(_) => {}
        }
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        match &mut self.value {
            FieldValue::Text(s) => {
                s.pop();
            }
            FieldValue::Number(n) => n.pop_char(),
            FieldValue::Choice(_) => {}
        }
    }

    /// Step up a number or move to the next option
    pub fn increment(&mut self) {
        match &mut self.value {
            FieldValue::Number(n) => n.increment(),
            FieldValue::Choice(c) => c.next(),
            FieldValue::Text(_) => {}
        }
    }

    /// Step down a number or move to the previous option
    pub fn decrement(&mut self) {
        match &mut self.value {
            FieldValue::Number(n) => n.decrement(),
            FieldValue::Choice(c) => c.prev(),
            FieldValue::Text(_) => {}
        }
    }

    /// Apply pending typed input
    pub fn commit(&mut self) {
        if let FieldValue::Number(n) = &mut self.value {
            n.commit();
        }
    }

    pub fn is_choice(&self) -> bool {
        matches!(self.value, FieldValue::Choice(_))
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        match &self.value {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Number(n) => n.display(),
            FieldValue::Choice(c) => format!("◀ {} ▶", c.label()),
        }
    }

    /// Range hint shown next to the label
    pub fn hint(&self) -> Option<String> {
        match &self.value {
            FieldValue::Number(n) => Some(format!(
                "{:.*}-{:.*}",
                usize::from(n.decimals),
                n.min,
                usize::from(n.decimals),
                n.max
            )),
            FieldValue::Choice(c) => Some(format!("{}/{}", c.selected + 1, c.options.len())),
            FieldValue::Text(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{ChestPainType, StSlope};

    fn oldpeak() -> FormField {
        FormField::decimal("oldpeak", "Oldpeak", (0.0, 6.0), 0.1, 2, 0.0)
    }

    mod number {
        use super::*;

        #[test]
        fn test_integer_default() {
            let field = FormField::integer("age", "Age", 0, 100, 28);
            assert_eq!(field.as_number(), 28.0);
            assert_eq!(field.display_value(), "28");
        }

        #[test]
        fn test_typing_replaces_on_commit() {
            let mut field = FormField::integer("age", "Age", 0, 100, 28);
            field.push_char('6');
            field.push_char('5');
            assert_eq!(field.display_value(), "65");
            assert_eq!(field.as_number(), 28.0);
            field.commit();
            assert_eq!(field.as_number(), 65.0);
        }

        #[test]
        fn test_commit_clamps_to_max() {
            let mut field = FormField::integer("age", "Age", 0, 100, 28);
            for c in "250".chars() {
                field.push_char(c);
            }
            field.commit();
            assert_eq!(field.as_number(), 100.0);
        }

        #[test]
        fn test_non_digits_ignored() {
            let mut field = FormField::integer("age", "Age", 0, 100, 28);
            field.push_char('a');
            field.push_char('-');
            field.push_char('.');
            field.push_char('4');
            field.commit();
            assert_eq!(field.as_number(), 4.0);
        }

        #[test]
        fn test_empty_commit_keeps_value() {
            let mut field = FormField::integer("age", "Age", 0, 100, 28);
            field.pop_char();
            field.pop_char();
            assert_eq!(field.display_value(), "");
            field.commit();
            assert_eq!(field.as_number(), 28.0);
        }

        #[test]
        fn test_backspace_edits_existing_value() {
            let mut field = FormField::integer("bp", "BP", 0, 200, 92);
            field.pop_char();
            assert_eq!(field.display_value(), "9");
            field.commit();
            assert_eq!(field.as_number(), 9.0);
        }

        #[test]
        fn test_step_clamps_at_bounds() {
            let mut field = FormField::integer("age", "Age", 0, 100, 0);
            field.decrement();
            assert_eq!(field.as_number(), 0.0);

            let mut field = FormField::integer("age", "Age", 0, 100, 100);
            field.increment();
            assert_eq!(field.as_number(), 100.0);
        }

        #[test]
        fn test_decimal_steps_stay_on_grid() {
            let mut field = oldpeak();
            for _ in 0..7 {
                field.increment();
            }
            assert_eq!(field.as_number(), 0.7);
            assert_eq!(field.display_value(), "0.70");
        }

        #[test]
        fn test_decimal_typed_value_keeps_hundredths() {
            let mut field = oldpeak();
            for c in "1.25".chars() {
                field.push_char(c);
            }
            field.commit();
            assert_eq!(field.as_number(), 1.25);
            assert_eq!(field.display_value(), "1.25");
        }

        #[test]
        fn test_decimal_typed_value_rounds_past_hundredths() {
            let mut field = oldpeak();
            for c in "1.257".chars() {
                field.push_char(c);
            }
            field.commit();
            assert_eq!(field.as_number(), 1.26);
        }

        #[test]
        fn test_decimal_single_point() {
            let mut field = oldpeak();
            for c in "1..5".chars() {
                field.push_char(c);
            }
            assert_eq!(field.display_value(), "1.5");
        }

        #[test]
        fn test_step_commits_pending_input() {
            let mut field = FormField::integer("hr", "HR", 0, 220, 67);
            field.push_char('1');
            field.push_char('5');
            field.push_char('0');
            field.increment();
            assert_eq!(field.as_number(), 151.0);
        }

        #[test]
        fn test_hint() {
            assert_eq!(oldpeak().hint().as_deref(), Some("0.00-6.00"));
            let field = FormField::integer("chol", "Cholesterol", 0, 529, 85);
            assert_eq!(field.hint().as_deref(), Some("0-529"));
        }
    }

    mod choice {
        use super::*;

        #[test]
        fn test_cycle_wraps() {
            let mut field = FormField::choice("st_slope", "ST Slope", StSlope::Upsloping);
            field.decrement();
            assert_eq!(field.as_choice::<StSlope>(), StSlope::Downsloping);
            field.increment();
            assert_eq!(field.as_choice::<StSlope>(), StSlope::Upsloping);
            field.increment();
            assert_eq!(field.as_choice::<StSlope>(), StSlope::Flat);
        }

        #[test]
        fn test_typing_is_ignored() {
            let mut field =
                FormField::choice("chest_pain_type", "Chest Pain", ChestPainType::Asymptomatic);
            field.push_char('x');
            field.pop_char();
            assert_eq!(field.as_choice::<ChestPainType>(), ChestPainType::Asymptomatic);
            assert_eq!(field.display_value(), "◀ Asymptomatic ▶");
            assert_eq!(field.hint().as_deref(), Some("4/4"));
        }
    }

    mod text {
        use super::*;

        #[test]
        fn test_push_and_pop() {
            let mut field = FormField::text("name", "Patient Name");
            for c in "Ann".chars() {
                field.push_char(c);
            }
            field.pop_char();
            assert_eq!(field.as_text(), "An");
            assert_eq!(field.hint(), None);
            assert_eq!(field.as_number(), 0.0);
        }
    }
}
