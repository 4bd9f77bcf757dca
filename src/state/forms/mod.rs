//! Form domain layer
//!
//! Type-safe field values and the patient form that owns them.

mod field;
mod form_state;

pub use field::{FieldValue, FormField};
pub use form_state::{
    Form, FormButton, PatientForm, BUTTONS_ROW, INPUT_FIELD_COUNT, LEFT_COLUMN_FIELDS,
};
