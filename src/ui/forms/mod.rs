//! Form rendering module
//!
//! - `field_renderer`: Field rendering utilities
//! - `patient_form`: Patient inputs, buttons and result region

mod field_renderer;
mod patient_form;

pub use patient_form::{draw_patient_form, draw_result};
