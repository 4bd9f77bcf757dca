//! Risk model layer
//!
//! Loads the trained ONNX model and its fitted scaler, and turns a patient
//! record into a binary cardiac arrest risk label.

mod artifact;
mod features;
mod onnx;
mod predictor;
mod scaler;
mod traits;

pub use artifact::{ArtifactError, ModelArtifacts, DEFAULT_MODEL_PATH, DEFAULT_SCALER_PATH};
pub use predictor::{Predictor, RiskAssessment, RiskLevel};

#[cfg(test)]
pub use traits::{MockFeatureScaler, MockRiskModel};
