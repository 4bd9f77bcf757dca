//! Risk prediction from a patient record

use super::artifact::ModelArtifacts;
use super::features::{Features, FEATURE_NAMES};
use super::traits::{FeatureScaler, RiskModel};
use crate::state::PatientRecord;
use anyhow::Result;
use chrono::{DateTime, Local};
use tracing::{debug, trace};

/// Model outputs at or above this value are labelled high risk
pub const RISK_THRESHOLD: f64 = 0.0131;

/// Binary risk label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskLevel {
    High,
    Low,
}

impl RiskLevel {
    pub fn from_score(score: f64) -> Self {
        if score >= RISK_THRESHOLD {
            Self::High
        } else {
            Self::Low
        }
    }

    /// Emphasised part of the result sentence
    pub fn label(&self) -> &'static str {
        match self {
            Self::High => "high risk",
            Self::Low => "low risk",
        }
    }

    /// Full result sentence shown to the user
    pub fn message(&self) -> String {
        format!("The patient is at {} of cardiac arrest.", self.label())
    }
}

/// Outcome of one Calculate action
#[derive(Debug, Clone, PartialEq)]
pub struct RiskAssessment {
    pub level: RiskLevel,
    /// Raw model output
    pub score: f64,
    pub assessed_at: DateTime<Local>,
}

/// Scaler and model loaded for the lifetime of the process
pub struct Predictor {
    scaler: Box<dyn FeatureScaler>,
    model: Box<dyn RiskModel>,
}

impl Predictor {
    pub fn new(scaler: impl FeatureScaler + 'static, model: impl RiskModel + 'static) -> Self {
        Self {
            scaler: Box::new(scaler),
            model: Box::new(model),
        }
    }

    pub fn from_artifacts(artifacts: ModelArtifacts) -> Self {
        Self::new(artifacts.scaler, artifacts.model)
    }

    /// Encode, scale and score a record
    pub fn score(&self, record: &PatientRecord) -> Result<f64> {
        let features = Features::from(record);
        trace!(
            features = ?FEATURE_NAMES.iter().zip(features.as_slice()).collect::<Vec<_>>(),
            "Encoded features"
        );
        let scaled = self.scaler.transform(&features);
        self.model.predict(&scaled)
    }

    pub fn assess(&self, record: &PatientRecord) -> Result<RiskAssessment> {
        let score = self.score(record)?;
        let level = RiskLevel::from_score(score);
        debug!(score, level = level.label(), "Risk assessed");
        Ok(RiskAssessment {
            level,
            score,
            assessed_at: Local::now(),
        })
    }
}
