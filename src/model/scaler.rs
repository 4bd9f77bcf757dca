//! Pre-fitted feature scalers

use super::artifact::ShapeError;
use super::features::{Features, FEATURE_COUNT};
use super::traits::FeatureScaler;
use serde::{Deserialize, Serialize};

/// Feature scaler parameters, fitted offline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Scaler {
    /// `(x - mean) / scale`
    Standard { mean: Vec<f64>, scale: Vec<f64> },
    /// `x * scale + min`
    MinMax { min: Vec<f64>, scale: Vec<f64> },
}

impl Scaler {
    /// Check the scaler against the model input width
    pub fn validate(&self) -> Result<(), ShapeError> {
        let (offsets, scale) = match self {
            Self::Standard { mean, scale } => (mean, scale),
            Self::MinMax { min, scale } => (min, scale),
        };

        for found in [offsets.len(), scale.len()] {
            if found != FEATURE_COUNT {
                return Err(ShapeError::ScalerWidth {
                    expected: FEATURE_COUNT,
                    found,
                });
            }
        }

        if offsets.iter().chain(scale).any(|v| !v.is_finite()) {
            return Err(ShapeError::NonFinite("scaler"));
        }

        Ok(())
    }
}

impl FeatureScaler for Scaler {
    fn transform(&self, features: &Features) -> Features {
        let mut scaled = features.0;
        match self {
            Self::Standard { mean, scale } => {
                for (idx, value) in scaled.iter_mut().enumerate() {
                    // Constant features were fitted with a zero scale
                    let s = if scale[idx] == 0.0 { 1.0 } else { scale[idx] };
                    *value = (*value - mean[idx]) / s;
                }
            }
            Self::MinMax { min, scale } => {
                for (idx, value) in scaled.iter_mut().enumerate() {
                    *value = *value * scale[idx] + min[idx];
                }
            }
        }
        Features(scaled)
    }
}
