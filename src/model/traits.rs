//! Trait seams for the scaler and the scoring model, enabling mocking in tests

use super::features::Features;
use anyhow::Result;

/// A pre-fitted feature normalization transform
#[cfg_attr(test, mockall::automock)]
pub trait FeatureScaler: Send + Sync {
    /// Scale a raw feature vector
    fn transform(&self, features: &Features) -> Features;
}

/// An opaque scoring function over scaled features
#[cfg_attr(test, mockall::automock)]
pub trait RiskModel: Send + Sync {
    /// Score a scaled feature vector, returning the first output of the model
    fn predict(&self, features: &Features) -> Result<f64>;
}
