//! Artifact loading for the trained model and its fitted scaler

use super::features::FEATURE_COUNT;
use super::onnx::OnnxModel;
use super::scaler::Scaler;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

/// Model location used when the config does not override it
pub const DEFAULT_MODEL_PATH: &str = "ann_model.onnx";
/// Scaler location used when the config does not override it
pub const DEFAULT_SCALER_PATH: &str = "scaler.json";

/// Shape problems found while validating loaded artifacts
#[derive(Debug, Error)]
pub enum ShapeError {
    #[error("scaler expects {found} features, model input has {expected}")]
    ScalerWidth { expected: usize, found: usize },
    #[error("model takes {found} features, expected {expected}")]
    ModelWidth { expected: usize, found: usize },
    #[error("{0} contains non-finite values")]
    NonFinite(&'static str),
}

/// Errors raised while loading the artifact files
#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to load model {}: {source:#}", .path.display())]
    Model {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },
    #[error("invalid artifact {}: {source}", .path.display())]
    Shape {
        path: PathBuf,
        #[source]
        source: ShapeError,
    },
}

/// The trained model and the scaler it was trained behind
#[derive(Debug)]
pub struct ModelArtifacts {
    pub model: OnnxModel,
    pub scaler: Scaler,
}

impl ModelArtifacts {
    /// Read and validate the scaler, then open the model
    pub async fn load(
        model_path: impl AsRef<Path>,
        scaler_path: impl AsRef<Path>,
    ) -> Result<Self, ArtifactError> {
        let (model_path, scaler_path) = (model_path.as_ref(), scaler_path.as_ref());

        info!(path = %scaler_path.display(), "Loading scaler");
        let content = tokio::fs::read_to_string(scaler_path)
            .await
            .map_err(|source| ArtifactError::Io {
                path: scaler_path.to_path_buf(),
                source,
            })?;
        let scaler = Self::parse_scaler(scaler_path, &content)?;

        info!(path = %model_path.display(), "Loading model");
        let bytes = tokio::fs::read(model_path)
            .await
            .map_err(|source| ArtifactError::Io {
                path: model_path.to_path_buf(),
                source,
            })?;
        let model = Self::open_model(model_path, &bytes)?;

        info!(
            model = %model_path.display(),
            scaler = %scaler_path.display(),
            "Model artifacts loaded"
        );
        Ok(Self { model, scaler })
    }

    /// Parse and validate a scaler; `path` is only used for error context
    pub fn parse_scaler(path: &Path, content: &str) -> Result<Scaler, ArtifactError> {
        let scaler: Scaler =
            serde_json::from_str(content).map_err(|source| ArtifactError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        scaler.validate().map_err(|source| ArtifactError::Shape {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(scaler)
    }

    /// Open an ONNX graph and check its declared input width
    pub fn open_model(path: &Path, bytes: &[u8]) -> Result<OnnxModel, ArtifactError> {
        let model = OnnxModel::from_bytes(bytes).map_err(|source| ArtifactError::Model {
            path: path.to_path_buf(),
            source,
        })?;

        match model.input_width() {
            Some(found) if found != FEATURE_COUNT => Err(ArtifactError::Shape {
                path: path.to_path_buf(),
                source: ShapeError::ModelWidth {
                    expected: FEATURE_COUNT,
                    found,
                },
            }),
            _ => Ok(model),
        }
    }
}
