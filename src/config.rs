//! Configuration handling for the TUI

use crate::model::{DEFAULT_MODEL_PATH, DEFAULT_SCALER_PATH};
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TuiConfig {
    /// Location of the trained ONNX model
    pub model_path: Option<PathBuf>,
    /// Location of the fitted scaler parameters
    pub scaler_path: Option<PathBuf>,
    /// Capture mouse events (default on)
    pub mouse_capture: Option<bool>,
}

impl TuiConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "ohca", "ohca-risk-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: TuiConfig = serde_json::from_str(&content)?;
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    /// Model file to load, falling back to the working directory default
    pub fn model_path(&self) -> PathBuf {
        self.model_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_MODEL_PATH))
    }

    pub fn scaler_path(&self) -> PathBuf {
        self.scaler_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SCALER_PATH))
    }

    pub fn mouse_capture(&self) -> bool {
        self.mouse_capture.unwrap_or(true)
    }
}
