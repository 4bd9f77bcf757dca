//! ONNX scoring model

use super::features::Features;
use super::traits::RiskModel;
use anyhow::{anyhow, Context, Result};
use ort::session::{builder::GraphOptimizationLevel, Session};
use ort::value::{Tensor, ValueType};
use std::fmt;
use std::sync::Mutex;
use tracing::debug;

/// Pre-trained network running on ONNX Runtime
pub struct OnnxModel {
    /// Running a session needs exclusive access
    session: Mutex<Session>,
    input_name: String,
    output_name: String,
    /// Fixed feature width of the first input, when the graph declares one
    input_width: Option<usize>,
}

impl OnnxModel {
    /// Build a session from a serialized ONNX graph
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let session = Session::builder()?
            .with_optimization_level(GraphOptimizationLevel::Level3)?
            .with_intra_threads(1)?
            .commit_from_memory(bytes)
            .context("not a loadable ONNX model")?;

        let input = session
            .inputs
            .first()
            .ok_or_else(|| anyhow!("model declares no inputs"))?;
        let input_name = input.name.clone();
        let input_width = match &input.input_type {
            ValueType::Tensor { shape, .. } => shape
                .iter()
                .last()
                .and_then(|&dim| usize::try_from(dim).ok())
                .filter(|&dim| dim > 0),
            _ => None,
        };

        let output_name = session
            .outputs
            .iter()
            .find(|o| o.name.contains("prob") || o.name.contains("output"))
            .or_else(|| session.outputs.first())
            .map(|o| o.name.clone())
            .ok_or_else(|| anyhow!("model declares no outputs"))?;

        debug!(
            input = %input_name,
            output = %output_name,
            width = ?input_width,
            "ONNX session ready"
        );

        Ok(Self {
            session: Mutex::new(session),
            input_name,
            output_name,
            input_width,
        })
    }

    pub fn input_width(&self) -> Option<usize> {
        self.input_width
    }
}

impl fmt::Debug for OnnxModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OnnxModel")
            .field("input_name", &self.input_name)
            .field("output_name", &self.output_name)
            .field("input_width", &self.input_width)
            .finish_non_exhaustive()
    }
}

impl RiskModel for OnnxModel {
    fn predict(&self, features: &Features) -> Result<f64> {
        let values: Vec<f32> = features.as_slice().iter().map(|&v| v as f32).collect();
        let shape = vec![1_i64, values.len() as i64];
        let input_tensor =
            Tensor::from_array((shape, values)).context("Failed to create input tensor")?;

        let mut session = self
            .session
            .lock()
            .map_err(|e| anyhow!("Lock error: {}", e))?;
        let outputs = session.run(ort::inputs![&self.input_name => input_tensor])?;

        let output = outputs
            .get(&self.output_name)
            .ok_or_else(|| anyhow!("model produced no `{}` output", self.output_name))?;
        let (_, data) = output.try_extract_tensor::<f32>()?;
        data.first()
            .map(|&v| f64::from(v))
            .ok_or_else(|| anyhow!("model output `{}` is empty", self.output_name))
    }
}
