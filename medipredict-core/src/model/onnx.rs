//! ONNX backend (feature `onnx`)
//!
//! Expects a classifier exported with a single `[1, N]` float input whose
//! first output is the int64 label tensor (the skl2onnx layout).

use std::path::Path;

use ndarray::Array2;
use ort::session::{builder::GraphOptimizationLevel, Session};
use ort::value::{Value, ValueType};
use parking_lot::Mutex;

use super::classifier::{check_shape, Classifier, ClassifierError};
use crate::error::LoadError;

pub struct OnnxClassifier {
    // run() needs &mut Session
    session: Mutex<Session>,
    output_name: String,
    feature_count: usize,
}

impl OnnxClassifier {
    /// Load ONNX model from file
    pub fn load(path: &Path, feature_count: usize) -> Result<Self, LoadError> {
        log::info!("Loading ONNX model from: {}", path.display());

        let session = Session::builder()
            .map_err(|e| LoadError::Runtime(format!("Failed to create session builder: {}", e)))?
            .with_optimization_level(GraphOptimizationLevel::Level3)
            .map_err(|e| LoadError::Runtime(format!("Failed to set optimization: {}", e)))?
            .commit_from_file(path)
            .map_err(|e| LoadError::Runtime(format!("Failed to load model: {}", e)))?;

        let declared = session.inputs.first().and_then(|input| match &input.input_type {
            ValueType::Tensor { shape, .. } => shape.last().copied(),
            _ => None,
        });
        check_input_width(declared, feature_count).map_err(|reason| LoadError::Invalid {
            path: path.display().to_string(),
            reason,
        })?;

        let output_name = session
            .outputs
            .first()
            .map(|o| o.name.clone())
            .ok_or_else(|| LoadError::Invalid {
                path: path.display().to_string(),
                reason: "model defines no outputs".to_string(),
            })?;

        Ok(Self {
            session: Mutex::new(session),
            output_name,
            feature_count,
        })
    }
}

/// Last input dimension declared by the model against the disease's feature
/// count. Dynamic (-1) or undeclared widths are checked at predict time.
fn check_input_width(declared: Option<i64>, feature_count: usize) -> Result<(), String> {
    match declared {
        Some(width) if width >= 0 && width as usize != feature_count => Err(format!(
            "model expects {} input features, disease has {}",
            width, feature_count
        )),
        _ => Ok(()),
    }
}

impl Classifier for OnnxClassifier {
    fn predict(&self, vector: &[f64]) -> Result<i64, ClassifierError> {
        check_shape(self.feature_count, vector)?;

        let input: Vec<f32> = vector.iter().map(|v| *v as f32).collect();
        let input_array = Array2::<f32>::from_shape_vec((1, self.feature_count), input)
            .map_err(|e| ClassifierError::Internal(format!("Array error: {}", e)))?;

        let input_tensor = Value::from_array(input_array)
            .map_err(|e| ClassifierError::Internal(format!("Tensor error: {}", e)))?;

        let mut session = self.session.lock();
        let outputs = session
            .run(ort::inputs![input_tensor])
            .map_err(|e| ClassifierError::Internal(format!("Inference failed: {}", e)))?;

        let output = outputs
            .get(&self.output_name)
            .ok_or_else(|| ClassifierError::Internal("No output".to_string()))?;

        let (_, labels) = output
            .try_extract_tensor::<i64>()
            .map_err(|e| ClassifierError::Internal(format!("Extract error: {}", e)))?;

        labels
            .first()
            .copied()
            .ok_or_else(|| ClassifierError::Internal("Empty label tensor".to_string()))
    }

    fn kind(&self) -> &'static str {
        "onnx"
    }
}
