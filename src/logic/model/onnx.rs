//! ONNX Runtime backend
//!
//! For classifiers exported with a label output (int64) followed by a
//! probability output (float, `[batch, 2]`). A session needs exclusive
//! access to run, so calls are serialized through a mutex.

use ndarray::Array2;
use ort::session::{builder::GraphOptimizationLevel, Session};
use ort::value::Value;
use parking_lot::Mutex;

use super::classifier::{Classifier, ModelError};
use crate::logic::features::FEATURE_COUNT;

pub struct OnnxClassifier {
    session: Mutex<Session>,
    label_output: String,
    proba_output: String,
}

impl OnnxClassifier {
    /// Build a session from artifact bytes
    pub fn from_memory(model_bytes: &[u8]) -> Result<Self, ModelError> {
        tracing::debug!("Loading ONNX model from memory ({} bytes)", model_bytes.len());

        let session = Session::builder()
            .map_err(|e| ModelError::Parse(format!("Session builder error: {}", e)))?
            .with_optimization_level(GraphOptimizationLevel::Level3)
            .map_err(|e| ModelError::Parse(format!("Optimization error: {}", e)))?
            .commit_from_memory(model_bytes)
            .map_err(|e| ModelError::Parse(format!("Load from memory error: {}", e)))?;

        let label_output = session
            .outputs
            .first()
            .map(|o| o.name.clone())
            .ok_or_else(|| ModelError::Parse("No label output defined".to_string()))?;
        let proba_output = session
            .outputs
            .get(1)
            .map(|o| o.name.clone())
            .ok_or_else(|| ModelError::Parse("No probability output defined".to_string()))?;

        Ok(Self {
            session: Mutex::new(session),
            label_output,
            proba_output,
        })
    }

    /// Run the graph once, returning (label, class-1 probability)
    fn run(&self, features: &[f64]) -> Result<(i64, f64), ModelError> {
        if features.len() != FEATURE_COUNT {
            return Err(ModelError::Inference(format!(
                "Expected {} features, got {}",
                FEATURE_COUNT,
                features.len()
            )));
        }

        let input_array = Array2::<f32>::from_shape_vec(
            (1, FEATURE_COUNT),
            features.iter().map(|&v| v as f32).collect(),
        )
        .map_err(|e| ModelError::Inference(format!("Array error: {}", e)))?;

        let input_tensor = Value::from_array(input_array)
            .map_err(|e| ModelError::Inference(format!("Tensor error: {}", e)))?;

        let mut session = self.session.lock();
        let outputs = session
            .run(ort::inputs![input_tensor])
            .map_err(|e| ModelError::Inference(format!("Inference failed: {}", e)))?;

        let label = outputs
            .get(&self.label_output)
            .ok_or_else(|| ModelError::Inference("No label output".to_string()))?
            .try_extract_tensor::<i64>()
            .map_err(|e| ModelError::Inference(format!("Extract error: {}", e)))?
            .1
            .first()
            .copied()
            .ok_or_else(|| ModelError::Inference("Empty label output".to_string()))?;

        let probability = outputs
            .get(&self.proba_output)
            .ok_or_else(|| ModelError::Inference("No probability output".to_string()))?
            .try_extract_tensor::<f32>()
            .map_err(|e| ModelError::Inference(format!("Extract error: {}", e)))?
            .1
            .get(1)
            .copied()
            .ok_or_else(|| ModelError::Inference("Probability output has no class 1".to_string()))?;

        Ok((label, f64::from(probability)))
    }
}

impl Classifier for OnnxClassifier {
    fn backend(&self) -> &'static str {
        "onnx"
    }

    fn predict(&self, features: &[f64]) -> Result<i64, ModelError> {
        self.run(features).map(|(label, _)| label)
    }

    fn predict_proba(&self, features: &[f64]) -> Result<f64, ModelError> {
        self.run(features).map(|(_, probability)| probability)
    }

    fn predict_with_proba(&self, features: &[f64]) -> Result<(i64, f64), ModelError> {
        self.run(features)
    }
}
