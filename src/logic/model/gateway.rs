//! Inference Gateway
//!
//! Owns the classifier for the lifetime of the process. The model is loaded
//! once at startup; a failed load is recorded and every later request gets
//! `ModelUnavailable` instead of a panic. Nothing here is mutated after
//! construction apart from the statistics counters.

use std::fmt;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::classifier::{load_model, Classifier, ModelInfo};
use crate::logic::features::{encode, EncodingError, FeatureVector};
use crate::models::{PerformanceClass, PredictionResult, StudentRecord};

// ============================================================================
// ERRORS
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum PredictError {
    #[error("Model not loaded")]
    ModelUnavailable,

    #[error(transparent)]
    Encoding(#[from] EncodingError),

    #[error("Prediction failed: {0}")]
    InferenceFailure(String),
}

impl PredictError {
    /// Input problems the caller can fix; everything else is server side
    pub fn is_client_error(&self) -> bool {
        matches!(self, PredictError::Encoding(_))
    }
}

// ============================================================================
// PREDICTION
// ============================================================================

/// Classifier output for one vector
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prediction {
    pub class: PerformanceClass,
    /// Probability of class 1 ("High Performance")
    pub probability: f64,
}

impl fmt::Display for Prediction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (Probability: {:.2})", self.class, self.probability)
    }
}

// ============================================================================
// STATUS
// ============================================================================

#[derive(Debug, Default)]
struct InferenceStats {
    inference_count: AtomicU64,
    failure_count: AtomicU64,
    latency_sum_us: AtomicU64,
}

/// Gateway status for the model-info endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayStatus {
    pub model_loaded: bool,
    pub model_path: Option<String>,
    pub backend: Option<String>,
    pub artifact_sha256: Option<String>,
    pub loaded_at: Option<DateTime<Utc>>,
    pub unavailable_reason: Option<String>,
    pub inference_count: u64,
    pub failure_count: u64,
    pub avg_latency_ms: f64,
}

// ============================================================================
// GATEWAY
// ============================================================================

enum ModelState {
    Loaded {
        classifier: Box<dyn Classifier>,
        info: ModelInfo,
    },
    Unavailable {
        reason: String,
    },
}

pub struct InferenceGateway {
    state: ModelState,
    stats: InferenceStats,
}

impl InferenceGateway {
    /// Load the artifact at `path`; failure leaves the gateway unavailable
    pub fn initialize(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        tracing::info!("Loading model from: {}", path.display());

        match load_model(path) {
            Ok((classifier, info)) => {
                tracing::info!(
                    backend = %info.backend,
                    sha256 = %info.sha256,
                    "Model loaded successfully"
                );
                Self::with_model(classifier, info)
            }
            Err(e) => {
                tracing::error!("Model unavailable, predictions will be refused: {}", e);
                Self::unavailable(e.to_string())
            }
        }
    }

    pub fn with_model(classifier: Box<dyn Classifier>, info: ModelInfo) -> Self {
        Self {
            state: ModelState::Loaded { classifier, info },
            stats: InferenceStats::default(),
        }
    }

    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self {
            state: ModelState::Unavailable {
                reason: reason.into(),
            },
            stats: InferenceStats::default(),
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self.state, ModelState::Loaded { .. })
    }

    pub fn model_info(&self) -> Option<&ModelInfo> {
        match &self.state {
            ModelState::Loaded { info, .. } => Some(info),
            ModelState::Unavailable { .. } => None,
        }
    }

    /// Run the classifier on an encoded vector
    pub fn predict(&self, vector: &FeatureVector) -> Result<Prediction, PredictError> {
        let classifier = match &self.state {
            ModelState::Loaded { classifier, .. } => classifier,
            ModelState::Unavailable { .. } => return Err(PredictError::ModelUnavailable),
        };

        let start_time = Instant::now();
        let result = run_classifier(classifier.as_ref(), vector);
        let elapsed_us = start_time.elapsed().as_micros() as u64;

        match &result {
            Ok(prediction) => {
                self.stats.inference_count.fetch_add(1, Ordering::Relaxed);
                self.stats.latency_sum_us.fetch_add(elapsed_us, Ordering::Relaxed);
                tracing::debug!(
                    prediction = %prediction.class,
                    probability = prediction.probability,
                    latency_us = elapsed_us,
                    "Prediction complete"
                );
            }
            Err(e) => {
                self.stats.failure_count.fetch_add(1, Ordering::Relaxed);
                tracing::error!("Prediction failed: {}", e);
            }
        }

        result
    }

    /// Full request pipeline: availability, encoding, inference, shaping
    pub fn handle(&self, record: StudentRecord) -> Result<PredictionResult, PredictError> {
        if !self.is_available() {
            return Err(PredictError::ModelUnavailable);
        }

        let vector = encode(&record)?;
        tracing::trace!(features = ?vector.named_values(), "Encoded student record");

        let prediction = self.predict(&vector)?;

        Ok(PredictionResult {
            prediction: prediction.class,
            probability: prediction.probability,
            student_data: record,
        })
    }

    pub fn status(&self) -> GatewayStatus {
        let count = self.stats.inference_count.load(Ordering::Relaxed);
        let sum = self.stats.latency_sum_us.load(Ordering::Relaxed);
        let avg = if count > 0 {
            (sum as f64 / count as f64) / 1000.0
        } else {
            0.0
        };

        let (info, reason) = match &self.state {
            ModelState::Loaded { info, .. } => (Some(info), None),
            ModelState::Unavailable { reason } => (None, Some(reason.clone())),
        };

        GatewayStatus {
            model_loaded: info.is_some(),
            model_path: info.map(|i| i.path.clone()),
            backend: info.map(|i| i.backend.clone()),
            artifact_sha256: info.map(|i| i.sha256.clone()),
            loaded_at: info.map(|i| i.loaded_at),
            unavailable_reason: reason,
            inference_count: count,
            failure_count: self.stats.failure_count.load(Ordering::Relaxed),
            avg_latency_ms: avg,
        }
    }
}

fn run_classifier(
    classifier: &dyn Classifier,
    vector: &FeatureVector,
) -> Result<Prediction, PredictError> {
    let (label, probability) = classifier
        .predict_with_proba(vector.as_slice())
        .map_err(|e| PredictError::InferenceFailure(e.to_string()))?;

    let class = PerformanceClass::from_label(label).ok_or_else(|| {
        PredictError::InferenceFailure(format!("model returned unexpected label {}", label))
    })?;

    if !(0.0..=1.0).contains(&probability) {
        return Err(PredictError::InferenceFailure(format!(
            "model returned probability {} outside [0, 1]",
            probability
        )));
    }

    Ok(Prediction { class, probability })
}
