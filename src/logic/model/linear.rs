//! Logistic regression backend
//!
//! Artifact is a JSON export of the trained coefficients:
//!
//! ```json
//! {
//!   "model_type": "logistic_regression",
//!   "feature_names": ["Gender", "AttendanceRate", "..."],
//!   "coefficients": [0.12, 0.05, 0.21, 0.09, 0.03, -0.14, 0.02],
//!   "intercept": -11.4
//! }
//! ```

use serde::{Deserialize, Serialize};

use super::classifier::{Classifier, ModelError};
use crate::logic::features::layout::validate_feature_names;

pub const MODEL_TYPE: &str = "logistic_regression";

fn default_model_type() -> String {
    MODEL_TYPE.to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogisticRegression {
    #[serde(default = "default_model_type")]
    pub model_type: String,
    pub coefficients: Vec<f64>,
    pub intercept: f64,
    /// Training column order, checked against the encoder layout at load
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feature_names: Option<Vec<String>>,
}

impl LogisticRegression {
    pub fn new(coefficients: Vec<f64>, intercept: f64) -> Self {
        Self {
            model_type: default_model_type(),
            coefficients,
            intercept,
            feature_names: None,
        }
    }

    /// Parse and validate a JSON artifact
    pub fn from_slice(bytes: &[u8]) -> Result<Self, ModelError> {
        let model: Self =
            serde_json::from_slice(bytes).map_err(|e| ModelError::Parse(e.to_string()))?;

        if model.model_type != MODEL_TYPE {
            return Err(ModelError::UnsupportedFormat(format!(
                "model_type '{}'",
                model.model_type
            )));
        }

        if let Some(names) = &model.feature_names {
            validate_feature_names(names)?;
        }

        Ok(model)
    }

    /// Signed distance to the separating hyperplane
    pub fn decision_function(&self, features: &[f64]) -> Result<f64, ModelError> {
        if features.len() != self.coefficients.len() {
            return Err(ModelError::Inference(format!(
                "X has {} features, but the model is expecting {} features as input",
                features.len(),
                self.coefficients.len()
            )));
        }

        if features.iter().any(|v| !v.is_finite()) {
            return Err(ModelError::Inference(
                "Input contains NaN or infinity".to_string(),
            ));
        }

        let dot: f64 = self
            .coefficients
            .iter()
            .zip(features)
            .map(|(w, x)| w * x)
            .sum();

        Ok(dot + self.intercept)
    }
}

impl Classifier for LogisticRegression {
    fn backend(&self) -> &'static str {
        MODEL_TYPE
    }

    fn predict(&self, features: &[f64]) -> Result<i64, ModelError> {
        let score = self.decision_function(features)?;
        Ok(i64::from(score > 0.0))
    }

    fn predict_proba(&self, features: &[f64]) -> Result<f64, ModelError> {
        self.decision_function(features).map(sigmoid)
    }
}

/// Numerically stable logistic function
fn sigmoid(z: f64) -> f64 {
    if z >= 0.0 {
        1.0 / (1.0 + (-z).exp())
    } else {
        let e = z.exp();
        e / (1.0 + e)
    }
}
