//! Classifier - the opaque model capability
//!
//! Backends expose a discrete label and the class-1 probability over a
//! fixed-order vector. Which backend is used depends only on the artifact
//! extension.

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use super::linear::LogisticRegression;
use crate::logic::features::layout::LayoutMismatchError;

// ============================================================================
// ERROR HANDLING
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("Model not found at {0}")]
    NotFound(String),

    #[error("Failed to read model artifact {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse model artifact: {0}")]
    Parse(String),

    #[error(transparent)]
    Layout(#[from] LayoutMismatchError),

    #[error("Unsupported model format: {0}")]
    UnsupportedFormat(String),

    /// Raised by a loaded model while predicting
    #[error("{0}")]
    Inference(String),
}

// ============================================================================
// CLASSIFIER TRAIT
// ============================================================================

/// Binary classifier over the encoded feature vector.
///
/// Implementations are shared across request threads; one that cannot run
/// concurrently must serialize access internally.
pub trait Classifier: Send + Sync {
    /// Short backend name for status reporting
    fn backend(&self) -> &'static str;

    /// Discrete class label; a well-formed model returns 0 or 1
    fn predict(&self, features: &[f64]) -> Result<i64, ModelError>;

    /// Probability mass assigned to class 1
    fn predict_proba(&self, features: &[f64]) -> Result<f64, ModelError>;

    /// Label and class-1 probability together. Backends whose single run
    /// yields both outputs override this to avoid a second pass.
    fn predict_with_proba(&self, features: &[f64]) -> Result<(i64, f64), ModelError> {
        Ok((self.predict(features)?, self.predict_proba(features)?))
    }
}

// ============================================================================
// LOADING
// ============================================================================

/// Provenance of the loaded artifact
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelInfo {
    pub path: String,
    pub backend: String,
    pub sha256: String,
    pub loaded_at: DateTime<Utc>,
}

/// Load a classifier artifact from disk
pub fn load_model(path: &Path) -> Result<(Box<dyn Classifier>, ModelInfo), ModelError> {
    let display = path.display().to_string();

    if !path.exists() {
        return Err(ModelError::NotFound(display));
    }

    let bytes = std::fs::read(path).map_err(|source| ModelError::Io {
        path: display.clone(),
        source,
    })?;

    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();

    let classifier = from_bytes(&extension, &bytes)?;

    let info = ModelInfo {
        path: display,
        backend: classifier.backend().to_string(),
        sha256: hex::encode(Sha256::digest(&bytes)),
        loaded_at: Utc::now(),
    };

    Ok((classifier, info))
}

fn from_bytes(extension: &str, bytes: &[u8]) -> Result<Box<dyn Classifier>, ModelError> {
    match extension {
        "json" => Ok(Box::new(LogisticRegression::from_slice(bytes)?)),
        #[cfg(feature = "onnx")]
        "onnx" => Ok(Box::new(super::onnx::OnnxClassifier::from_memory(bytes)?)),
        #[cfg(not(feature = "onnx"))]
        "onnx" => Err(ModelError::UnsupportedFormat(
            "ONNX artifacts require the `onnx` feature".to_string(),
        )),
        "" => Err(ModelError::UnsupportedFormat("artifact has no file extension".to_string())),
        other => Err(ModelError::UnsupportedFormat(format!(".{}", other))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn artifact(suffix: &str, contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_json_model() {
        let file = artifact(
            ".json",
            r#"{"model_type":"logistic_regression","coefficients":[0,0,0,0,0,0,0],"intercept":0.0}"#,
        );

        let (classifier, info) = load_model(file.path()).unwrap();
        assert_eq!(classifier.backend(), "logistic_regression");
        assert_eq!(info.backend, "logistic_regression");
        assert_eq!(info.sha256.len(), 64);
        assert_eq!(classifier.predict_proba(&[0.0; 7]).unwrap(), 0.5);
    }

    #[test]
    fn test_missing_file() {
        let err = load_model(Path::new("/nonexistent/student_performance_model.json")).err().unwrap();
        assert!(matches!(err, ModelError::NotFound(_)));
    }

    #[test]
    fn test_unknown_extension() {
        let file = artifact(".pkl", "not a pickle");
        let err = load_model(file.path()).err().unwrap();
        assert!(matches!(err, ModelError::UnsupportedFormat(_)));
    }

    #[test]
    fn test_corrupt_json() {
        let file = artifact(".json", "{ coefficients: ");
        let err = load_model(file.path()).err().unwrap();
        assert!(matches!(err, ModelError::Parse(_)));
    }

    #[cfg(not(feature = "onnx"))]
    #[test]
    fn test_onnx_without_feature() {
        let file = artifact(".onnx", "\x08\x07");
        let err = load_model(file.path()).err().unwrap();
        assert!(matches!(err, ModelError::UnsupportedFormat(_)));
    }
}
