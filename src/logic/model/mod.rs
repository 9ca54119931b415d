//! Model Module - Inference Engine
//!
//! The classifier is an opaque capability behind a trait; the gateway owns
//! the loaded instance and shapes results.

pub mod classifier;
pub mod linear;
#[cfg(feature = "onnx")]
pub mod onnx;
pub mod gateway;

// Re-export common types
pub use classifier::{load_model, Classifier, ModelError, ModelInfo};
pub use linear::LogisticRegression;
pub use gateway::{GatewayStatus, InferenceGateway, PredictError, Prediction};
