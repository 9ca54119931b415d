//! Student Performance Prediction Server
//!
//! Serves a pre-trained binary classifier that predicts "High Performance"
//! vs "Average/Low Performance" from seven student features.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                 STUDENT PERFORMANCE SERVER                   │
//! ├──────────────────────────────────────────────────────────────┤
//! │  POST /predict                                               │
//! │      │                                                       │
//! │      ▼                                                       │
//! │  ┌──────────────┐   ┌──────────────────┐   ┌──────────────┐  │
//! │  │ StudentRecord│──▶│ Feature Encoder  │──▶│  Inference   │  │
//! │  │ (raw JSON)   │   │ (validate+order) │   │  Gateway     │  │
//! │  └──────────────┘   └──────────────────┘   └──────┬───────┘  │
//! │                                                   ▼          │
//! │                                         ┌──────────────────┐ │
//! │                                         │ Classifier       │ │
//! │                                         │ (loaded once)    │ │
//! │                                         └──────────────────┘ │
//! └──────────────────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod error;
pub mod handlers;
pub mod logic;
pub mod models;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub use error::{AppError, AppResult};
use logic::model::InferenceGateway;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub gateway: Arc<InferenceGateway>,
}

impl AppState {
    /// Load the model named by `config` and build the state around it
    pub fn initialize(config: &config::Config) -> Self {
        let gateway = InferenceGateway::initialize(&config.model_path);
        Self {
            gateway: Arc::new(gateway),
        }
    }
}

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health::check))
        .route("/predict", post(handlers::predict::predict))
        .route("/api/v1/model", get(handlers::model::info))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
