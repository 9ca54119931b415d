//! Health check handler

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::AppState;

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: i64,
    pub model_loaded: bool,
}

/// Always 200; a missing model reports `degraded`
pub async fn check(State(state): State<AppState>) -> Json<HealthResponse> {
    let model_loaded = state.gateway.is_available();

    Json(HealthResponse {
        status: if model_loaded { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now().timestamp(),
        model_loaded,
    })
}
