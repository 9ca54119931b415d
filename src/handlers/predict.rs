//! Prediction handler

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde_json::Value;

use crate::models::{PredictionResult, StudentRecord};
use crate::{AppResult, AppState};

/// Predict performance for one student record
pub async fn predict(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> AppResult<Json<PredictionResult>> {
    let Json(raw) = payload?;
    let record = StudentRecord::try_from(raw)?;

    let result = state.gateway.handle(record)?;

    Ok(Json(result))
}
