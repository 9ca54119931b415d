//! Error handling

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::logic::model::PredictError;
use crate::models::NotAnObject;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug)]
pub enum AppError {
    // Client errors
    BadRequest(String),

    // Model errors
    ModelUnavailable,
    InferenceFailure(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::ModelUnavailable => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::InferenceFailure(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(&self) -> String {
        match self {
            AppError::BadRequest(msg) => msg.clone(),
            AppError::ModelUnavailable => "Model not loaded".to_string(),
            AppError::InferenceFailure(msg) => msg.clone(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let error_message = self.message();

        match &self {
            AppError::BadRequest(msg) => tracing::debug!("Rejected request: {}", msg),
            AppError::ModelUnavailable => tracing::warn!("Prediction refused: model not loaded"),
            AppError::InferenceFailure(msg) => tracing::error!("Inference error: {}", msg),
        }

        let body = Json(json!({ "error": error_message }));

        (status, body).into_response()
    }
}

impl From<PredictError> for AppError {
    fn from(err: PredictError) -> Self {
        match err {
            PredictError::ModelUnavailable => AppError::ModelUnavailable,
            PredictError::Encoding(e) => AppError::BadRequest(e.to_string()),
            e @ PredictError::InferenceFailure(_) => AppError::InferenceFailure(e.to_string()),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(err: JsonRejection) -> Self {
        AppError::BadRequest(err.body_text())
    }
}

impl From<NotAnObject> for AppError {
    fn from(err: NotAnObject) -> Self {
        AppError::BadRequest(err.to_string())
    }
}
