//! Model info handler

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::logic::features::LayoutInfo;
use crate::logic::model::GatewayStatus;
use crate::AppState;

#[derive(Debug, Serialize, Deserialize)]
pub struct ModelInfoResponse {
    #[serde(flatten)]
    pub status: GatewayStatus,
    pub layout: LayoutInfo,
}

pub async fn info(State(state): State<AppState>) -> Json<ModelInfoResponse> {
    Json(ModelInfoResponse {
        status: state.gateway.status(),
        layout: LayoutInfo::current(),
    })
}
