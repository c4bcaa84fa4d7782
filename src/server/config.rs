use std::sync::Arc;

use axum::{Json, extract::State, response::IntoResponse};

use crate::server::AppState;
use crate::server::response::{ApiError, ApiResponse};
use crate::types::ConfigUpdate;

pub async fn get_config(State(state): State<Arc<AppState>>) -> Result<impl IntoResponse, ApiError> {
    let doc = state.config.get()?;
    Ok(Json(ApiResponse::success(doc)))
}

pub async fn set_config(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ConfigUpdate>,
) -> Result<impl IntoResponse, ApiError> {
    let doc = state.config.set(req.key, &req.value)?;
    Ok(Json(ApiResponse::success(doc)))
}
