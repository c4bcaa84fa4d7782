use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::server::AppState;
use crate::server::response::{ApiError, ApiResponse};
use crate::types::NewFieldOption;

pub async fn list_global_fields(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ApiError> {
    let options = state.fields.global()?;
    Ok(Json(ApiResponse::success(options)))
}

pub async fn list_project_fields(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let options = state.fields.for_project(&id)?;
    Ok(Json(ApiResponse::success(options)))
}

pub async fn add_field(
    State(state): State<Arc<AppState>>,
    Json(req): Json<NewFieldOption>,
) -> Result<impl IntoResponse, ApiError> {
    let option = state.fields.add(req)?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(option))))
}

pub async fn remove_field(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    state.fields.remove(&id)?;
    Ok(StatusCode::NO_CONTENT)
}
