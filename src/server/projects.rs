use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::error::Error;
use crate::server::AppState;
use crate::server::response::{ApiError, ApiResponse};
use crate::types::{NewProject, ProjectPatch};

pub async fn list_projects(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ApiError> {
    let projects = state.projects.list()?;
    Ok(Json(ApiResponse::success(projects)))
}

pub async fn get_project(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let project = state.projects.get(&id)?.ok_or(Error::NotFound)?;
    Ok(Json(ApiResponse::success(project)))
}

pub async fn create_project(
    State(state): State<Arc<AppState>>,
    Json(req): Json<NewProject>,
) -> Result<impl IntoResponse, ApiError> {
    let project = state.projects.create(req)?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(project))))
}

pub async fn update_project(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(req): Json<ProjectPatch>,
) -> Result<impl IntoResponse, ApiError> {
    let project = state.projects.update(&id, req)?;
    Ok(Json(ApiResponse::success(project)))
}

pub async fn delete_project(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    state.projects.remove(&id)?;
    Ok(StatusCode::NO_CONTENT)
}
