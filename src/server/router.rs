use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use axum::extract::Request;
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::routing::{delete, get};
use axum::Router;

use super::{config, fields, projects};
use crate::store::{
    ConfigStore, FieldStore, LocalConfigStore, LocalFieldStore, LocalProjectStore, ProjectStore,
};

pub struct AppState {
    pub config: Arc<dyn ConfigStore>,
    pub projects: Arc<dyn ProjectStore>,
    pub fields: Arc<dyn FieldStore>,
}

impl AppState {
    /// State over the local JSON stores for one store root. The HTTP layer
    /// always serves local files; remote selection happens on the client
    /// side.
    #[must_use]
    pub fn local(store_root: &Path) -> Self {
        Self {
            config: Arc::new(LocalConfigStore::new(store_root)),
            projects: Arc::new(LocalProjectStore::new(store_root)),
            fields: Arc::new(LocalFieldStore::new(store_root)),
        }
    }
}

async fn health() -> &'static str {
    "OK"
}

async fn log_request(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let start = Instant::now();

    let response = next.run(request).await;

    let latency = start.elapsed();
    let status = response.status();

    tracing::info!(
        "{} {} {} {}ms",
        method,
        uri.path(),
        status.as_u16(),
        latency.as_millis()
    );

    response
}

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route(
            "/api/v1/config",
            get(config::get_config).put(config::set_config),
        )
        .route(
            "/api/v1/projects",
            get(projects::list_projects).post(projects::create_project),
        )
        .route(
            "/api/v1/projects/{id}",
            get(projects::get_project)
                .patch(projects::update_project)
                .delete(projects::delete_project),
        )
        .route(
            "/api/v1/projects/{id}/fields",
            get(fields::list_project_fields),
        )
        .route(
            "/api/v1/fields",
            get(fields::list_global_fields).post(fields::add_field),
        )
        .route("/api/v1/fields/{id}", delete(fields::remove_field))
        .layer(middleware::from_fn(log_request))
        .with_state(state)
}
