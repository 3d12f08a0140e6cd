use crate::state::AppState;
use axum::{extract::State, Json};
use filedrop_core::models::HealthResponse;
use std::sync::Arc;

#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is up", body = HealthResponse)
    )
)]
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    tracing::info!("Health check endpoint");
    Json(HealthResponse::ok(state.config.release_version()))
}
