//! Route configuration and setup.

use crate::error::panic_response;
use crate::handlers;
use crate::state::AppState;
use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Json, Router,
};
use filedrop_core::Config;
use std::sync::Arc;
use std::time::Duration;
use tower::limit::ConcurrencyLimitLayer;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

/// Setup all application routes
pub fn setup_routes(config: &Config, state: Arc<AppState>) -> Router<()> {
    let http_concurrency_limit = config.http_concurrency_limit();
    tracing::info!(
        http_concurrency_limit = http_concurrency_limit,
        "HTTP concurrency limit layer enabled"
    );

    let request_timeout_secs = config.request_timeout_secs();
    tracing::info!(request_timeout_secs, "Request timeout layer enabled");

    Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/test", get(handlers::load_test::load_test))
        .route("/upload", post(handlers::upload::upload_file))
        .route(
            "/api/openapi.json",
            get(|| async { Json(crate::api_doc::get_openapi_spec()) }),
        )
        // Uploads have no size limit
        .layer(DefaultBodyLimit::disable())
        .layer(ConcurrencyLimitLayer::new(http_concurrency_limit))
        .layer(TimeoutLayer::new(Duration::from_secs(request_timeout_secs)))
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
