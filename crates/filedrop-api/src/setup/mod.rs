//! Application setup and initialization
//!
//! This module contains all application initialization logic extracted from main.rs
//! for better organization and testability.

pub mod routes;
pub mod server;
pub mod storage;
pub mod validation;

use crate::state::AppState;
use anyhow::{Context, Result};
use filedrop_core::Config;
use std::sync::Arc;

/// Initialize the entire application, including the global tracing subscriber
pub async fn initialize_app(config: Config) -> Result<(Arc<AppState>, axum::Router)> {
    // Initialize telemetry first
    crate::telemetry::init_telemetry(config.log_level(), config.log_format())?;

    tracing::info!(
        environment = %config.environment(),
        "Release version: {}",
        config.release_version()
    );

    build_app(config).await
}

/// Validate configuration, set up storage, and build the router.
///
/// Does not touch global state, so tests can call it once per test.
pub async fn build_app(config: Config) -> Result<(Arc<AppState>, axum::Router)> {
    // Validate configuration first - fail fast on misconfiguration
    validation::validate_config(&config).context("Configuration validation failed")?;

    // Setup storage
    let storage = storage::setup_storage(&config).await?;

    let state = Arc::new(AppState::new(config.clone(), storage));

    // Setup routes
    let router = routes::setup_routes(&config, state.clone());

    Ok((state, router))
}
