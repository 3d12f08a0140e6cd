//! Storage setup and initialization

use anyhow::{Context, Result};
use filedrop_core::Config;
use filedrop_storage::{create_storage, Storage};
use std::sync::Arc;

/// Create the configured storage backend; for local storage this creates the upload folder.
pub async fn setup_storage(config: &Config) -> Result<Arc<dyn Storage>> {
    tracing::info!(
        backend = %config.storage_backend(),
        upload_folder = %config.upload_folder(),
        "Initializing storage..."
    );

    let storage = create_storage(config)
        .await
        .context("Failed to initialize storage")?;

    tracing::info!(
        backend = ?storage.backend_type(),
        location = %storage.location(),
        "Storage initialized successfully"
    );

    Ok(storage)
}
