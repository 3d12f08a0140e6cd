//! Application state shared by every handler.

use filedrop_core::Config;
use filedrop_storage::Storage;
use std::sync::Arc;

/// Immutable per-process state, built once at startup and passed to handlers as
/// `State<Arc<AppState>>`.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub storage: Arc<dyn Storage>,
}

impl AppState {
    pub fn new(config: Config, storage: Arc<dyn Storage>) -> Self {
        Self { config, storage }
    }
}
