use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::constants::STATUS_OK;

/// Body returned by `GET /health`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Always "ok"
    pub status: String,
    /// Release version the process was started with
    pub release_version: String,
}

impl HealthResponse {
    pub fn ok(release_version: impl Into<String>) -> Self {
        Self {
            status: STATUS_OK.to_string(),
            release_version: release_version.into(),
        }
    }
}

/// Body returned by `GET /test`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct LoadTestResponse {
    /// Always "ok"
    pub status: String,
    /// Release version the process was started with
    pub release_version: String,
    /// Seconds the request was held before responding
    pub delay: u64,
}

impl LoadTestResponse {
    pub fn ok(release_version: impl Into<String>, delay: u64) -> Self {
        Self {
            status: STATUS_OK.to_string(),
            release_version: release_version.into(),
            delay,
        }
    }
}
