//! Data models for the application
//!
//! Everything here is request-scoped: built when a request arrives, serialized into
//! the response, then dropped.

mod health;
mod upload;

pub use health::{HealthResponse, LoadTestResponse};
pub use upload::{UploadRequest, UploadResult, UploadedFile};
