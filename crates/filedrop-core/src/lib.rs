//! Filedrop Core Library
//!
//! This crate provides the configuration, error types, and request/response models
//! shared by the storage backend and the HTTP API.

pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod storage_types;

// Re-export commonly used types
pub use config::{Config, LogFormat};
pub use error::{AppError, ErrorMetadata, LogLevel};
pub use storage_types::StorageBackend;
