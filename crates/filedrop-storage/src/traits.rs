//! Storage abstraction trait
//!
//! This module defines the Storage trait that all storage backends must implement.

use crate::StorageBackend;
use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;

/// Storage operation errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Upload failed: {0}")]
    UploadFailed(String),

    #[error("Download failed: {0}")]
    DownloadFailed(String),

    #[error("File not found: {0}")]
    NotFound(String),

    #[error("Invalid storage key: {0}")]
    InvalidKey(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Storage abstraction trait
///
/// Keys are produced by [`crate::key_for_filename`]. Backends must make `put`
/// all-or-nothing: a reader never observes a partially written object under `key`.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Store `data` under `key`, replacing any existing object, and return its location
    async fn put(&self, key: &str, data: Bytes) -> StorageResult<String>;

    /// Read an object back
    async fn get(&self, key: &str) -> StorageResult<Vec<u8>>;

    /// Get the storage backend type
    fn backend_type(&self) -> StorageBackend;

    /// Human-readable location of the backend (for logs)
    fn location(&self) -> String;
}
