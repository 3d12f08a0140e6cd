use crate::keys::validate_key;
use crate::traits::{Storage, StorageError, StorageResult};
use crate::StorageBackend;
use async_trait::async_trait;
use bytes::Bytes;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use uuid::Uuid;

/// Local filesystem storage implementation
///
/// Objects are plain files directly under `base_path`. Writes land in a hidden
/// temporary file first and are renamed over the destination once complete, so
/// concurrent uploads of the same name leave exactly one of them in place.
#[derive(Clone, Debug)]
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    /// Create a new LocalStorage instance, creating `base_path` if it does not exist.
    ///
    /// This is the only place the storage directory is created; later writes fail
    /// if it has been removed.
    pub async fn new(base_path: impl Into<PathBuf>) -> StorageResult<Self> {
        let base_path = base_path.into();

        fs::create_dir_all(&base_path).await.map_err(|e| {
            StorageError::ConfigError(format!(
                "Failed to create storage directory {}: {}",
                base_path.display(),
                e
            ))
        })?;

        Ok(LocalStorage { base_path })
    }

    fn key_to_path(&self, key: &str) -> StorageResult<PathBuf> {
        validate_key(key)?;
        Ok(self.base_path.join(key))
    }

    /// Temporary file name, fixed length so any key the filesystem accepts still fits.
    fn temp_path(&self) -> PathBuf {
        self.base_path
            .join(format!(".{}.part", Uuid::new_v4().simple()))
    }

    async fn write_temp(temp: &Path, dest: &Path, data: &[u8]) -> StorageResult<()> {
        let fail = |action: &str, e: std::io::Error| {
            StorageError::UploadFailed(format!(
                "Failed to {} temporary file {} for {}: {}",
                action,
                temp.display(),
                dest.display(),
                e
            ))
        };

        let mut file = fs::File::create(temp)
            .await
            .map_err(|e| fail("create", e))?;
        file.write_all(data).await.map_err(|e| fail("write", e))?;
        file.sync_all().await.map_err(|e| fail("sync", e))?;

        Ok(())
    }
}

#[async_trait]
impl Storage for LocalStorage {
    async fn put(&self, key: &str, data: Bytes) -> StorageResult<String> {
        let path = self.key_to_path(key)?;
        let temp = self.temp_path();
        let size = data.len();
        let start = std::time::Instant::now();

        let written = match Self::write_temp(&temp, &path, &data).await {
            Ok(()) => fs::rename(&temp, &path).await.map_err(|e| {
                StorageError::UploadFailed(format!(
                    "Failed to move file into place at {}: {}",
                    path.display(),
                    e
                ))
            }),
            Err(e) => Err(e),
        };

        if let Err(e) = written {
            if let Err(cleanup_err) = fs::remove_file(&temp).await {
                tracing::debug!(
                    error = %cleanup_err,
                    path = %temp.display(),
                    "No temporary file to clean up after failed write"
                );
            }
            return Err(e);
        }

        tracing::info!(
            path = %path.display(),
            key = %key,
            size_bytes = size,
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Local storage upload successful"
        );

        Ok(path.display().to_string())
    }

    async fn get(&self, key: &str) -> StorageResult<Vec<u8>> {
        let path = self.key_to_path(key)?;

        if !fs::try_exists(&path).await.unwrap_or(false) {
            return Err(StorageError::NotFound(key.to_string()));
        }

        fs::read(&path).await.map_err(|e| {
            StorageError::DownloadFailed(format!("Failed to read file {}: {}", path.display(), e))
        })
    }

    fn backend_type(&self) -> StorageBackend {
        StorageBackend::Local
    }

    fn location(&self) -> String {
        self.base_path.display().to_string()
    }
}
