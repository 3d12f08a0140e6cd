use crate::{LocalStorage, Storage, StorageBackend, StorageResult};
use filedrop_core::Config;
use std::sync::Arc;

/// Create a storage backend based on configuration
///
/// For the local backend this creates the storage directory if it is missing.
pub async fn create_storage(config: &Config) -> StorageResult<Arc<dyn Storage>> {
    match config.storage_backend() {
        StorageBackend::Local => {
            let storage = LocalStorage::new(config.upload_folder()).await?;
            Ok(Arc::new(storage))
        }
    }
}
