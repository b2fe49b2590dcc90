use crate::{LocalStorage, S3Storage, Storage, StorageError, StorageResult};
use resumelens_core::{Config, StorageBackend};
use std::sync::Arc;

/// Create a storage backend based on configuration
pub async fn create_storage(config: &Config) -> StorageResult<Arc<dyn Storage>> {
    match config.storage_backend {
        StorageBackend::S3 => {
            let bucket = config
                .s3_bucket
                .clone()
                .ok_or_else(|| StorageError::ConfigError("S3_BUCKET not configured".to_string()))?;

            let storage =
                S3Storage::new(bucket, config.s3_region.clone(), config.s3_endpoint.clone())
                    .await?;
            Ok(Arc::new(storage))
        }

        StorageBackend::Local => {
            let storage = LocalStorage::new(config.local_storage_path.clone()).await?;
            Ok(Arc::new(storage))
        }
    }
}
