//! Shared test fixtures: in-memory storage, stub model clients, a router
//! factory, and a minimal PDF builder.
#![allow(dead_code)]

use async_trait::async_trait;
use axum_test::TestServer;
use resumelens_analysis::{AnalysisError, AnalysisService, ModelClient};
use resumelens_api::setup::routes::setup_routes;
use resumelens_api::state::AppState;
use resumelens_core::{Config, StorageBackend};
use resumelens_storage::{Storage, StorageError, StorageResult};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

pub const TEST_BUCKET: &str = "resume-uploads";

/// In-memory storage double. Presigning returns a deterministic URL; downloads
/// serve the preloaded objects.
pub struct MockStorage {
    objects: HashMap<String, Vec<u8>>,
}

impl MockStorage {
    pub fn empty() -> Self {
        Self {
            objects: HashMap::new(),
        }
    }

    pub fn with_object(key: &str, data: Vec<u8>) -> Self {
        let mut objects = HashMap::new();
        objects.insert(key.to_string(), data);
        Self { objects }
    }
}

#[async_trait]
impl Storage for MockStorage {
    async fn presigned_put_url(
        &self,
        storage_key: &str,
        _content_type: &str,
        expires_in: Duration,
    ) -> StorageResult<String> {
        Ok(format!(
            "https://{}.s3.us-east-1.amazonaws.com/{}?X-Amz-Expires={}&X-Amz-Signature=test",
            TEST_BUCKET,
            storage_key,
            expires_in.as_secs()
        ))
    }

    async fn download(&self, storage_key: &str) -> StorageResult<Vec<u8>> {
        self.objects
            .get(storage_key)
            .cloned()
            .ok_or_else(|| StorageError::NotFound(storage_key.to_string()))
    }

    fn backend_type(&self) -> StorageBackend {
        StorageBackend::S3
    }
}

/// Storage double whose presigning always fails, to exercise the
/// InternalError path of /upload.
pub struct FailingStorage;

#[async_trait]
impl Storage for FailingStorage {
    async fn presigned_put_url(
        &self,
        _storage_key: &str,
        _content_type: &str,
        _expires_in: Duration,
    ) -> StorageResult<String> {
        Err(StorageError::BackendError(
            "credential signing failed".to_string(),
        ))
    }

    async fn download(&self, storage_key: &str) -> StorageResult<Vec<u8>> {
        Err(StorageError::DownloadFailed(format!(
            "unreachable: {}",
            storage_key
        )))
    }

    fn backend_type(&self) -> StorageBackend {
        StorageBackend::S3
    }
}

/// Model double returning a fixed textual response.
pub struct StubModel(pub String);

#[async_trait]
impl ModelClient for StubModel {
    async fn generate(&self, _system: &str, _user: &str) -> Result<String, AnalysisError> {
        Ok(self.0.clone())
    }
}

pub fn test_config() -> Config {
    Config {
        server_port: 0,
        cors_origins: vec!["*".to_string()],
        environment: "test".to_string(),
        storage_backend: StorageBackend::S3,
        s3_bucket: Some(TEST_BUCKET.to_string()),
        s3_region: Some("us-east-1".to_string()),
        s3_endpoint: None,
        local_storage_path: "./storage".to_string(),
        storage_timeout_secs: 5,
        model_api_key: Some("gsk_test".to_string()),
        model_api_base: "https://api.groq.com/openai/v1".to_string(),
        model_id: "llama-3.3-70b-versatile".to_string(),
        model_timeout_secs: 5,
        model_max_tokens: 2048,
        max_body_bytes: 1024 * 1024,
    }
}

/// Build a test server around injected storage and model doubles.
pub fn test_server(storage: Arc<dyn Storage>, model: Arc<dyn ModelClient>) -> TestServer {
    let config = test_config();
    let analysis = Arc::new(AnalysisService::new(
        storage.clone(),
        model,
        Duration::from_secs(config.storage_timeout_secs),
    ));
    let state = Arc::new(AppState {
        config: config.clone(),
        storage,
        analysis,
    });
    let router = setup_routes(&config, state).expect("router");
    TestServer::new(router).expect("test server")
}

pub use resumelens_analysis::test_helpers::pdf_fixture;
