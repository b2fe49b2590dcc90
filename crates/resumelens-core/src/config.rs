//! Configuration module
//!
//! Environment-driven configuration for the API and services. Every external
//! call has an explicit timeout here rather than inheriting client-library
//! defaults silently.

use std::env;

use crate::storage_types::StorageBackend;

// Defaults
const DEFAULT_SERVER_PORT: u16 = 3000;
const DEFAULT_MODEL_TIMEOUT_SECS: u64 = 30;
const DEFAULT_STORAGE_TIMEOUT_SECS: u64 = 30;
const DEFAULT_MAX_BODY_BYTES: usize = 1024 * 1024; // /analyze bodies are small JSON
const DEFAULT_MODEL_API_BASE: &str = "https://api.groq.com/openai/v1";
const DEFAULT_MODEL_ID: &str = "llama-3.3-70b-versatile";
const DEFAULT_LOCAL_STORAGE_PATH: &str = "./storage";

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub server_port: u16,
    pub cors_origins: Vec<String>,
    pub environment: String,
    // Storage configuration
    pub storage_backend: StorageBackend,
    pub s3_bucket: Option<String>,
    pub s3_region: Option<String>,
    pub s3_endpoint: Option<String>, // Custom endpoint for S3-compatible providers
    pub local_storage_path: String,
    pub storage_timeout_secs: u64,
    // Model service configuration
    pub model_api_key: Option<String>,
    pub model_api_base: String,
    pub model_id: String,
    pub model_timeout_secs: u64,
    pub model_max_tokens: u32,
    // HTTP limits
    pub max_body_bytes: usize,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, anyhow::Error> {
        let storage_backend = env::var("STORAGE_BACKEND")
            .unwrap_or_else(|_| "s3".to_string())
            .parse::<StorageBackend>()
            .map_err(|e| anyhow::anyhow!(e))?;

        let config = Config {
            server_port: parse_env("SERVER_PORT", DEFAULT_SERVER_PORT)?,
            cors_origins: env::var("CORS_ORIGINS")
                .unwrap_or_else(|_| "*".to_string())
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
            storage_backend,
            s3_bucket: env::var("S3_BUCKET").ok(),
            s3_region: env::var("S3_REGION").ok(),
            s3_endpoint: env::var("S3_ENDPOINT").ok(),
            local_storage_path: env::var("LOCAL_STORAGE_PATH")
                .unwrap_or_else(|_| DEFAULT_LOCAL_STORAGE_PATH.to_string()),
            storage_timeout_secs: parse_env("STORAGE_TIMEOUT_SECS", DEFAULT_STORAGE_TIMEOUT_SECS)?,
            model_api_key: env::var("GROQ_API_KEY").ok(),
            model_api_base: env::var("MODEL_API_BASE")
                .unwrap_or_else(|_| DEFAULT_MODEL_API_BASE.to_string()),
            model_id: env::var("MODEL_ID").unwrap_or_else(|_| DEFAULT_MODEL_ID.to_string()),
            model_timeout_secs: parse_env("MODEL_TIMEOUT_SECS", DEFAULT_MODEL_TIMEOUT_SECS)?,
            model_max_tokens: parse_env("MODEL_MAX_TOKENS", 2048)?,
            max_body_bytes: parse_env("MAX_BODY_BYTES", DEFAULT_MAX_BODY_BYTES)?,
        };

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), anyhow::Error> {
        if self.storage_backend == StorageBackend::S3 && self.s3_bucket.is_none() {
            anyhow::bail!("S3_BUCKET is required when STORAGE_BACKEND=s3");
        }
        Ok(())
    }

    /// Name of the storage container reported in upload grants and checked on
    /// /analyze requests. For the local backend this is a fixed placeholder.
    pub fn bucket(&self) -> &str {
        match self.storage_backend {
            StorageBackend::S3 => self.s3_bucket.as_deref().unwrap_or_default(),
            StorageBackend::Local => "local",
        }
    }

    pub fn is_production(&self) -> bool {
        let env = self.environment.to_lowercase();
        env == "production" || env == "prod"
    }
}

fn parse_env<T: std::str::FromStr>(name: &str, default: T) -> Result<T, anyhow::Error>
where
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) => raw
            .parse::<T>()
            .map_err(|e| anyhow::anyhow!("Invalid {}: {}", name, e)),
        Err(_) => Ok(default),
    }
}
