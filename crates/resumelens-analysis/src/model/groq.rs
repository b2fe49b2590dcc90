//! Groq chat-completions client (OpenAI-compatible API) with strict JSON mode.

use crate::error::AnalysisError;
use crate::model::ModelClient;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt::{Debug, Formatter, Result as FmtResult};
use std::time::Duration;

const DEFAULT_API_BASE: &str = "https://api.groq.com/openai/v1";

/// Groq client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroqConfig {
    /// Groq API key
    pub api_key: String,
    /// API base URL (default: Groq's OpenAI-compatible endpoint)
    #[serde(default = "default_api_base")]
    pub api_base: String,
    /// Model identifier (default: llama-3.3-70b-versatile)
    #[serde(default = "default_model")]
    pub model: String,
    /// Maximum tokens for the response
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_api_base() -> String {
    DEFAULT_API_BASE.to_string()
}

fn default_model() -> String {
    "llama-3.3-70b-versatile".to_string()
}

fn default_max_tokens() -> u32 {
    2048
}

fn default_timeout_secs() -> u64 {
    30
}

/// Groq model client
pub struct GroqClient {
    http_client: reqwest::Client,
    config: GroqConfig,
}

impl Debug for GroqClient {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("GroqClient")
            .field("model", &self.config.model)
            .finish()
    }
}

// Chat completions request/response structures
#[derive(Debug, Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
    max_tokens: u32,
    response_format: ResponseFormat,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    format_type: String,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ChatResponseMessage {
    content: Option<String>,
}

impl GroqClient {
    pub fn new(config: GroqConfig) -> Result<Self, AnalysisError> {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AnalysisError::Model(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http_client,
            config,
        })
    }
}

#[async_trait]
impl ModelClient for GroqClient {
    async fn generate(&self, system: &str, user: &str) -> Result<String, AnalysisError> {
        let body = ChatCompletionRequest {
            model: self.config.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: system.to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: user.to_string(),
                },
            ],
            max_tokens: self.config.max_tokens,
            response_format: ResponseFormat {
                format_type: "json_object".to_string(),
            },
        };

        let start = std::time::Instant::now();

        let response = self
            .http_client
            .post(format!(
                "{}/chat/completions",
                self.config.api_base.trim_end_matches('/')
            ))
            .bearer_auth(&self.config.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| AnalysisError::Model(format!("Request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            tracing::error!(
                status = %status,
                model = %self.config.model,
                duration_ms = start.elapsed().as_secs_f64() * 1000.0,
                "Model API request failed"
            );
            return Err(AnalysisError::Model(format!(
                "Model API request failed: {} - {}",
                status, error_text
            )));
        }

        let parsed: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| AnalysisError::Model(format!("Failed to decode response: {}", e)))?;

        let content = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| AnalysisError::Model("Response contained no choices".to_string()))?;

        tracing::info!(
            model = %self.config.model,
            response_chars = content.chars().count(),
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Model call completed"
        );

        Ok(content)
    }
}
