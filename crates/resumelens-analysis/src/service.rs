//! Analysis orchestration.
//!
//! One invocation per request: download → extract → truncate → model →
//! validate-or-fallback. Stateless; the only shared state is the injected
//! process-scoped clients.

use crate::error::AnalysisError;
use crate::extract::{extract_text, truncate_chars, word_count};
use crate::model::ModelClient;
use crate::outcome::{fallback_analysis, parse_analysis, ModelOutcome};
use crate::prompt::SYSTEM_PROMPT;
use resumelens_core::constants::MAX_ANALYSIS_CHARS;
use resumelens_core::models::ResumeAnalysis;
use resumelens_storage::Storage;
use std::sync::Arc;
use std::time::Duration;

/// Result of one successful orchestrator invocation.
#[derive(Debug, Clone)]
pub struct AnalysisOutput {
    pub analysis: ResumeAnalysis,
    /// Whitespace-token count of the full extracted text
    pub word_count: usize,
}

/// The analysis orchestrator. Holds process-scoped storage and model clients;
/// each `analyze` call is independent and shares no mutable state.
pub struct AnalysisService {
    storage: Arc<dyn Storage>,
    model: Arc<dyn ModelClient>,
    storage_timeout: Duration,
}

impl AnalysisService {
    pub fn new(
        storage: Arc<dyn Storage>,
        model: Arc<dyn ModelClient>,
        storage_timeout: Duration,
    ) -> Self {
        Self {
            storage,
            model,
            storage_timeout,
        }
    }

    /// Run the full pipeline for one stored object.
    ///
    /// Terminal failures (retrieval, extraction, model transport) surface as
    /// `AnalysisError`; a malformed model response does not — it is replaced by
    /// the deterministic fallback record and the call still succeeds.
    pub async fn analyze(&self, storage_key: &str) -> Result<AnalysisOutput, AnalysisError> {
        let data = tokio::time::timeout(self.storage_timeout, self.storage.download(storage_key))
            .await
            .map_err(|_| {
                AnalysisError::Retrieval(format!(
                    "Storage fetch timed out after {}s",
                    self.storage_timeout.as_secs()
                ))
            })??;

        let text = extract_text(&data)?;
        tracing::info!(
            key = %storage_key,
            extracted_chars = text.chars().count(),
            word_count = word_count(&text),
            "Extracted text from PDF"
        );

        let truncated = truncate_chars(&text, MAX_ANALYSIS_CHARS);
        let raw_response = self.model.generate(SYSTEM_PROMPT, truncated).await?;

        let analysis = match parse_analysis(&raw_response) {
            ModelOutcome::Parsed(analysis) => analysis,
            ModelOutcome::Unparseable(raw) => {
                tracing::warn!(
                    key = %storage_key,
                    response_chars = raw.chars().count(),
                    "Model response failed schema validation, substituting fallback record"
                );
                fallback_analysis()
            }
        };

        Ok(AnalysisOutput {
            analysis,
            word_count: word_count(&text),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::pdf_fixture;
    use async_trait::async_trait;
    use resumelens_core::StorageBackend;
    use resumelens_storage::{StorageError, StorageResult};

    struct FixedStorage {
        data: Option<Vec<u8>>,
    }

    #[async_trait]
    impl Storage for FixedStorage {
        async fn presigned_put_url(
            &self,
            _key: &str,
            _content_type: &str,
            _expires_in: Duration,
        ) -> StorageResult<String> {
            unimplemented!("not used by the orchestrator")
        }

        async fn download(&self, key: &str) -> StorageResult<Vec<u8>> {
            match &self.data {
                Some(data) => Ok(data.clone()),
                None => Err(StorageError::NotFound(key.to_string())),
            }
        }

        fn backend_type(&self) -> StorageBackend {
            StorageBackend::Local
        }
    }

    struct StubModel;

    #[async_trait]
    impl ModelClient for StubModel {
        async fn generate(&self, _system: &str, _user: &str) -> Result<String, AnalysisError> {
            Ok("{}".to_string())
        }
    }

    fn service(data: Option<Vec<u8>>) -> AnalysisService {
        AnalysisService::new(
            Arc::new(FixedStorage { data }),
            Arc::new(StubModel),
            Duration::from_secs(5),
        )
    }

    #[tokio::test]
    async fn test_missing_object_is_retrieval_error() {
        let err = service(None).analyze("uploads/1_a.pdf").await.unwrap_err();
        assert!(matches!(err, AnalysisError::Retrieval(_)));
    }

    #[tokio::test]
    async fn test_non_pdf_bytes_is_extraction_error() {
        let err = service(Some(b"just ascii text".to_vec()))
            .analyze("uploads/1_a.pdf")
            .await
            .unwrap_err();
        assert!(matches!(err, AnalysisError::Extraction(_)));
    }

    #[tokio::test]
    async fn test_model_transport_failure_is_terminal() {
        struct FailingModel;

        #[async_trait]
        impl ModelClient for FailingModel {
            async fn generate(&self, _: &str, _: &str) -> Result<String, AnalysisError> {
                Err(AnalysisError::Model("connection refused".to_string()))
            }
        }

        // A one-page PDF the extractor accepts; built the same way the API
        // integration tests build theirs.
        let pdf = pdf_fixture("hello");
        let svc = AnalysisService::new(
            Arc::new(FixedStorage { data: Some(pdf) }),
            Arc::new(FailingModel),
            Duration::from_secs(5),
        );
        let err = svc.analyze("uploads/1_a.pdf").await.unwrap_err();
        assert!(matches!(err, AnalysisError::Model(_)));
    }

    #[tokio::test]
    async fn test_happy_path_counts_words_of_full_text() {
        struct EchoModel;

        #[async_trait]
        impl ModelClient for EchoModel {
            async fn generate(&self, _: &str, _: &str) -> Result<String, AnalysisError> {
                Ok(serde_json::to_string(&crate::outcome::fallback_analysis())
                    .expect("serialize fallback"))
            }
        }

        let pdf = pdf_fixture("Jane Doe Senior Rust Engineer");
        let svc = AnalysisService::new(
            Arc::new(FixedStorage { data: Some(pdf) }),
            Arc::new(EchoModel),
            Duration::from_secs(5),
        );
        let output = svc.analyze("uploads/1_resume.pdf").await.expect("analyze");
        assert_eq!(output.word_count, 5);
        assert_eq!(output.analysis, crate::outcome::fallback_analysis());
    }
}
