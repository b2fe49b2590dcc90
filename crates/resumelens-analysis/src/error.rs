//! Analysis pipeline errors.
//!
//! Each variant corresponds to one terminal failure class of the orchestrator.
//! None of these are retried internally; retry policy belongs to the caller.

use resumelens_storage::StorageError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalysisError {
    /// The stored object could not be fetched (missing, inaccessible, or the
    /// transfer failed or timed out).
    #[error("Retrieval failed: {0}")]
    Retrieval(String),

    /// The object's bytes did not parse as a PDF. No partial text is forwarded.
    #[error("Text extraction failed: {0}")]
    Extraction(String),

    /// The model service call failed at the transport or API level. A
    /// malformed-but-delivered response is not an error; see the fallback path.
    #[error("Model service call failed: {0}")]
    Model(String),
}

impl From<StorageError> for AnalysisError {
    fn from(err: StorageError) -> Self {
        AnalysisError::Retrieval(err.to_string())
    }
}
