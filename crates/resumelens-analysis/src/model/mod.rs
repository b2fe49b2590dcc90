//! Model client seam.
//!
//! The orchestrator talks to the external structured-generation service
//! through this trait so the service keeps a process-scoped, explicitly
//! constructed client, and tests can substitute a stub.

mod groq;

pub use groq::{GroqClient, GroqConfig};

use crate::error::AnalysisError;
use async_trait::async_trait;

/// Client for an external structured-generation service.
#[async_trait]
pub trait ModelClient: Send + Sync {
    /// Single-shot request: fixed system instruction plus document text,
    /// returning the model's raw textual response. No streaming, no retry.
    async fn generate(&self, system: &str, user: &str) -> Result<String, AnalysisError>;
}
