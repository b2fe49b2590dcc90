//! Resumelens Analysis Library
//!
//! The analysis orchestrator: fetch a stored PDF, extract its text, invoke the
//! external model under a fixed schema contract, and produce a validated
//! structured result even when the model's output is malformed.

pub mod error;
pub mod extract;
pub mod model;
pub mod outcome;
pub mod prompt;
pub mod service;
pub mod test_helpers;

// Re-export commonly used types
pub use error::AnalysisError;
pub use model::{GroqClient, GroqConfig, ModelClient};
pub use outcome::{fallback_analysis, parse_analysis, ModelOutcome};
pub use service::{AnalysisOutput, AnalysisService};
