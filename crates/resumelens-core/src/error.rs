//! Error types module
//!
//! This module provides the core error taxonomy used throughout the pipeline.
//! All errors are unified under the `AppError` enum, which covers caller input
//! problems and the three classes of external-dependency failure (storage
//! retrieval, PDF extraction, model service).
//!
//! A malformed model response is deliberately NOT part of this taxonomy: it is
//! masked by the deterministic fallback record and never surfaces as an error.

/// Log level for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Debug level - for expected errors like validation failures
    Debug,
    /// Warning level - for recoverable issues
    Warn,
    /// Error level - for unexpected failures
    Error,
}

/// Metadata for error responses - defines how an error should be presented.
/// This trait allows errors to self-describe their HTTP response characteristics.
pub trait ErrorMetadata {
    /// HTTP status code to return
    fn http_status_code(&self) -> u16;

    /// Machine-readable error classification (e.g., "ValidationError")
    fn error_code(&self) -> &'static str;

    /// Whether this error is recoverable by the caller retrying
    fn is_recoverable(&self) -> bool;

    /// Client-facing message (may differ from internal error message)
    fn client_message(&self) -> String;

    /// Full internal message, for logs only
    fn detailed_message(&self) -> String;

    /// Log level for this error
    fn log_level(&self) -> LogLevel;
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Retrieval error: {0}")]
    Retrieval(String),

    #[error("Extraction error: {0}")]
    Extraction(String),

    #[error("Analysis service error: {0}")]
    AnalysisService(String),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("Internal error with source")]
    InternalWithSource {
        message: String,
        #[source]
        source: anyhow::Error,
    },
}

impl ErrorMetadata for AppError {
    fn http_status_code(&self) -> u16 {
        match self {
            AppError::InvalidInput(_) => 400,
            AppError::Retrieval(_)
            | AppError::Extraction(_)
            | AppError::AnalysisService(_)
            | AppError::Internal(_)
            | AppError::InternalWithSource { .. } => 500,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            AppError::InvalidInput(_) => "ValidationError",
            AppError::Retrieval(_) => "RetrievalError",
            AppError::Extraction(_) => "ExtractionError",
            AppError::AnalysisService(_) => "AnalysisServiceError",
            AppError::Internal(_) | AppError::InternalWithSource { .. } => "InternalError",
        }
    }

    fn is_recoverable(&self) -> bool {
        // Only caller-input errors are recoverable by retrying with corrected input.
        // Dependency failures carry no internal retry; retry policy is the caller's.
        matches!(self, AppError::InvalidInput(_))
    }

    fn client_message(&self) -> String {
        match self {
            // Input errors are the caller's own data; safe and useful to echo.
            AppError::InvalidInput(msg) => msg.clone(),
            // Dependency failures return a generic message; causes go to logs only.
            AppError::Retrieval(_) => "Failed to retrieve the stored document".to_string(),
            AppError::Extraction(_) => "Failed to extract text from the document".to_string(),
            AppError::AnalysisService(_) => "Failed to analyze resume".to_string(),
            AppError::Internal(_) | AppError::InternalWithSource { .. } => {
                "Internal error".to_string()
            }
        }
    }

    fn detailed_message(&self) -> String {
        match self {
            AppError::InternalWithSource { message, source } => {
                format!("{}: {}", message, source)
            }
            other => other.to_string(),
        }
    }

    fn log_level(&self) -> LogLevel {
        match self {
            AppError::InvalidInput(_) => LogLevel::Debug,
            AppError::Retrieval(_) | AppError::Extraction(_) | AppError::AnalysisService(_) => {
                LogLevel::Error
            }
            AppError::Internal(_) | AppError::InternalWithSource { .. } => LogLevel::Error,
        }
    }
}
