//! Resumelens Core Library
//!
//! Shared configuration, error taxonomy, constants, and domain models used by
//! the storage, analysis, and API crates.

pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod storage_types;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, ErrorMetadata, LogLevel};
pub use storage_types::StorageBackend;
