//! Resumelens Storage Library
//!
//! Storage abstraction and backends for the analysis pipeline. Includes the
//! `Storage` trait and implementations for S3 and the local filesystem.
//!
//! # Storage key format
//!
//! Uploaded objects live under a single prefix: `uploads/{millis}_{filename}`.
//! Keys must not contain `..` or a leading `/`. Key generation and filename
//! validation are centralized in the `keys` module so all backends stay
//! consistent.

pub mod factory;
pub mod keys;
pub mod local;
pub mod s3;
pub mod traits;

// Re-export commonly used types
pub use factory::create_storage;
pub use local::LocalStorage;
pub use resumelens_core::StorageBackend;
pub use s3::S3Storage;
pub use traits::{Storage, StorageError, StorageResult};
