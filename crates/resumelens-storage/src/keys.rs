//! Shared key generation and filename validation for storage backends.
//!
//! Key format: `uploads/{millis}_{filename}`. The millisecond timestamp makes
//! keys practically unique per issuance; the filename is kept so operators can
//! recognize objects in the bucket.

use crate::traits::{StorageError, StorageResult};
use resumelens_core::constants::UPLOAD_KEY_PREFIX;

/// Generate the storage key for an upload issued at `now_millis`.
pub fn upload_key(now_millis: i64, filename: &str) -> String {
    format!("{}/{}_{}", UPLOAD_KEY_PREFIX, now_millis, filename)
}

/// Validate a client-supplied filename before it becomes part of a key.
///
/// Rejects anything that could move the key outside the `uploads/` prefix:
/// path separators, traversal sequences, and control characters.
pub fn validate_filename(filename: &str) -> StorageResult<()> {
    if filename.is_empty() {
        return Err(StorageError::InvalidKey("Filename is empty".to_string()));
    }
    if filename.contains("..") || filename.contains('/') || filename.contains('\\') {
        return Err(StorageError::InvalidKey(
            "Filename must not contain path separators or traversal sequences".to_string(),
        ));
    }
    if filename.chars().any(|c| c.is_control()) {
        return Err(StorageError::InvalidKey(
            "Filename must not contain control characters".to_string(),
        ));
    }
    Ok(())
}
