//! Upload grant model.

use serde::Serialize;
use utoipa::ToSchema;

/// Time-limited credential authorizing one direct PUT to object storage.
///
/// The URL expires after [`crate::constants::UPLOAD_URL_EXPIRY_SECS`] seconds;
/// no explicit revocation exists or is needed.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UploadGrant {
    /// Presigned PUT endpoint for the raw PDF bytes
    pub upload_url: String,
    /// Storage key the object will live at: `uploads/<millis>_<filename>`
    pub key: String,
    /// Storage container the key resolves in
    pub bucket: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grant_wire_format() {
        let grant = UploadGrant {
            upload_url: "https://bucket.s3.amazonaws.com/uploads/1_resume.pdf?sig".to_string(),
            key: "uploads/1_resume.pdf".to_string(),
            bucket: "bucket".to_string(),
        };
        let json = serde_json::to_value(&grant).expect("serialize");
        assert!(json.get("uploadUrl").is_some());
        assert!(json.get("key").is_some());
        assert!(json.get("bucket").is_some());
    }
}
