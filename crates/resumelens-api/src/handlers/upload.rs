//! Upload coordinator: issues time-limited presigned PUT credentials.
//!
//! This handler never touches the file bytes; the client uploads directly to
//! object storage with the returned URL.

use crate::error::{ErrorResponse, HttpAppError};
use crate::state::AppState;
use axum::{extract::Query, extract::State, response::IntoResponse, Json};
use chrono::Utc;
use resumelens_core::constants::{UPLOAD_CONTENT_TYPE, UPLOAD_URL_EXPIRY_SECS};
use resumelens_core::models::UploadGrant;
use resumelens_core::AppError;
use resumelens_storage::keys;
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;
use utoipa::IntoParams;

/// Query parameters for GET /upload. `fileName` is accepted as a legacy alias
/// of `filename`; the two are normalized by a single accessor rather than
/// duplicated branching.
#[derive(Debug, Deserialize, IntoParams)]
pub struct UploadQuery {
    pub filename: Option<String>,
    #[serde(rename = "fileName")]
    pub file_name: Option<String>,
}

impl UploadQuery {
    /// The desired filename under either accepted parameter name, rejecting
    /// empty values.
    fn normalized_filename(&self) -> Option<&str> {
        self.filename
            .as_deref()
            .or(self.file_name.as_deref())
            .filter(|s| !s.is_empty())
    }
}

/// Issue an upload grant: a presigned PUT URL, the storage key it writes to,
/// and the bucket name.
#[utoipa::path(
    get,
    path = "/upload",
    tag = "upload",
    params(UploadQuery),
    responses(
        (status = 200, description = "Upload grant issued", body = UploadGrant),
        (status = 400, description = "Missing or invalid filename", body = ErrorResponse),
        (status = 500, description = "Credential signing failed", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state, query), fields(operation = "request_upload"))]
pub async fn request_upload(
    State(state): State<Arc<AppState>>,
    Query(query): Query<UploadQuery>,
) -> Result<impl IntoResponse, HttpAppError> {
    let filename = query.normalized_filename().ok_or_else(|| {
        AppError::InvalidInput("Missing 'filename' or 'fileName' query parameter".to_string())
    })?;
    keys::validate_filename(filename)?;

    // Millisecond timestamp prefix keeps keys practically unique per issuance.
    let key = keys::upload_key(Utc::now().timestamp_millis(), filename);

    let upload_url = state
        .storage
        .presigned_put_url(
            &key,
            UPLOAD_CONTENT_TYPE,
            Duration::from_secs(UPLOAD_URL_EXPIRY_SECS),
        )
        .await?;

    tracing::info!(key = %key, filename = %filename, "Issued upload grant");

    Ok(Json(UploadGrant {
        upload_url,
        key,
        bucket: state.config.bucket().to_string(),
    }))
}
