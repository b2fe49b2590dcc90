//! Analysis orchestrator endpoint.

use crate::error::{ErrorResponse, HttpAppError, ValidatedJson};
use crate::state::AppState;
use axum::{extract::State, response::IntoResponse, Json};
use resumelens_core::models::{AnalyzeRequest, AnalyzeResponse};
use resumelens_core::AppError;
use std::sync::Arc;

/// Run the full analysis pipeline for one stored object.
///
/// Terminal dependency failures surface as opaque 500s; a malformed model
/// response does not fail the request (the deterministic fallback record is
/// substituted inside the service).
#[utoipa::path(
    post,
    path = "/analyze",
    tag = "analyze",
    request_body = AnalyzeRequest,
    responses(
        (status = 200, description = "Analysis complete", body = AnalyzeResponse),
        (status = 400, description = "Missing bucket or key", body = ErrorResponse),
        (status = 500, description = "Retrieval, extraction, or model failure", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state, request), fields(operation = "analyze_resume"))]
pub async fn analyze_resume(
    State(state): State<Arc<AppState>>,
    ValidatedJson(request): ValidatedJson<AnalyzeRequest>,
) -> Result<impl IntoResponse, HttpAppError> {
    let bucket = request
        .bucket
        .as_deref()
        .filter(|s| !s.is_empty())
        .ok_or_else(|| AppError::InvalidInput("Missing 'bucket' parameter".to_string()))?;
    let key = request
        .key
        .as_deref()
        .filter(|s| !s.is_empty())
        .ok_or_else(|| AppError::InvalidInput("Missing 'key' parameter".to_string()))?;

    // The service is bound to one container; refuse to read from any other.
    if bucket != state.config.bucket() {
        return Err(HttpAppError(AppError::InvalidInput(format!(
            "Unknown bucket: {}",
            bucket
        ))));
    }

    tracing::info!(bucket = %bucket, key = %key, "Analyzing stored resume");

    let output = state.analysis.analyze(key).await?;

    Ok(Json(AnalyzeResponse {
        success: true,
        analysis: output.analysis,
        word_count: output.word_count,
    }))
}
