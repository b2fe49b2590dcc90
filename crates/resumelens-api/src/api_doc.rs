//! OpenAPI documentation.

use utoipa::OpenApi;

use crate::error;
use crate::handlers;
use resumelens_core::models;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Resumelens API",
        version = "0.1.0",
        description = "Resume analysis pipeline: presigned direct-to-storage PDF uploads and \
                       model-backed structured evaluation. Files never pass through the API tier."
    ),
    paths(
        handlers::upload::request_upload,
        handlers::analyze::analyze_resume,
        handlers::health::health_check,
    ),
    components(schemas(
        models::UploadGrant,
        models::AnalyzeRequest,
        models::AnalyzeResponse,
        models::ResumeAnalysis,
        models::ExperienceLevel,
        error::ErrorResponse,
    )),
    tags(
        (name = "upload", description = "Upload grant issuance"),
        (name = "analyze", description = "Document analysis"),
        (name = "health", description = "Service health")
    )
)]
pub struct ApiDoc;
