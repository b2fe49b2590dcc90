//! Named constants for the analysis pipeline.

/// Maximum number of characters of extracted text forwarded to the model.
///
/// Deliberate cap bounding request cost and latency; analysis quality may
/// degrade for documents longer than this.
pub const MAX_ANALYSIS_CHARS: usize = 8_000;

/// Lifetime of a presigned upload URL, in seconds.
pub const UPLOAD_URL_EXPIRY_SECS: u64 = 300;

/// Path prefix under which all uploaded objects are stored.
pub const UPLOAD_KEY_PREFIX: &str = "uploads";

/// Content type enforced on direct uploads.
pub const UPLOAD_CONTENT_TYPE: &str = "application/pdf";
