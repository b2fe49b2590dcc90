//! Model response validation and the deterministic fallback record.
//!
//! The model call is modeled as returning a tagged outcome so the fallback
//! construction stays a pure function, independently testable from the I/O
//! path.

use resumelens_core::models::{ExperienceLevel, ResumeAnalysis};

/// Result of validating the model's textual response against the schema.
#[derive(Debug, Clone, PartialEq)]
pub enum ModelOutcome {
    /// The response conformed to the schema in full.
    Parsed(ResumeAnalysis),
    /// The response was malformed JSON or missed required structure. Carries
    /// the raw text for logging.
    Unparseable(String),
}

/// Parse the model's textual response. Any failure yields `Unparseable`;
/// partial repair is never attempted.
pub fn parse_analysis(raw: &str) -> ModelOutcome {
    match serde_json::from_str::<ResumeAnalysis>(raw) {
        Ok(analysis) => ModelOutcome::Parsed(analysis),
        Err(_) => ModelOutcome::Unparseable(raw.to_string()),
    }
}

/// The complete, deterministic fallback record substituted when the model's
/// output cannot be validated. Fixed placeholder content; callers always
/// receive a structurally valid result.
pub fn fallback_analysis() -> ResumeAnalysis {
    ResumeAnalysis {
        overall_score: 7,
        ats_score: 6,
        experience_level: ExperienceLevel::MidLevel,
        skills: vec!["Communication".to_string(), "Problem Solving".to_string()],
        strengths: vec![
            "Well-formatted resume".to_string(),
            "Clear experience section".to_string(),
        ],
        weaknesses: vec!["Could add more quantifiable achievements".to_string()],
        suggestions: vec![
            "Add metrics to demonstrate impact".to_string(),
            "Include relevant keywords".to_string(),
        ],
        summary: "Candidate shows solid experience with room for improvement in presentation."
            .to_string(),
    }
}
