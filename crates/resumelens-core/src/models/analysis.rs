//! Structured analysis record and the /analyze request/response envelope.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Experience level assessed by the model. The wire form uses the exact labels
/// the model is instructed to emit, including the hyphenated "Mid-Level".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum ExperienceLevel {
    Junior,
    #[serde(rename = "Mid-Level")]
    MidLevel,
    Senior,
    Expert,
}

/// Structured resume evaluation.
///
/// Every field is required; a model response missing any of them fails
/// deserialization as a whole and is replaced by the fallback record. Partial
/// repair is never attempted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResumeAnalysis {
    /// Overall quality score, 1-10
    pub overall_score: u8,
    /// Applicant-tracking-system friendliness score, 1-10
    pub ats_score: u8,
    pub experience_level: ExperienceLevel,
    pub skills: Vec<String>,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub suggestions: Vec<String>,
    /// 2-3 sentence summary of the candidate
    pub summary: String,
}

/// Request body for POST /analyze.
///
/// Fields are optional at the serde level so that missing parameters produce a
/// ValidationError response instead of a deserialization rejection.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct AnalyzeRequest {
    pub bucket: Option<String>,
    pub key: Option<String>,
}

/// Success response body for POST /analyze.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeResponse {
    pub success: bool,
    pub analysis: ResumeAnalysis,
    /// Whitespace-token count of the full extracted text (pre-truncation)
    pub word_count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analysis_wire_format_is_camel_case() {
        let analysis = ResumeAnalysis {
            overall_score: 8,
            ats_score: 7,
            experience_level: ExperienceLevel::Senior,
            skills: vec!["Rust".to_string()],
            strengths: vec!["Clear impact statements".to_string()],
            weaknesses: vec![],
            suggestions: vec![],
            summary: "Strong systems engineer.".to_string(),
        };
        let json = serde_json::to_value(&analysis).expect("serialize");
        assert_eq!(json["overallScore"], 8);
        assert_eq!(json["atsScore"], 7);
        assert_eq!(json["experienceLevel"], "Senior");
        assert!(json.get("overall_score").is_none());
    }

    #[test]
    fn test_mid_level_label_round_trips() {
        let json = serde_json::to_string(&ExperienceLevel::MidLevel).expect("serialize");
        assert_eq!(json, "\"Mid-Level\"");
        let parsed: ExperienceLevel = serde_json::from_str("\"Mid-Level\"").expect("deserialize");
        assert_eq!(parsed, ExperienceLevel::MidLevel);
    }

    #[test]
    fn test_missing_field_fails_whole_record() {
        // No partial repair: a record without `summary` must not deserialize.
        let raw = r#"{
            "overallScore": 7, "atsScore": 6, "experienceLevel": "Junior",
            "skills": [], "strengths": [], "weaknesses": [], "suggestions": []
        }"#;
        assert!(serde_json::from_str::<ResumeAnalysis>(raw).is_err());
    }

    #[test]
    fn test_wrongly_typed_score_fails() {
        let raw = r#"{
            "overallScore": "seven", "atsScore": 6, "experienceLevel": "Junior",
            "skills": [], "strengths": [], "weaknesses": [], "suggestions": [],
            "summary": "x"
        }"#;
        assert!(serde_json::from_str::<ResumeAnalysis>(raw).is_err());
    }
}
