//! PDF text extraction and text shaping helpers.

use crate::error::AnalysisError;

/// Extract plain text from PDF bytes.
///
/// Any parse failure is terminal; no partial text is forwarded.
pub fn extract_text(data: &[u8]) -> Result<String, AnalysisError> {
    pdf_extract::extract_text_from_mem(data).map_err(|e| AnalysisError::Extraction(e.to_string()))
}

/// Truncate `text` to at most `max_chars` characters (Unicode scalar values),
/// never splitting a character.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_index, _)) => &text[..byte_index],
        None => text,
    }
}

/// Count whitespace-separated tokens.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_rejects_non_pdf() {
        let err = extract_text(b"this is definitely not a pdf").unwrap_err();
        assert!(matches!(err, AnalysisError::Extraction(_)));
    }

    #[test]
    fn test_truncate_shorter_text_untouched() {
        assert_eq!(truncate_chars("short", 8_000), "short");
    }

    #[test]
    fn test_truncate_at_exact_count() {
        let text = "a".repeat(10);
        assert_eq!(truncate_chars(&text, 10), text);
        assert_eq!(truncate_chars(&text, 4), "aaaa");
    }

    #[test]
    fn test_truncate_counts_chars_not_bytes() {
        // Four characters, twelve bytes; a byte-based cut at 4 would split one.
        let text = "日本語文";
        assert_eq!(truncate_chars(text, 2), "日本");
        assert_eq!(truncate_chars(text, 4), text);
    }

    #[test]
    fn test_word_count() {
        assert_eq!(word_count("John Doe\nSenior Engineer\t10 years"), 6);
        assert_eq!(word_count("   "), 0);
        assert_eq!(word_count(""), 0);
    }
}
