use crate::error::LlmError;
use crate::models::{CorrectedSegment, QaAssessment};

/// Parse the model's segment correction response.
///
/// Missing fields default to empty values; malformed JSON is an error the
/// dispatcher maps to the per-chunk fallback.
pub fn parse_segment_response(raw: &str) -> Result<CorrectedSegment, LlmError> {
    Ok(serde_json::from_str(extract_json(raw))?)
}

/// Parse the model's quality check response
pub fn parse_qa_response(raw: &str) -> Result<QaAssessment, LlmError> {
    Ok(serde_json::from_str(extract_json(raw))?)
}

/// Strip a markdown code fence the model may have wrapped the JSON in
fn extract_json(raw: &str) -> &str {
    let trimmed = raw.trim();
    let trimmed = trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .unwrap_or(trimmed);
    trimmed.strip_suffix("```").unwrap_or(trimmed).trim()
}
