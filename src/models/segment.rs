use serde::{Deserialize, Serialize};

/// Structured segment output returned by the language model.
///
/// Every field defaults when missing so a sparse but valid JSON response
/// never produces partial garbage; an empty `processed_text` is treated by
/// the dispatcher as "keep the original chunk text".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CorrectedSegment {
    /// Cleaned transcript text for the segment
    #[serde(default)]
    pub processed_text: String,
    /// Standardized speaker names found in the segment
    #[serde(default)]
    pub speakers_identified: Vec<String>,
    /// Topics or decisions worth carrying forward as context
    #[serde(default)]
    pub key_context_points: Vec<String>,
    /// Free-form notes from the model about its edits
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub processing_notes: Option<String>,
}

impl CorrectedSegment {
    /// Whether the model returned any usable cleaned text
    pub fn has_text(&self) -> bool {
        !self.processed_text.trim().is_empty()
    }
}
