/// Upper bound on carried context included in a segment prompt, in characters
const CONTEXT_CLIP_CHARS: usize = 1000;

/// Upper bound on each transcript side of the QA prompt, in characters
const QA_CLIP_CHARS: usize = 2000;

/// System prompt for segment correction
pub const SEGMENT_SYSTEM_PROMPT: &str = "You are a professional transcript cleaner. \
Correct grammar and improve readability while preserving all content and speaker attribution. \
You always answer with a single JSON object and nothing else.";

/// System prompt for the final quality check
pub const QA_SYSTEM_PROMPT: &str = "You are a quality assurance expert. \
Review transcript processing quality. \
You always answer with a single JSON object and nothing else.";

/// Build the user prompt for correcting one transcript segment
pub fn build_segment_prompt(segment: &str, context: &str) -> String {
    format!(
        r#"Clean this meeting transcript segment with these requirements:

1. CORRECT GRAMMAR: Fix all grammatical errors, punctuation, and sentence structure
2. MAINTAIN SPEAKER ATTRIBUTION: Keep all speaker information intact
3. PRESERVE CONTEXT: Maintain conversation flow and meaning
4. CLEAN FORMAT: Remove filler words, but keep important content
5. STANDARDIZE SPEAKERS: Use consistent speaker naming

Previous context for continuity:
{context}

Current transcript segment to process:
{segment}

Return ONLY a JSON object in this exact format:
{{
    "processed_text": "cleaned transcript with proper formatting",
    "speakers_identified": ["Speaker 1", "Speaker 2"],
    "key_context_points": ["important topics or decisions made"],
    "processing_notes": "any notes about challenges or decisions made"
}}"#,
        context = clip(context, CONTEXT_CLIP_CHARS),
        segment = segment,
    )
}

/// Build the user prompt for the final quality check
pub fn build_qa_prompt(original: &str, processed: &str) -> String {
    format!(
        r#"Review this transcript processing result and validate quality:

Original segment:
{original}

Processed segment:
{processed}

Check for:
1. Content completeness (no information loss)
2. Speaker attribution accuracy
3. Grammar improvement
4. Context preservation
5. Formatting quality

Return ONLY a JSON object:
{{
    "quality_score": 0-100,
    "issues_found": ["list of any issues"],
    "content_loss_detected": true/false,
    "recommendations": ["improvement suggestions"]
}}"#,
        original = clip(original, QA_CLIP_CHARS),
        processed = clip(processed, QA_CLIP_CHARS),
    )
}

/// Truncate to at most `max_chars` characters, respecting UTF-8 boundaries
fn clip(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_index, _)) => &text[..byte_index],
        None => text,
    }
}
