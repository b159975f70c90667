use reqwest::StatusCode;
use thiserror::Error;

/// Errors that can occur at the language model boundary.
///
/// The dispatcher treats every variant the same way: the affected chunk
/// falls back to its original text and the run continues.
#[derive(Debug, Error)]
pub enum LlmError {
    /// Request never reached the API or the response body could not be read
    #[error("request to language model failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// API answered with a non-success status
    #[error("language model returned {status}: {body}")]
    Api { status: StatusCode, body: String },
    /// Response carried no text content block
    #[error("no text content in model response")]
    EmptyResponse,
    /// Response text was not the expected JSON shape
    #[error("failed to parse model response as JSON: {0}")]
    Parse(#[from] serde_json::Error),
}
