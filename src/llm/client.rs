use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::error::LlmError;
use crate::llm::prompts::{
    build_qa_prompt, build_segment_prompt, QA_SYSTEM_PROMPT, SEGMENT_SYSTEM_PROMPT,
};
use crate::llm::response::{parse_qa_response, parse_segment_response};
use crate::models::{CorrectedSegment, QaReport};

/// Default model used when none is configured
pub const DEFAULT_MODEL: &str = "claude-sonnet-4-20250514";

/// Configuration for the language model client
#[derive(Debug, Clone)]
pub struct LlmConfig {
    /// API key (from ANTHROPIC_API_KEY env var)
    pub api_key: String,
    /// Model to use
    pub model: String,
    /// Temperature (0-1, lower = more deterministic)
    pub temperature: f64,
    /// Maximum tokens in response
    pub max_tokens: u32,
}

impl LlmConfig {
    /// Create config from environment variables
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("ANTHROPIC_API_KEY")
            .context("ANTHROPIC_API_KEY environment variable not set")?;

        Ok(Self::new(api_key, DEFAULT_MODEL.to_string()))
    }

    /// Create with custom settings
    pub fn new(api_key: String, model: String) -> Self {
        Self {
            api_key,
            model,
            temperature: 0.1,
            max_tokens: 4096,
        }
    }
}

/// Chunk-level language model operations consumed by the pipeline.
///
/// Implementations must not panic across this boundary: every failure is
/// reported as an `LlmError` value so the caller can fall back per chunk.
#[async_trait]
pub trait LanguageModel: Send + Sync {
    /// Correct grammar and identify speakers in one transcript segment,
    /// given recent context from preceding segments
    async fn correct_segment(
        &self,
        segment: &str,
        context: &str,
    ) -> Result<CorrectedSegment, LlmError>;

    /// Judge the processed transcript against the original
    async fn quality_check(&self, original: &str, processed: &str)
        -> Result<QaReport, LlmError>;
}

/// Anthropic Messages API client
pub struct LlmClient {
    client: Client,
    config: LlmConfig,
}

impl LlmClient {
    pub fn new(config: LlmConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    /// Send a message to the model and get the text response
    pub async fn send_message(&self, system: &str, user: &str) -> Result<String, LlmError> {
        let request = MessagesRequest {
            model: self.config.model.clone(),
            max_tokens: self.config.max_tokens,
            temperature: Some(self.config.temperature),
            system: Some(system.to_string()),
            messages: vec![Message {
                role: "user".to_string(),
                content: user.to_string(),
            }],
        };

        let response = self
            .client
            .post("https://api.anthropic.com/v1/messages")
            .header("x-api-key", &self.config.api_key)
            .header("anthropic-version", "2023-06-01")
            .header("content-type", "application/json")
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(LlmError::Api { status, body });
        }

        let response: MessagesResponse = response.json().await?;

        // Extract text from the first text content block
        response
            .content
            .iter()
            .find(|c| c.content_type == "text")
            .map(|c| c.text.clone())
            .ok_or(LlmError::EmptyResponse)
    }
}

#[async_trait]
impl LanguageModel for LlmClient {
    async fn correct_segment(
        &self,
        segment: &str,
        context: &str,
    ) -> Result<CorrectedSegment, LlmError> {
        let prompt = build_segment_prompt(segment, context);
        let raw = self.send_message(SEGMENT_SYSTEM_PROMPT, &prompt).await?;
        parse_segment_response(&raw)
    }

    async fn quality_check(
        &self,
        original: &str,
        processed: &str,
    ) -> Result<QaReport, LlmError> {
        let prompt = build_qa_prompt(original, processed);
        let raw = self.send_message(QA_SYSTEM_PROMPT, &prompt).await?;
        parse_qa_response(&raw).map(QaReport::from)
    }
}

#[derive(Debug, Serialize)]
struct MessagesRequest {
    model: String,
    max_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    system: Option<String>,
    messages: Vec<Message>,
}

#[derive(Debug, Serialize)]
struct Message {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct MessagesResponse {
    content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    content_type: String,
    #[serde(default)]
    text: String,
}
