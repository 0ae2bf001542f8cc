//! Completion response and error types

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error types for completion requests
#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("No API key configured")]
    MissingCredential,

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Timeout after {0} seconds")]
    Timeout(u64),

    #[error("Transport error: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

/// Text returned by the model for one request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Completion {
    /// The raw completion text
    pub content: String,

    /// Model that produced the completion, as reported by the provider
    pub model: String,

    /// Token usage information (if available)
    pub usage: Option<TokenUsage>,
}

impl Completion {
    /// Create a completion with no usage information
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            model: String::new(),
            usage: None,
        }
    }
}

/// Token usage information
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TokenUsage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

/// Body of a successful `/chat/completions` response
#[derive(Debug, Deserialize)]
pub(crate) struct ChatCompletionResponse {
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub choices: Vec<Choice>,
    #[serde(default)]
    pub usage: Option<TokenUsage>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Choice {
    pub message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ResponseMessage {
    #[serde(default)]
    pub content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// Pull a readable message out of an error response body
///
/// Providers wrap errors as `{"error": {"message": ...}}`; anything else is
/// returned trimmed as-is.
pub(crate) fn error_message(body: &str) -> String {
    match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(envelope) => envelope.error.message,
        Err(_) => body.trim().to_string(),
    }
}
