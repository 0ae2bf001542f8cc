//! HTTP client for OpenAI-compatible `/chat/completions` endpoints

use crate::llm::{
    client::ClientConfig,
    request::{ChatCompletionRequest, Prompt},
    response::{error_message, ChatCompletionResponse, Completion, CompletionError},
};
use std::fmt;
use std::time::Duration;
use tracing::debug;

/// Client that sends prompts to a hosted chat-completion model
#[derive(Clone)]
pub struct ChatCompletionsClient {
    http: reqwest::Client,
    config: ClientConfig,
    api_key: String,
}

// The key is only shown through the masked `ClientConfig` output.
impl fmt::Debug for ChatCompletionsClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChatCompletionsClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl ChatCompletionsClient {
    /// Create a new client
    ///
    /// # Errors
    /// Returns `CompletionError::MissingCredential` if the config has no API
    /// key, or `CompletionError::Transport` if the HTTP client cannot be built.
    pub fn new(config: ClientConfig) -> Result<Self, CompletionError> {
        let api_key = config
            .api_key
            .clone()
            .filter(|key| !key.trim().is_empty())
            .ok_or(CompletionError::MissingCredential)?;

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(CompletionError::Transport)?;

        Ok(Self {
            http,
            config,
            api_key,
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Send a prompt and return the first choice's text
    ///
    /// # Errors
    /// Returns `CompletionError` if:
    /// - The request cannot be sent or times out
    /// - The provider answers with a non-success status
    /// - The body has no choices or cannot be parsed
    pub async fn send(&self, prompt: &Prompt) -> Result<Completion, CompletionError> {
        let url = self.config.completions_url();
        let body = ChatCompletionRequest {
            model: &self.config.model,
            messages: prompt.messages(),
            temperature: self.config.temperature,
        };

        debug!(
            "Sending {} messages ({} chars) to {} with model {}",
            body.messages.len(),
            prompt.len(),
            url,
            self.config.model
        );

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let message = error_message(&text);
            debug!("Completion request failed with {}: {}", status, message);
            return Err(CompletionError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let text = response.text().await.map_err(|e| self.transport_error(e))?;
        let parsed: ChatCompletionResponse = serde_json::from_str(&text)
            .map_err(|e| CompletionError::MalformedResponse(e.to_string()))?;

        let content = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| {
                CompletionError::MalformedResponse("response contained no message content".to_string())
            })?;

        debug!("Completion returned {} bytes", content.len());

        Ok(Completion {
            content,
            model: parsed.model.unwrap_or_else(|| self.config.model.clone()),
            usage: parsed.usage,
        })
    }

    fn transport_error(&self, error: reqwest::Error) -> CompletionError {
        if error.is_timeout() {
            CompletionError::Timeout(self.config.timeout_secs)
        } else {
            CompletionError::Transport(error)
        }
    }
}
