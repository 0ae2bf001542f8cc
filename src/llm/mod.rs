//! Completion client for hosted chat models

pub mod client;
pub mod http_client;
pub mod request;
pub mod response;

use async_trait::async_trait;
use std::sync::Arc;

pub use client::ClientConfig;
pub use http_client::ChatCompletionsClient;
pub use request::{ChatMessage, Prompt, Role};
pub use response::{Completion, CompletionError, TokenUsage};

/// Trait for completion backends - allows for different implementations
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Send a prompt and return the model's raw text
    async fn complete(&self, prompt: &Prompt) -> Result<Completion, CompletionError>;
}

#[async_trait]
impl CompletionClient for ChatCompletionsClient {
    async fn complete(&self, prompt: &Prompt) -> Result<Completion, CompletionError> {
        self.send(prompt).await
    }
}

#[async_trait]
impl<C: CompletionClient + ?Sized> CompletionClient for Arc<C> {
    async fn complete(&self, prompt: &Prompt) -> Result<Completion, CompletionError> {
        (**self).complete(prompt).await
    }
}
