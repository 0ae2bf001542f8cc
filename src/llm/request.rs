//! Typed chat requests sent to the completion endpoint

use serde::{Deserialize, Serialize};

/// Author of a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

/// A single message in a chat request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// A prompt ready to send to a model
///
/// The system message carries the instructions. The human message carries
/// the request itself; stages that embed everything in the instructions
/// leave it empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prompt {
    /// System instructions
    pub system: String,

    /// Human request (if any)
    #[serde(default)]
    pub human: Option<String>,
}

impl Prompt {
    /// Create a prompt with only system instructions
    pub fn new(system: impl Into<String>) -> Self {
        Self {
            system: system.into(),
            human: None,
        }
    }

    /// Attach a human request
    pub fn with_human(mut self, human: impl Into<String>) -> Self {
        self.human = Some(human.into());
        self
    }

    /// Messages in the order they are sent: system first, then human
    pub fn messages(&self) -> Vec<ChatMessage> {
        let mut messages = vec![ChatMessage::system(self.system.clone())];
        if let Some(human) = &self.human {
            messages.push(ChatMessage::user(human.clone()));
        }
        messages
    }

    /// Total characters across all messages
    pub fn len(&self) -> usize {
        self.system.len() + self.human.as_ref().map_or(0, String::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Body of a `POST /chat/completions` request
#[derive(Debug, Clone, Serialize)]
pub(crate) struct ChatCompletionRequest<'a> {
    pub model: &'a str,
    pub messages: Vec<ChatMessage>,
    pub temperature: f32,
}
