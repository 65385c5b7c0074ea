//! # OpenRouter client
//!
//! Defines the [`CompletionClient`] trait, the chat-completions wire types, and
//! a reqwest-based [`OpenRouterClient`] implementation. One request per call,
//! no retry; a missing or whitespace-only `choices[0].message.content` is
//! reported as `Ok(None)`, not as an error.

use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

mod client;

pub use client::{OpenRouterClient, DEFAULT_BASE_URL, DEFAULT_MODEL};

/// Role of a chat message in the completion request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    System,
    User,
    Assistant,
}

/// A single chat message (role + content) in API wire format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: MessageRole,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
        }
    }
}

/// Request body for `POST {base_url}/chat/completions`.
#[derive(Debug, Serialize)]
pub struct CompletionRequest<'a> {
    pub model: &'a str,
    pub messages: &'a [ChatMessage],
}

/// Response body; every level defaults so partial or empty JSON still parses.
#[derive(Debug, Default, Deserialize)]
pub struct CompletionResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Choice {
    #[serde(default)]
    pub message: ResponseMessage,
}

#[derive(Debug, Default, Deserialize)]
pub struct ResponseMessage {
    #[serde(default)]
    pub content: Option<String>,
}

/// Extracts the first choice's content, trimmed. Returns None when any level
/// of the `choices[0].message.content` path is absent or the content is
/// whitespace-only.
pub fn first_choice_content(response: &CompletionResponse) -> Option<String> {
    response
        .choices
        .first()
        .and_then(|choice| choice.message.content.as_deref())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Completion client interface: one stateless request, reply text or None.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Issues one completion request for the given messages. `Ok(None)` means
    /// the provider answered but produced no usable text; `Err` covers
    /// transport failures, non-2xx statuses, and malformed JSON.
    async fn complete(&self, messages: Vec<ChatMessage>) -> Result<Option<String>>;
}
