//! Reqwest implementation of [`CompletionClient`] for the OpenRouter API.
//!
//! External interactions: `POST {base_url}/chat/completions` with bearer auth
//! and the `HTTP-Referer` / `X-Title` attribution headers. A fresh HTTP client
//! is created per request; no timeout or retry is configured.

use anyhow::{Context, Result};
use async_trait::async_trait;
use tracing::{debug, instrument};

use crate::{first_choice_content, ChatMessage, CompletionClient, CompletionRequest, CompletionResponse};

pub const DEFAULT_BASE_URL: &str = "https://openrouter.ai/api/v1";
pub const DEFAULT_MODEL: &str = "qwen/qwq-32b:free";

/// OpenRouter chat-completions client.
#[derive(Debug, Clone)]
pub struct OpenRouterClient {
    api_key: String,
    base_url: String,
    model: String,
    referer: String,
    title: String,
}

impl OpenRouterClient {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            referer: String::new(),
            title: String::new(),
        }
    }

    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    pub fn with_model(mut self, model: String) -> Self {
        self.model = model;
        self
    }

    /// Sets the attribution headers OpenRouter uses to identify the calling
    /// application (HTTP-Referer and X-Title).
    pub fn with_attribution(mut self, referer: String, title: String) -> Self {
        self.referer = referer;
        self.title = title;
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl CompletionClient for OpenRouterClient {
    #[instrument(skip(self, messages), fields(model = %self.model))]
    async fn complete(&self, messages: Vec<ChatMessage>) -> Result<Option<String>> {
        let request = CompletionRequest {
            model: &self.model,
            messages: &messages,
        };

        // Fresh session per request, torn down when this call returns.
        let client = reqwest::Client::new();
        let response = client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .header("HTTP-Referer", &self.referer)
            .header("X-Title", &self.title)
            .json(&request)
            .send()
            .await
            .context("Completion request failed")?
            .error_for_status()
            .context("Completion request returned error status")?;

        let body: CompletionResponse = response
            .json()
            .await
            .context("Completion response was not valid JSON")?;

        let content = first_choice_content(&body);
        debug!(
            choices = body.choices.len(),
            has_content = content.is_some(),
            "Completion response received"
        );
        Ok(content)
    }
}
