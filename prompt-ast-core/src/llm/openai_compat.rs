//! OpenAI-compatible completion client
//!
//! Works with any service exposing the `/chat/completions` shape with
//! bearer-token authentication. Configuration comes from environment
//! variables; the request is a fixed low-temperature two-message exchange.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{CompletionProvider, prompts};
use crate::error::{Error, Result};

const PROVIDER_NAME: &str = "openai-compat";

/// Configuration for an OpenAI-compatible endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenAiCompatConfig {
    pub base_url: String,
    pub api_key: String,
    pub model: String,
    pub temperature: f32,
    pub max_tokens: usize,
    pub timeout_secs: u64,
}

impl OpenAiCompatConfig {
    /// Build configuration from the environment.
    ///
    /// `OPENAI_API_KEY` is required; `OPENAI_BASE_URL` and `OPENAI_MODEL`
    /// fall back to the public OpenAI endpoint and a small default model.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("OPENAI_API_KEY")
            .map_err(|_| Error::llm_not_configured("OPENAI_API_KEY is not set"))?;
        let base_url = std::env::var("OPENAI_BASE_URL")
            .unwrap_or_else(|_| "https://api.openai.com/v1".to_string());
        let model = std::env::var("OPENAI_MODEL").unwrap_or_else(|_| "gpt-4o-mini".to_string());

        Ok(Self { base_url, api_key, model, temperature: 0.0, max_tokens: 2048, timeout_secs: 60 })
    }
}

/// Chat message in the wire format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
    max_tokens: usize,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChatMessage,
}

/// Completion provider backed by an OpenAI-compatible chat endpoint
pub struct OpenAiCompatClient {
    client: Client,
    config: OpenAiCompatConfig,
}

impl OpenAiCompatClient {
    pub fn new(config: OpenAiCompatConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| Error::provider(PROVIDER_NAME, e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Create a client configured from environment variables
    pub fn from_env() -> Result<Self> {
        Self::new(OpenAiCompatConfig::from_env()?)
    }

    fn request_body(&self, prompt: &str) -> ChatCompletionRequest {
        ChatCompletionRequest {
            model: self.config.model.clone(),
            messages: vec![
                ChatMessage { role: "system".to_string(), content: prompts::SYSTEM_PROMPT.to_string() },
                ChatMessage { role: "user".to_string(), content: prompt.to_string() },
            ],
            temperature: self.config.temperature,
            max_tokens: self.config.max_tokens,
        }
    }
}

#[async_trait]
impl CompletionProvider for OpenAiCompatClient {
    fn name(&self) -> &str {
        PROVIDER_NAME
    }

    async fn is_available(&self) -> bool {
        !self.config.api_key.is_empty()
    }

    async fn complete(&self, prompt: &str) -> Result<String> {
        let request = self.request_body(prompt);
        debug!(model = %self.config.model, "sending chat completion request");

        let response = self
            .client
            .post(format!("{}/chat/completions", self.config.base_url))
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .json(&request)
            .send()
            .await
            .map_err(|e| Error::provider(PROVIDER_NAME, e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::provider(
                PROVIDER_NAME,
                format!("API error (status {status}): {body}"),
            ));
        }

        let parsed: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| Error::provider(PROVIDER_NAME, format!("malformed response: {e}")))?;

        parsed
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| Error::provider(PROVIDER_NAME, "response contained no choices"))
    }
}
