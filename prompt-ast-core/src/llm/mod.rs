//! LLM collaborator integration
//!
//! The parsing paths treat a language model as an opaque text-completion
//! capability: one request string in, one response string out. This module
//! defines that capability and its OpenAI-compatible transport.

pub mod mock;
pub mod openai_compat;
pub mod prompts;

pub use openai_compat::{OpenAiCompatClient, OpenAiCompatConfig};

use async_trait::async_trait;

use crate::error::Result;

/// Opaque text-completion capability
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Provider name for diagnostics
    fn name(&self) -> &str;

    /// Whether the provider is configured and usable
    async fn is_available(&self) -> bool;

    /// Complete a single request string into a response string
    async fn complete(&self, prompt: &str) -> Result<String>;
}
