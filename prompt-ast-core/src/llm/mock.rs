//! Mock completion provider for testing
//!
//! Scripted provider that returns a fixed response and records every
//! request it receives. Not available in production builds.

#![cfg(test)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use super::CompletionProvider;
use crate::error::{Error, Result};

/// Scripted completion provider
#[derive(Clone)]
pub struct MockProvider {
    response: Option<String>,
    prompts: Arc<Mutex<Vec<String>>>,
}

impl MockProvider {
    /// Create a provider that always returns the given response
    pub fn new(response: impl Into<String>) -> Self {
        Self { response: Some(response.into()), prompts: Arc::new(Mutex::new(Vec::new())) }
    }

    /// Create a provider whose completions always fail
    pub fn failing() -> Self {
        Self { response: None, prompts: Arc::new(Mutex::new(Vec::new())) }
    }

    /// Requests received so far
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl CompletionProvider for MockProvider {
    fn name(&self) -> &str {
        "mock"
    }

    async fn is_available(&self) -> bool {
        self.response.is_some()
    }

    async fn complete(&self, prompt: &str) -> Result<String> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.response
            .clone()
            .ok_or_else(|| Error::provider("mock", "scripted failure"))
    }
}
