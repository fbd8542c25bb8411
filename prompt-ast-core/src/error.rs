//! Error types for prompt parsing and serialization
//!
//! Strongly-typed errors for every failing operation, using thiserror for
//! automatic error trait implementations. The heuristic engine itself has
//! no error path; arbitrary text always yields a record.

use thiserror::Error;

/// Main error type for the crate
#[derive(Debug, Error)]
pub enum Error {
    /// Malformed or conflicting input (CLI arguments, unknown mode or
    /// serialization format)
    #[error("invalid input: {message}")]
    InvalidInput { message: String },

    /// A model response could not be interpreted as a structured record;
    /// carries the raw response for diagnostics
    #[error("could not interpret model response: {message}")]
    ModelResponse { message: String, raw_response: String },

    /// llm or hybrid mode requested without a configured provider
    #[error("LLM provider not configured: {message}")]
    LlmNotConfigured { message: String },

    /// A provider transport or API failure, surfaced unmodified
    #[error("provider error ({provider}): {message}")]
    Provider { provider: String, message: String },

    /// The record itself failed to serialize
    #[error("serialization error: {message}")]
    Serialization { message: String },
}

impl Error {
    /// Create an invalid-input error
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput { message: message.into() }
    }

    /// Create a model-response error carrying the offending response
    pub fn model_response(message: impl Into<String>, raw_response: impl Into<String>) -> Self {
        Self::ModelResponse { message: message.into(), raw_response: raw_response.into() }
    }

    /// Create a not-configured error
    pub fn llm_not_configured(message: impl Into<String>) -> Self {
        Self::LlmNotConfigured { message: message.into() }
    }

    /// Create a provider-specific error
    pub fn provider(provider: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Provider { provider: provider.into(), message: message.into() }
    }
}

/// Result type for crate operations
pub type Result<T> = std::result::Result<T, Error>;

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization { message: err.to_string() }
    }
}

impl From<serde_yaml::Error> for Error {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Serialization { message: err.to_string() }
    }
}
