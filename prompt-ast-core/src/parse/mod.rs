//! Prompt parsing entry points and mode dispatch

pub mod heuristic;
pub mod hybrid;
pub mod llm;

pub use heuristic::parse_prompt_heuristic;
pub use hybrid::parse_prompt_hybrid;
pub use llm::parse_prompt_llm;

use std::fmt;
use std::str::FromStr;

use crate::ast::PromptAst;
use crate::error::{Error, Result};
use crate::llm::CompletionProvider;

/// Extraction mode selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Heuristic,
    Llm,
    Hybrid,
}

impl FromStr for Mode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "heuristic" => Ok(Self::Heuristic),
            "llm" => Ok(Self::Llm),
            "hybrid" => Ok(Self::Hybrid),
            other => Err(Error::invalid_input(format!(
                "unknown mode '{other}', expected one of: heuristic, llm, hybrid"
            ))),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Heuristic => write!(f, "heuristic"),
            Self::Llm => write!(f, "llm"),
            Self::Hybrid => write!(f, "hybrid"),
        }
    }
}

/// Parse prompt text in the requested mode.
///
/// Heuristic mode needs no provider; llm and hybrid modes fail with
/// [`Error::LlmNotConfigured`] when none is supplied. Model-path failures
/// are surfaced to the caller unmodified, never downgraded to heuristic
/// output.
pub async fn parse_prompt(
    text: &str,
    mode: Mode,
    provider: Option<&dyn CompletionProvider>,
) -> Result<PromptAst> {
    match mode {
        Mode::Heuristic => Ok(parse_prompt_heuristic(text)),
        Mode::Llm => {
            let provider = provider
                .ok_or_else(|| Error::llm_not_configured("llm mode requires a provider"))?;
            llm::parse_prompt_llm(text, provider).await
        }
        Mode::Hybrid => {
            let provider = provider
                .ok_or_else(|| Error::llm_not_configured("hybrid mode requires a provider"))?;
            hybrid::parse_prompt_hybrid(text, provider).await
        }
    }
}
