//! Hybrid extraction: heuristic draft refined by a model pass
//!
//! Runs the heuristic engine first, then offers the draft plus the
//! original text to the model for refinement. The model's interpreted
//! output replaces the draft wholesale; there is no field-level merge.

use tracing::debug;

use crate::ast::PromptAst;
use crate::error::Result;
use crate::llm::CompletionProvider;
use crate::llm::prompts::PromptTemplates;

use super::heuristic::parse_prompt_heuristic;
use super::llm::interpret_response;

/// Parse prompt text heuristically, then replace the draft with the
/// model's refined record
pub async fn parse_prompt_hybrid(
    text: &str,
    provider: &dyn CompletionProvider,
) -> Result<PromptAst> {
    let draft = parse_prompt_heuristic(text);
    let draft_json = draft.to_json()?;
    debug!(provider = provider.name(), "requesting refinement of heuristic draft");

    let request = PromptTemplates::refinement(text, &draft_json);
    let response = provider.complete(&request).await?;

    interpret_response(text, &response, "hybrid")
}
