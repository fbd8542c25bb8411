//! Model-backed prompt parsing
//!
//! Sends the raw text to a completion provider and interprets the response
//! as a structured record. The interpreter tolerates prose around the JSON
//! payload but never returns a partial record: any parse or schema failure
//! surfaces as [`Error::ModelResponse`] carrying the raw response.

use serde_json::Value;
use tracing::debug;

use crate::ast::PromptAst;
use crate::error::{Error, Result};
use crate::llm::CompletionProvider;
use crate::llm::prompts::PromptTemplates;

/// Parse prompt text by delegating extraction to a completion provider
pub async fn parse_prompt_llm(text: &str, provider: &dyn CompletionProvider) -> Result<PromptAst> {
    let request = PromptTemplates::extraction(text);
    let response = provider.complete(&request).await?;
    debug!(provider = provider.name(), bytes = response.len(), "interpreting model response");
    interpret_response(text, &response, "llm")
}

/// Validate and adapt a model response into a record.
///
/// `default_producer` fills `metadata.extracted_by` when the response
/// omits it. The record's `raw` is always the caller's input text, not
/// whatever the model echoed back.
pub(crate) fn interpret_response(
    text: &str,
    response: &str,
    default_producer: &str,
) -> Result<PromptAst> {
    let object = extract_json_object(response)
        .ok_or_else(|| Error::model_response("no JSON object in response", response))?;

    let mut ast: PromptAst = serde_json::from_str(object)
        .map_err(|e| Error::model_response(format!("schema validation failed: {e}"), response))?;

    ast.raw = text.to_string();
    ast.metadata
        .entry("extracted_by")
        .or_insert_with(|| Value::String(default_producer.to_string()));

    Ok(ast)
}

/// Find the first balanced JSON object substring, honoring string
/// literals and escape sequences.
fn extract_json_object(text: &str) -> Option<&str> {
    let mut search_from = 0;
    while let Some(offset) = text[search_from..].find('{') {
        let start = search_from + offset;
        if let Some(len) = balanced_object_len(&text[start..]) {
            return Some(&text[start..start + len]);
        }
        search_from = start + 1;
    }
    None
}

/// Length of the balanced object starting at the opening brace, if any
fn balanced_object_len(text: &str) -> Option<usize> {
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (i, ch) in text.char_indices() {
        if in_string {
            if escaped {
                escaped = false;
            } else if ch == '\\' {
                escaped = true;
            } else if ch == '"' {
                in_string = false;
            }
            continue;
        }
        match ch {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(i + ch.len_utf8());
                }
            }
            _ => {}
        }
    }
    None
}
