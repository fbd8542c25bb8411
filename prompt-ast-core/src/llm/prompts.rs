//! Prompt templates for the model-backed parsing paths

/// System prompt sent with every completion request
pub const SYSTEM_PROMPT: &str = "You are a precise prompt-analysis engine. \
     You convert free-form prompt text into a structured JSON record and \
     respond with JSON only, no surrounding prose.";

/// Templates for extraction and refinement requests
pub struct PromptTemplates;

impl PromptTemplates {
    /// Request a structured extraction of raw prompt text
    pub fn extraction(text: &str) -> String {
        format!(
            "Extract a structured representation of the prompt below. \
             Respond with a single JSON object with exactly these fields: \
             version (string), raw (string), role (string or null), \
             context (string or null), task (string or null), \
             constraints (array of strings), assumptions (array of strings), \
             ambiguities (array of strings), output_spec (object with \
             format, structure, language), metadata (object).\n\n\
             PROMPT:\n{text}\n\n\
             JSON:"
        )
    }

    /// Request a refinement of a heuristic draft
    pub fn refinement(text: &str, draft_json: &str) -> String {
        format!(
            "Refine this draft analysis of a prompt. Correct wrong fields, \
             fill in missing ones, keep the same JSON schema, and return \
             only the refined JSON object.\n\n\
             ORIGINAL PROMPT:\n{text}\n\n\
             CURRENT AST JSON:\n{draft_json}\n\n\
             REFINED JSON:"
        )
    }
}
