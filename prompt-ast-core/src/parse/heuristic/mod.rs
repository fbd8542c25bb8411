//! Heuristic prompt extraction engine
//!
//! Multi-pass, pattern-driven analysis: labeled sections are split first,
//! independent inferencers fill in role, task, and output expectations,
//! the constraint aggregator merges section-derived and phrase-detected
//! candidates by source position, and the ambiguity rules run last over
//! the assembled draft. Pure and synchronous; arbitrary text always
//! yields a record, with unknown fields simply absent.

mod ambiguity;
mod constraints;
mod infer;
mod sections;

#[cfg(test)]
mod fixtures;

use serde_json::{Value, json};
use tracing::debug;

use crate::ast::PromptAst;

/// Extract a structured record from raw prompt text
pub fn parse_prompt_heuristic(text: &str) -> PromptAst {
    let raw = text.trim();
    let mut ast = PromptAst::new(raw);

    ast.role = infer::infer_role(raw);

    let sections = sections::split_labeled_sections(raw);
    debug!(count = sections.len(), "labeled sections detected");

    if let Some(context) = sections.get("context") {
        ast.context = Some(context.clone());
    }

    // Explicit task section wins over inference.
    ast.task = match sections.get("task") {
        Some(task) => Some(task.clone()),
        None => infer::infer_task(raw),
    };

    // ASCII lowercasing keeps byte offsets aligned with the source text.
    let lowered = raw.to_ascii_lowercase();

    let mut candidates = Vec::new();
    constraints::collect_section_items(&sections, &mut candidates);
    constraints::collect_phrase_matches(raw, &lowered, &mut candidates);
    ast.constraints = constraints::resolve(candidates);

    ast.output_spec.format = infer::infer_output_format(&lowered);
    ast.output_spec.structure = infer::infer_output_structure(raw);

    ast.ambiguities = ambiguity::detect(&ast, &lowered);

    ast.metadata
        .entry("extracted_by")
        .or_insert_with(|| Value::String("heuristic".to_string()));
    ast.metadata.entry("confidence").or_insert(json!(0.55));

    ast
}
