//! Ambiguity rule bank
//!
//! Runs last, over the already-assembled draft. Each rule is an
//! independent predicate contributing a fixed (or keyword-interpolated)
//! message; rules never short-circuit each other and evaluate in a fixed
//! order. Results dedupe case-insensitively, first trigger wins.

use std::collections::HashSet;

use prompt_patterns::ambiguity::{DATA_QUALIFIER, RETENTION_DETAIL, VAGUE_TASK};

use crate::ast::PromptAst;

const CONTENT_TYPES: [&str; 4] = ["blog", "article", "post", "content"];
const AUDIENCE_HINTS: [&str; 5] = ["beginner", "expert", "audience", "reader", "for"];
const DATA_VERBS: [&str; 5] = ["analyze", "clean", "visualize", "visualization", "visualisation"];
const DATA_DETAILS: [&str; 4] = ["csv", "records", "dataset", "customers"];
const MONOLITH_DETAILS: [&str; 4] = ["size", "users", "traffic", "complexity"];
const LESSON_DETAILS: [&str; 5] = ["duration", "minutes", "hour", "grade", "age"];

type Rule = fn(&PromptAst, &str) -> Option<String>;

/// Rules in evaluation order
const RULES: [Rule; 8] = [
    vague_task,
    onboarding_context,
    retention_metrics,
    monolith_scope,
    content_audience,
    data_context,
    lesson_details,
    cli_tool_context,
];

/// Detect categories of missing or vague information in the draft
pub fn detect(ast: &PromptAst, lowered: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut detected = Vec::new();
    for rule in RULES {
        if let Some(message) = rule(ast, lowered) {
            let key = message.trim().to_lowercase();
            if key.is_empty() || !seen.insert(key) {
                continue;
            }
            detected.push(message.trim().to_string());
        }
    }
    detected
}

fn vague_task(ast: &PromptAst, _lowered: &str) -> Option<String> {
    let task = ast.task.as_deref()?.to_ascii_lowercase();
    VAGUE_TASK.is_match(&task).then(|| {
        "Task is too vague - missing details about what bug, what code, what symptoms"
            .to_string()
    })
}

fn onboarding_context(ast: &PromptAst, lowered: &str) -> Option<String> {
    (lowered.contains("onboarding") && ast.context.is_none())
        .then(|| "Missing details about current onboarding process".to_string())
}

fn retention_metrics(_ast: &PromptAst, lowered: &str) -> Option<String> {
    (lowered.contains("retention")
        && lowered.contains("strategy")
        && !RETENTION_DETAIL.is_match(lowered))
        .then(|| "Missing specific retention metrics and churn reasons".to_string())
}

fn monolith_scope(_ast: &PromptAst, lowered: &str) -> Option<String> {
    ((lowered.contains("migration") || lowered.contains("monolith"))
        && !MONOLITH_DETAILS.iter().any(|word| lowered.contains(word)))
        .then(|| "Missing details about monolith size and complexity".to_string())
}

fn content_audience(_ast: &PromptAst, lowered: &str) -> Option<String> {
    // "explain" usually implies an audience already.
    (CONTENT_TYPES.iter().any(|ct| lowered.contains(ct))
        && !AUDIENCE_HINTS.iter().any(|hint| lowered.contains(hint))
        && !lowered.contains("explain"))
        .then(|| "Missing target audience specification".to_string())
}

fn data_context(ast: &PromptAst, lowered: &str) -> Option<String> {
    if !lowered.contains("data") || !DATA_VERBS.iter().any(|verb| lowered.contains(verb)) {
        return None;
    }
    if ast.context.is_some() || DATA_DETAILS.iter().any(|detail| lowered.contains(detail)) {
        return None;
    }
    let message = match DATA_QUALIFIER.captures(lowered).and_then(|caps| caps.get(1)) {
        Some(qualifier) => format!(
            "Missing context about {} data structure and volume",
            qualifier.as_str()
        ),
        None => "Missing context about data structure and volume".to_string(),
    };
    Some(message)
}

fn lesson_details(_ast: &PromptAst, lowered: &str) -> Option<String> {
    ((lowered.contains("lesson") || lowered.contains("teach"))
        && !LESSON_DETAILS.iter().any(|detail| lowered.contains(detail)))
        .then(|| "Missing class duration and student prior knowledge level".to_string())
}

fn cli_tool_context(ast: &PromptAst, lowered: &str) -> Option<String> {
    (lowered.contains("cli") && lowered.contains("tool") && ast.context.is_none())
        .then(|| "Missing context about which CLI tool and target platforms".to_string())
}
