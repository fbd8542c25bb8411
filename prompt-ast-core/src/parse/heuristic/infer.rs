//! Field inferencers for role, task, and output expectations
//!
//! Each inferencer runs independently over the raw (or lowercased) text
//! and degrades to "field absent" rather than failing.

use prompt_patterns::{format, role, structure, task};

use crate::ast::OutputFormat;

/// Try role phrase patterns in priority order.
///
/// The first pattern in the bank that matches anywhere wins, regardless
/// of position; within a pattern, the first occurrence wins.
pub fn infer_role(text: &str) -> Option<String> {
    for pattern in role::patterns() {
        if let Some(caps) = pattern.captures(text) {
            if let Some(m) = caps.name("role") {
                let role = m.as_str().trim().trim_end_matches('.').to_string();
                if !role.is_empty() {
                    return Some(role);
                }
            }
        }
    }
    None
}

/// Fallback task inference: the first sentence that is not purely
/// persona-setting, with any leading "As a(n) ...," clause removed.
pub fn infer_task(text: &str) -> Option<String> {
    for sentence in split_sentences(text.trim()) {
        let sentence = sentence.trim();
        if sentence.is_empty() {
            continue;
        }
        let lower = sentence.to_ascii_lowercase();
        if lower.contains("act as") || lower.contains("you are") {
            continue;
        }
        if task::AS_PREFIX.is_match(sentence) {
            let stripped = task::AS_CLAUSE.replace(sentence, "");
            if !stripped.is_empty() {
                return Some(stripped.into_owned());
            }
        }
        return Some(sentence.to_string());
    }
    None
}

/// Split on sentence-ending punctuation directly followed by whitespace,
/// keeping the punctuation with the preceding sentence.
fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((i, ch)) = chars.next() {
        if !matches!(ch, '.' | '!' | '?') {
            continue;
        }
        let Some(&(_, next)) = chars.peek() else { continue };
        if !next.is_whitespace() {
            continue;
        }
        sentences.push(&text[start..i + ch.len_utf8()]);
        while let Some(&(_, ws)) = chars.peek() {
            if !ws.is_whitespace() {
                break;
            }
            chars.next();
        }
        start = chars.peek().map(|&(j, _)| j).unwrap_or(text.len());
    }

    if start < text.len() {
        sentences.push(&text[start..]);
    }
    sentences
}

/// Lowercased full-text search in fixed priority order
pub fn infer_output_format(lowered: &str) -> Option<OutputFormat> {
    if format::JSON.is_match(lowered) {
        Some(OutputFormat::Json)
    } else if format::YAML.is_match(lowered) {
        Some(OutputFormat::Yaml)
    } else if format::MARKDOWN.is_match(lowered) {
        Some(OutputFormat::Markdown)
    } else if format::TABLE.is_match(lowered) {
        Some(OutputFormat::Table)
    } else {
        None
    }
}

/// Extract an explicit output structure list.
///
/// A "(with) sections: A, B, C" list wins and suppresses the
/// "with:/include:" form; the latter is accepted only when every comma
/// item looks like a short capitalized label.
pub fn infer_output_structure(text: &str) -> Vec<String> {
    if let Some(caps) = structure::SECTIONS_LIST.captures(text) {
        let list = caps.get(1).map(|m| m.as_str()).unwrap_or("");
        return split_labels(list);
    }

    if let Some(caps) = structure::WITH_INCLUDE_LIST.captures(text) {
        let labels = split_labels(caps.get(1).map(|m| m.as_str()).unwrap_or(""));
        if !labels.is_empty() && labels.iter().all(|l| looks_like_section_label(l)) {
            return labels;
        }
    }

    Vec::new()
}

fn split_labels(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(String::from)
        .collect()
}

/// At most four words, starting with an uppercase character.
fn looks_like_section_label(label: &str) -> bool {
    label.split_whitespace().count() <= 4
        && label.chars().next().is_some_and(char::is_uppercase)
}
