//! Labeled section splitting
//!
//! Recognizes "Context:" / "## Task" / "1. Constraints:" style headers
//! (with alias normalization) and groups subsequent lines under the
//! active section. The scan threads an explicit current-section value
//! instead of mutating shared parser state.

use std::collections::HashMap;

use prompt_patterns::section;

/// Canonical section name → accumulated, trimmed content
pub type SectionMap = HashMap<&'static str, String>;

/// Scan text for labeled section headers.
///
/// Inline header content and subsequent non-blank lines accumulate under
/// the active canonical section until the next header. Lines before the
/// first header belong to no section; repeated headers for one name
/// append; sections that end up empty are omitted.
pub fn split_labeled_sections(text: &str) -> SectionMap {
    let mut accumulated: HashMap<&'static str, Vec<&str>> = HashMap::new();
    let mut current: Option<&'static str> = None;

    for line in text.lines() {
        let trimmed = line.trim();
        if let Some(caps) = section::HEADER.captures(trimmed) {
            let Some(label) = caps.get(1) else { continue };
            let name = section::canonical(label.as_str());
            current = Some(name);

            let entry = accumulated.entry(name).or_default();
            let inline = caps.get(2).map(|m| m.as_str().trim()).unwrap_or("");
            if !inline.is_empty() {
                entry.push(inline);
            }
        } else if let Some(name) = current {
            if !trimmed.is_empty() {
                accumulated.entry(name).or_default().push(line);
            }
        }
    }

    accumulated
        .into_iter()
        .filter(|(_, lines)| !lines.is_empty())
        .map(|(name, lines)| (name, lines.join("\n").trim().to_string()))
        .collect()
}
