//! Constraint aggregation
//!
//! Candidates come from explicit section content and from a bank of
//! phrase detectors, each tagged with the byte offset of its trigger in
//! the source text. Section-derived items carry no offset and order
//! before all offset-tagged items; audience constraints always move to
//! the tail; duplicates resolve case-insensitively to the first
//! occurrence.

use std::collections::HashSet;

use prompt_patterns::{constraint, items};

use super::sections::SectionMap;

const FORMAT_HINTS: [&str; 5] = ["json", "yaml", "markdown", "table", "text"];
const AUDIENCE_TAIL: [&str; 2] = ["for beginners", "for experts"];

/// A constraint candidate and the offset of its trigger phrase
pub type Candidate = (Option<usize>, String);

/// Collect list items from the constraints section, and from the
/// output/result section when it does not itself name an output format
/// (a pure format directive is not a constraint).
pub fn collect_section_items(sections: &SectionMap, out: &mut Vec<Candidate>) {
    if let Some(content) = sections.get("constraints") {
        out.extend(lines_to_items(content).into_iter().map(|value| (None, value)));
    }

    let output = sections.get("output").or_else(|| sections.get("result"));
    if let Some(content) = output {
        if !contains_format_hint(content) {
            out.extend(lines_to_items(content).into_iter().map(|value| (None, value)));
        }
    }
}

fn lines_to_items(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| items::strip_bullet(line).to_string())
        .collect()
}

fn contains_format_hint(content: &str) -> bool {
    let lowered = content.to_ascii_lowercase();
    FORMAT_HINTS.iter().any(|hint| lowered.contains(hint))
}

type Detector = fn(&str, &str) -> Option<(usize, String)>;

/// Phrase detectors in evaluation order; each contributes at most one
/// candidate. Evaluation order is the tie-break for equal offsets.
const DETECTORS: [Detector; 22] = [
    step_by_step,
    concise,
    detailed,
    bullet_points,
    beginners,
    experts,
    eli5,
    professional_tone,
    casual_tone,
    engaging,
    creative,
    catchy,
    interactive,
    scene_setting,
    list_quantity,
    word_limit,
    char_limit,
    no_code,
    troubleshooting,
    minimize_downtime,
    budget,
    timeline,
];

/// Run the phrase-detector bank over the full text
pub fn collect_phrase_matches(text: &str, lowered: &str, out: &mut Vec<Candidate>) {
    for detector in DETECTORS {
        if let Some((pos, value)) = detector(text, lowered) {
            out.push((Some(pos), value));
        }
    }
}

/// Order, reorder, and dedupe the merged candidate list
pub fn resolve(mut candidates: Vec<Candidate>) -> Vec<String> {
    candidates.sort_by_key(|(pos, _)| *pos);

    let (audience, rest): (Vec<String>, Vec<String>) = candidates
        .into_iter()
        .map(|(_, value)| value)
        .partition(|value| AUDIENCE_TAIL.contains(&value.trim().to_lowercase().as_str()));

    let mut seen = HashSet::new();
    let mut resolved = Vec::new();
    for value in rest.into_iter().chain(audience) {
        let key = value.trim().to_lowercase();
        if key.is_empty() || !seen.insert(key) {
            continue;
        }
        resolved.push(value.trim().to_string());
    }
    resolved
}

fn find_first(lowered: &str, needles: &[&str]) -> Option<usize> {
    needles.iter().filter_map(|needle| lowered.find(needle)).min()
}

fn step_by_step(_text: &str, lowered: &str) -> Option<(usize, String)> {
    constraint::STEP_BY_STEP
        .find(lowered)
        .map(|m| (m.start(), "Use step-by-step instructions".to_string()))
}

fn concise(_text: &str, lowered: &str) -> Option<(usize, String)> {
    find_first(lowered, &["concise", "brief"]).map(|pos| (pos, "Be concise".to_string()))
}

fn detailed(_text: &str, lowered: &str) -> Option<(usize, String)> {
    lowered.find("detailed").map(|pos| (pos, "Be detailed".to_string()))
}

fn bullet_points(_text: &str, lowered: &str) -> Option<(usize, String)> {
    constraint::USE_BULLET.find(lowered).map(|m| (m.start(), "Use bullet points".to_string()))
}

fn beginners(_text: &str, lowered: &str) -> Option<(usize, String)> {
    find_first(lowered, &["for beginners", "beginner"])
        .map(|pos| (pos, "For beginners".to_string()))
}

fn experts(_text: &str, lowered: &str) -> Option<(usize, String)> {
    find_first(lowered, &["for experts", "expert"]).map(|pos| (pos, "For experts".to_string()))
}

fn eli5(_text: &str, lowered: &str) -> Option<(usize, String)> {
    find_first(lowered, &["eli5", "like i'm 5", "like i'm five"])
        .map(|pos| (pos, "Explain like I'm 5".to_string()))
}

fn professional_tone(_text: &str, lowered: &str) -> Option<(usize, String)> {
    find_first(lowered, &["professional tone", "professionally"])
        .map(|pos| (pos, "Professional tone".to_string()))
}

fn casual_tone(_text: &str, lowered: &str) -> Option<(usize, String)> {
    lowered.find("casual").map(|pos| (pos, "Casual tone".to_string()))
}

fn engaging(_text: &str, lowered: &str) -> Option<(usize, String)> {
    lowered.find("engaging").map(|pos| (pos, "Engaging".to_string()))
}

fn creative(_text: &str, lowered: &str) -> Option<(usize, String)> {
    lowered.find("creative").map(|pos| (pos, "Creative".to_string()))
}

fn catchy(_text: &str, lowered: &str) -> Option<(usize, String)> {
    lowered.find("catchy").map(|pos| (pos, "Catchy".to_string()))
}

fn interactive(_text: &str, lowered: &str) -> Option<(usize, String)> {
    lowered.find("interactive").map(|pos| (pos, "Interactive".to_string()))
}

fn scene_setting(text: &str, _lowered: &str) -> Option<(usize, String)> {
    let caps = constraint::SET_IN.captures(text)?;
    let whole = caps.get(0)?;
    let place = caps.get(1)?.as_str().trim().trim_end_matches('.');
    Some((whole.start(), format!("Set in {place}")))
}

fn list_quantity(text: &str, _lowered: &str) -> Option<(usize, String)> {
    let caps = constraint::LIST_QUANTITY.captures(text)?;
    let group = caps.get(1)?;
    Some((group.start(), group.as_str().trim().trim_end_matches('.').to_string()))
}

fn word_limit(_text: &str, lowered: &str) -> Option<(usize, String)> {
    limit_constraint(&constraint::WORD_LIMIT, lowered, "words")
}

fn char_limit(_text: &str, lowered: &str) -> Option<(usize, String)> {
    limit_constraint(&constraint::CHAR_LIMIT, lowered, "characters")
}

fn limit_constraint(
    pattern: &regex::Regex,
    lowered: &str,
    unit: &str,
) -> Option<(usize, String)> {
    let caps = pattern.captures(lowered)?;
    let whole = caps.get(0)?;
    let qualifier = caps.get(1)?.as_str();
    let number = caps.get(2)?.as_str();
    let value = if matches!(qualifier, "under" | "within") {
        format!("Under {number} {unit}")
    } else {
        format!("{number} {unit}")
    };
    Some((whole.start(), value))
}

fn no_code(_text: &str, lowered: &str) -> Option<(usize, String)> {
    // the literal "no code examples needed" stands as its own constraint
    if lowered.contains("no code examples needed") {
        return None;
    }
    lowered.find("no code").map(|pos| (pos, "No code examples".to_string()))
}

fn troubleshooting(_text: &str, lowered: &str) -> Option<(usize, String)> {
    if !lowered.contains("include") {
        return None;
    }
    lowered
        .find("troubleshooting")
        .map(|pos| (pos, "Include troubleshooting steps".to_string()))
}

fn minimize_downtime(_text: &str, lowered: &str) -> Option<(usize, String)> {
    lowered.find("minimize downtime").map(|pos| (pos, "Minimize downtime".to_string()))
}

fn budget(_text: &str, lowered: &str) -> Option<(usize, String)> {
    let caps = constraint::BUDGET.captures(lowered)?;
    let whole = caps.get(0)?;
    let amount = caps.get(1)?.as_str();
    Some((whole.start(), format!("Budget: ${amount}")))
}

fn timeline(_text: &str, lowered: &str) -> Option<(usize, String)> {
    let caps = constraint::TIMELINE.captures(lowered)?;
    let whole = caps.get(0)?;
    let number = caps.get(1)?.as_str();
    let unit = caps.get(2)?.as_str();
    Some((whole.start(), format!("Timeline: {number} {unit}")))
}
