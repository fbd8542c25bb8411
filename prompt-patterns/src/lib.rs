//! Compiled regex pattern banks for prompt analysis
//! Extracted to a separate crate for compilation optimization

use once_cell::sync::Lazy;
use regex::Regex;

/// Labeled section header recognition
pub mod section {
    use super::*;

    /// Matches a section header at the start of a (trimmed) line, in plain
    /// ("Context:"), markdown ("## Context"), or numbered ("1. Context:")
    /// form, with optional inline content after the label.
    pub static HEADER: Lazy<Regex> = Lazy::new(|| {
        Regex::new(
            r"(?i)^(?:#+\s*|\d+\.\s*)?(context|task|constraints|output|result|background|goal|requirements?)\s*:?\s*(.*)$",
        )
        .expect("Invalid regex pattern")
    });

    /// Map a matched label to its canonical section name.
    pub fn canonical(label: &str) -> &'static str {
        match label.to_lowercase().as_str() {
            "background" => "context",
            "goal" => "task",
            "requirement" | "requirements" => "constraints",
            "context" => "context",
            "task" => "task",
            "constraints" => "constraints",
            "output" => "output",
            _ => "result",
        }
    }
}

/// Persona/role phrase patterns
pub mod role {
    use super::*;

    pub static ACT_AS: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"(?i)\bact as (an? )?(?P<role>[^.\n]+)").expect("Invalid regex pattern")
    });

    pub static YOU_ARE: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"(?i)\byou are (an? )?(?P<role>[^.\n]+)").expect("Invalid regex pattern")
    });

    /// Sentence-initial "As a(n) ..." up to a comma or period.
    pub static AS_SENTENCE: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"(?i)(?:(?:^|[.\n])\s*)as a(n)? (?P<role>[^,\n.]+)")
            .expect("Invalid regex pattern")
    });

    /// Patterns in priority order; the first pattern that matches anywhere
    /// in the text wins, regardless of position.
    pub fn patterns() -> [&'static Regex; 3] {
        [&ACT_AS, &YOU_ARE, &AS_SENTENCE]
    }
}

/// Task-sentence cleanup patterns
pub mod task {
    use super::*;

    /// A sentence that opens with a persona clause.
    pub static AS_PREFIX: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"(?i)^as an?\s+").expect("Invalid regex pattern"));

    /// The persona clause through its trailing comma.
    pub static AS_CLAUSE: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"(?i)^as an?\s+[^,]+,\s*").expect("Invalid regex pattern"));
}

/// Output format keywords, checked against lowercased text
pub mod format {
    use super::*;

    pub static JSON: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"\bjson\b").expect("Invalid regex pattern"));
    pub static YAML: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"\byaml\b").expect("Invalid regex pattern"));
    pub static MARKDOWN: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"\bmarkdown\b").expect("Invalid regex pattern"));
    pub static TABLE: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"\btable\b").expect("Invalid regex pattern"));
}

/// Output structure lists ("with sections: A, B, C" / "include: X, Y")
pub mod structure {
    use super::*;

    pub static SECTIONS_LIST: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"(?i)(?:with\s+)?sections?\s*:\s*([^.\n]+)").expect("Invalid regex pattern")
    });

    pub static WITH_INCLUDE_LIST: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"(?i)(?:with|include)\s*:\s*([^.\n]+)").expect("Invalid regex pattern")
    });
}

/// Constraint phrase detectors
pub mod constraint {
    use super::*;

    pub static STEP_BY_STEP: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"step[-\s]by[-\s]step").expect("Invalid regex pattern"));

    pub static USE_BULLET: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"\buse\s+bullet").expect("Invalid regex pattern"));

    pub static SET_IN: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"(?i)\bset in ([^.\n]+)").expect("Invalid regex pattern"));

    /// Quantity directives like "List 5 testable hypotheses" at a sentence
    /// boundary.
    pub static LIST_QUANTITY: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"(?i)(?:^|[.!?]\s+)(List\s+\d+\s+[^.\n]+)").expect("Invalid regex pattern")
    });

    pub static WORD_LIMIT: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"(in|under|within)\s+(\d+)\s+words?").expect("Invalid regex pattern")
    });

    pub static CHAR_LIMIT: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"(in|under|within)\s+(\d+)\s+characters?").expect("Invalid regex pattern")
    });

    pub static BUDGET: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"budget[:\s]+\$?([\d,]+k?)").expect("Invalid regex pattern"));

    pub static TIMELINE: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"timeline[:\s]+(\d+)\s+(months?|weeks?|days?)").expect("Invalid regex pattern")
    });
}

/// List item cleanup
pub mod items {
    use super::*;

    /// Leading bullet marker on a list line.
    pub static BULLET_PREFIX: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"^[-*•]\s*").expect("Invalid regex pattern"));

    /// Strip a leading bullet marker from a list line.
    pub fn strip_bullet(line: &str) -> &str {
        match BULLET_PREFIX.find(line) {
            Some(m) => &line[m.end()..],
            None => line,
        }
    }
}

/// Ambiguity rule patterns
pub mod ambiguity {
    use super::*;

    /// Vague-task phrases, word-bounded.
    pub static VAGUE_TASK: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"\b(help me|fix this|do something|work on this)\b")
            .expect("Invalid regex pattern")
    });

    /// Retention-specific detail keywords, word-bounded.
    pub static RETENTION_DETAIL: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"\b(metric|rate|churn|reason)\b").expect("Invalid regex pattern"));

    /// The single word immediately preceding "data".
    pub static DATA_QUALIFIER: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"\b([a-z]+)\s+data\b").expect("Invalid regex pattern"));
}
