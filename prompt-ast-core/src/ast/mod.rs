//! Structured prompt record
//!
//! [`PromptAst`] is the single output entity of every parsing path. It is
//! built once per parse call and not mutated after being returned; the
//! hybrid path constructs a fresh record rather than editing a shared one.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::Result;

/// Schema version stamped on every record
pub const SCHEMA_VERSION: &str = "0.1";

fn default_version() -> String {
    SCHEMA_VERSION.to_string()
}

/// Structured representation extracted from a raw prompt
///
/// Field declaration order is the interchange field order: version, role,
/// context, task, constraints, assumptions, ambiguities, output_spec,
/// metadata. The raw input is carried on the record but kept out of
/// serialized documents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromptAst {
    /// Schema version identifying the record shape
    #[serde(default = "default_version")]
    pub version: String,

    /// Original input text, verbatim
    #[serde(skip_serializing, default)]
    pub raw: String,

    /// Assumed persona, when stated or implied
    #[serde(default)]
    pub role: Option<String>,

    /// Background information
    #[serde(default)]
    pub context: Option<String>,

    /// Primary instruction or question
    #[serde(default)]
    pub task: Option<String>,

    /// Ordered constraints; insertion order encodes extraction priority
    #[serde(default)]
    pub constraints: Vec<String>,

    /// Assumptions supplied by non-heuristic producers
    #[serde(default)]
    pub assumptions: Vec<String>,

    /// Detected categories of missing or vague information
    #[serde(default)]
    pub ambiguities: Vec<String>,

    /// Desired response format and structure
    #[serde(default)]
    pub output_spec: OutputSpec,

    /// Producer metadata, at minimum `extracted_by` and `confidence`
    #[serde(default)]
    pub metadata: Map<String, Value>,
}

impl PromptAst {
    /// Create an empty record for the given raw text
    pub fn new(raw: impl Into<String>) -> Self {
        Self {
            version: SCHEMA_VERSION.to_string(),
            raw: raw.into(),
            role: None,
            context: None,
            task: None,
            constraints: Vec::new(),
            assumptions: Vec::new(),
            ambiguities: Vec::new(),
            output_spec: OutputSpec::default(),
            metadata: Map::new(),
        }
    }

    /// Convert to a plain key/value mapping
    pub fn to_value(&self) -> Result<Value> {
        Ok(serde_json::to_value(self)?)
    }

    /// Serialize to a JSON document
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Serialize to a YAML document
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}

/// Desired response format and structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutputSpec {
    /// Response format, when one was requested or inferred
    #[serde(default)]
    pub format: Option<OutputFormat>,

    /// Requested section names, in order
    #[serde(default)]
    pub structure: Vec<String>,

    /// Requested response language
    #[serde(default)]
    pub language: Option<String>,
}

/// Closed set of recognized output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Json,
    Yaml,
    Markdown,
    Table,
    Text,
}

impl OutputFormat {
    /// The lowercase name used in serialized documents
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Yaml => "yaml",
            Self::Markdown => "markdown",
            Self::Table => "table",
            Self::Text => "text",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
