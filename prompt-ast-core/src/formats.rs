//! Serialized interchange forms for the prompt record

use std::fmt;
use std::str::FromStr;

use crate::ast::PromptAst;
use crate::error::{Error, Result};

/// Supported serialization formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    #[default]
    Json,
    Yaml,
}

impl FromStr for Format {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "yaml" => Ok(Self::Yaml),
            other => Err(Error::invalid_input(format!(
                "unsupported format '{other}', expected one of: json, yaml"
            ))),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => write!(f, "json"),
            Self::Yaml => write!(f, "yaml"),
        }
    }
}

/// Serialize a record to the requested format
pub fn serialize(ast: &PromptAst, format: Format) -> Result<String> {
    match format {
        Format::Json => ast.to_json(),
        Format::Yaml => ast.to_yaml(),
    }
}
