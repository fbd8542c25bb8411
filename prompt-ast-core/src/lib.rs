//! Core functionality for prompt-ast
//!
//! This crate turns free-form prompt text into a structured record
//! ([`ast::PromptAst`]). The heuristic engine in [`parse::heuristic`] is
//! pure and synchronous; the model-backed paths in [`parse::llm`] and
//! [`parse::hybrid`] wrap it around an opaque completion provider.

pub mod ast;
pub mod error;
pub mod formats;
pub mod llm;
pub mod parse;

pub use ast::{OutputFormat, OutputSpec, PromptAst, SCHEMA_VERSION};
pub use error::{Error, Result};
pub use formats::{Format, serialize};
pub use parse::{Mode, parse_prompt};
