use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "prompt-ast",
    version,
    about = "Prompt AST - normalize free-form prompts into a structured record",
    long_about = "Prompt AST parses free-form natural-language prompt text into a \
                  structured record capturing role, context, task, constraints, \
                  output expectations, and detected ambiguities."
)]
pub struct Cli {
    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Normalize prompt text
    #[command(about = "Normalize and parse prompt text into a structured AST")]
    Normalize(NormalizeArgs),
}

#[derive(Parser, Debug)]
pub struct NormalizeArgs {
    /// Raw prompt text (alternative to --file)
    #[arg(help = "Raw prompt text to parse")]
    pub text: Option<String>,

    /// Read the prompt from a file instead of the argument
    #[arg(short, long, help = "Read prompt text from a file")]
    pub file: Option<PathBuf>,

    /// Extraction mode
    #[arg(long, default_value = "heuristic", help = "Extraction mode: heuristic, llm, or hybrid")]
    pub mode: String,

    /// Output serialization format
    #[arg(long, default_value = "json", help = "Output format: json or yaml")]
    pub format: String,

    /// Use an OpenAI-compatible API configured via environment variables
    #[arg(long, help = "Enable the OpenAI-compatible completion provider")]
    pub use_openai: bool,
}
