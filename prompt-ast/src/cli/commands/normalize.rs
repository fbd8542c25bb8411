//! Normalize command: prompt text in, serialized record out

use anyhow::Result;
use std::path::{Path, PathBuf};
use tracing::debug;

use prompt_ast_core::llm::{CompletionProvider, OpenAiCompatClient};
use prompt_ast_core::{Error, Format, Mode, parse_prompt, serialize};

use crate::cli::app::NormalizeArgs;

/// Prompt files larger than this are rejected.
const MAX_FILE_SIZE: u64 = 5 * 1024 * 1024;

/// Execute the normalize command
pub async fn execute(args: NormalizeArgs) -> Result<()> {
    let text = resolve_input(&args)?;
    let mode: Mode = args.mode.parse::<Mode>()?;
    let format: Format = args.format.parse::<Format>()?;

    let provider: Option<Box<dyn CompletionProvider>> = if matches!(mode, Mode::Llm | Mode::Hybrid)
    {
        if !args.use_openai {
            return Err(
                Error::llm_not_configured("pass --use-openai for llm and hybrid modes").into()
            );
        }
        Some(Box::new(OpenAiCompatClient::from_env()?))
    } else {
        None
    };

    let ast = parse_prompt(&text, mode, provider.as_deref()).await?;
    println!("{}", serialize(&ast, format)?);
    Ok(())
}

/// Resolve prompt text from the positional argument or --file, which are
/// mutually exclusive.
fn resolve_input(args: &NormalizeArgs) -> Result<String> {
    match (&args.text, &args.file) {
        (Some(_), Some(_)) => {
            Err(Error::invalid_input("cannot specify both text argument and --file").into())
        }
        (None, None) => {
            Err(Error::invalid_input("must provide either text argument or --file").into())
        }
        (Some(text), None) => Ok(text.clone()),
        (None, Some(file)) => read_prompt_file(file),
    }
}

/// Read a prompt file as UTF-8, with home-directory expansion, after
/// checking it exists, is a regular file, and is under the size ceiling.
fn read_prompt_file(path: &Path) -> Result<String> {
    let path = expand_home(path);

    if !path.exists() {
        return Err(
            Error::invalid_input(format!("file '{}' does not exist", path.display())).into()
        );
    }
    if !path.is_file() {
        return Err(Error::invalid_input(format!("'{}' is not a file", path.display())).into());
    }

    let size = std::fs::metadata(&path)?.len();
    if size > MAX_FILE_SIZE {
        return Err(Error::invalid_input(format!(
            "file '{}' is too large ({size} bytes, limit {MAX_FILE_SIZE})",
            path.display()
        ))
        .into());
    }

    debug!(path = %path.display(), size, "reading prompt from file");
    Ok(std::fs::read_to_string(&path)?)
}

fn expand_home(path: &Path) -> PathBuf {
    if let Ok(rest) = path.strip_prefix("~") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    path.to_path_buf()
}
