//! Check command
//!
//! Usage: fieldcheck check [FILE] [--template <FILE>] [--format text|json]
//!
//! Exit status: 0 when every required field is present, 1 when fields are
//! missing, 2 on any error.

use clap::Args;
use fieldcheck_core::check::check_document_in;
use fieldcheck_core::errors::{ExError, FieldCheckError, Result};
use fieldcheck_core::render::{render_outcome, OutputFormat};
use fieldcheck_core::Config;
use fieldcheck_core_types::RequestContext;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Document to check; `-` or omitted reads stdin
    pub input: Option<PathBuf>,

    /// Template file (default: configured or built-in template)
    #[arg(short, long)]
    pub template: Option<PathBuf>,

    /// Output format: text or json
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Trace id attached to log events and errors
    #[arg(long)]
    pub trace_id: Option<String>,
}

/// Execute check command
///
/// Errors from the check itself carry the operation and correlation ids.
pub fn execute(args: CheckArgs, config: &Config) -> std::result::Result<ExitCode, ExError> {
    let template = super::resolve_template(args.template.as_deref(), config)?;
    let text = read_input(args.input.as_deref())?;

    let mut ctx = RequestContext::new();
    if let Some(trace_id) = args.trace_id {
        ctx = ctx.with_trace_id(trace_id);
    }

    let outcome = check_document_in(&ctx, &text, &template)?;
    let format = args.format.unwrap_or(config.output.format);
    println!("{}", render_outcome(&outcome, format)?.trim_end());

    if outcome.is_match() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(crate::EXIT_MISMATCH))
    }
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path != Path::new("-") => {
            std::fs::read_to_string(path).map_err(|e| FieldCheckError::io(path, &e))
        }
        _ => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .map_err(|e| FieldCheckError::io(Path::new("<stdin>"), &e))?;
            Ok(text)
        }
    }
}
