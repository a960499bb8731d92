//! Template command
//!
//! Usage: fieldcheck template [--template <FILE>]

use clap::Args;
use fieldcheck_core::errors::Result;
use fieldcheck_core::Config;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Args)]
pub struct TemplateArgs {
    /// Template file (default: configured or built-in template)
    #[arg(short, long)]
    pub template: Option<PathBuf>,
}

/// Print the template the check command would use
pub fn execute(args: TemplateArgs, config: &Config) -> Result<ExitCode> {
    let template = super::resolve_template(args.template.as_deref(), config)?;
    println!("{}", serde_json::to_string_pretty(template.as_value())?);
    Ok(ExitCode::SUCCESS)
}
