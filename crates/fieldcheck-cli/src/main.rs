//! fieldcheck CLI
//!
//! Command-line interface for checking JSON documents against a template

use clap::{Parser, Subcommand};
use fieldcheck_core::errors::ExError;
use fieldcheck_core::render::render_error;
use std::path::PathBuf;
use std::process::ExitCode;

mod commands;

/// Exit code when the document is missing required fields
pub const EXIT_MISMATCH: u8 = 1;
/// Exit code for errors; matches clap's usage-error status
pub const EXIT_ERROR: u8 = 2;

/// Log filter when neither `RUST_LOG` nor the config names one
const DEFAULT_LOG_FILTER: &str = "fieldcheck=warn";

#[derive(Debug, Parser)]
#[command(name = "fieldcheck")]
#[command(about = "fieldcheck - Report required fields missing from JSON documents", long_about = None)]
struct Cli {
    /// Configuration file (default: ./fieldcheck.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Check a document against the template
    Check(commands::check::CheckArgs),
    /// Print the active template
    Template(commands::template::TemplateArgs),
    /// Print a sample document for the built-in template
    Sample(commands::sample::SampleArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(code) => code,
        Err(ex_err) => {
            eprint!("{}", render_error(&ex_err));
            ExitCode::from(EXIT_ERROR)
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode, ExError> {
    let config = commands::load_config(cli.config.as_deref())?;
    fieldcheck_core::logging_facility::init_with_filter(
        config.logging.profile,
        Some(config.logging.filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER)),
    );

    match cli.command {
        Commands::Check(args) => commands::check::execute(args, &config),
        Commands::Template(args) => Ok(commands::template::execute(args, &config)?),
        Commands::Sample(args) => Ok(commands::sample::execute(args)?),
    }
}
