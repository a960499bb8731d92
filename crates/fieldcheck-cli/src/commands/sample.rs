//! Sample command
//!
//! Usage: fieldcheck sample <correct|incorrect>

use clap::Args;
use fieldcheck_core::errors::Result;
use fieldcheck_core::samples::Sample;
use std::process::ExitCode;

#[derive(Debug, Args)]
pub struct SampleArgs {
    /// Which sample: correct or incorrect
    pub which: Sample,
}

/// Print a sample document for the built-in template
pub fn execute(args: SampleArgs) -> Result<ExitCode> {
    println!("{}", serde_json::to_string_pretty(&args.which.document())?);
    Ok(ExitCode::SUCCESS)
}
