//! Rendering of check outcomes and errors for a front end.

use crate::check::CheckOutcome;
use crate::errors::{ExError, FieldCheckError, Result};
use serde::Deserialize;
use std::fmt::Write as _;
use std::str::FromStr;

/// How outcomes are written
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = FieldCheckError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(FieldCheckError::UnknownFormat {
                name: s.to_string(),
            }),
        }
    }
}

/// Render an outcome in the requested format
///
/// # Errors
///
/// `Serialization` if the JSON form cannot be produced.
pub fn render_outcome(outcome: &CheckOutcome, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(outcome)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(outcome)?),
    }
}

fn render_text(outcome: &CheckOutcome) -> String {
    match outcome {
        CheckOutcome::Match => "All fields match the template.\n".to_string(),
        CheckOutcome::Mismatch { missing_fields } => {
            let mut out = String::from("Mismatch found. Missing fields:\n");
            for field in missing_fields {
                let _ = writeln!(out, "- {}", field);
            }
            out
        }
    }
}

/// Render an error, pointing at the offending input line when known
pub fn render_error(err: &ExError) -> String {
    let mut out = format!("Error: {}\n", err);
    if let (Some(line), Some(text)) = (err.line(), err.line_text()) {
        let _ = writeln!(out, "Problematic line ({}):", line);
        let _ = writeln!(out, "{}", text);
    }
    out
}
