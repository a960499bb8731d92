//! Candidate text parsing
//!
//! Turns raw user text into a JSON value before anything is compared.
//! Syntax errors carry the parser's line and column, plus the offending
//! line's text when the line exists in the input.

use crate::errors::{FieldCheckError, Result};
use serde_json::Value;

/// Parse candidate text into a JSON value
///
/// # Errors
///
/// - `EmptyInput` if the text is empty or whitespace only
/// - `InvalidJson` if the text is not a single valid JSON value
pub fn parse_candidate(text: &str) -> Result<Value> {
    if text.trim().is_empty() {
        return Err(FieldCheckError::EmptyInput);
    }

    serde_json::from_str(text).map_err(|e| {
        let (line, column) = (e.line(), e.column());
        FieldCheckError::InvalidJson {
            message: without_location(&e.to_string(), line, column),
            line,
            column,
            line_text: line_at(text, line),
        }
    })
}

/// serde_json appends ` at line L column C`; the error carries both as fields
fn without_location(message: &str, line: usize, column: usize) -> String {
    let suffix = format!(" at line {} column {}", line, column);
    message.strip_suffix(&suffix).unwrap_or(message).to_string()
}

/// The 1-based `line` of `text`, if it exists
fn line_at(text: &str, line: usize) -> Option<String> {
    if line == 0 {
        return None;
    }
    text.split('\n')
        .nth(line - 1)
        .map(|l| l.trim_end_matches('\r').to_string())
}
