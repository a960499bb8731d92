//! Check service: parse candidate text, compare it with a template, report.
//!
//! This is the boundary a front end calls. Malformed text never reaches the
//! comparator; it is returned as an `ExError` carrying the offending line,
//! the operation name and the request's correlation ids.

use crate::compare::{compare, MissingField};
use crate::errors::{ExError, FieldCheckError};
use crate::input::parse_candidate;
use crate::template::Template;
use crate::{log_op_end, log_op_error, log_op_start};
use fieldcheck_core_types::{RequestContext, TraceId};
use serde::Serialize;
use serde_json::Value;
use std::time::Instant;

/// Operation name on log events and errors from the check boundary
pub const OP_CHECK_DOCUMENT: &str = "check_document";

/// Result of checking one candidate
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CheckOutcome {
    /// Every required field is present with a compatible container type
    Match,
    /// At least one required field is missing or mis-shaped
    Mismatch { missing_fields: Vec<MissingField> },
}

impl CheckOutcome {
    pub fn is_match(&self) -> bool {
        matches!(self, CheckOutcome::Match)
    }

    pub fn missing_fields(&self) -> &[MissingField] {
        match self {
            CheckOutcome::Match => &[],
            CheckOutcome::Mismatch { missing_fields } => missing_fields,
        }
    }

    /// Descriptor strings, empty on a match
    pub fn missing_strings(&self) -> Vec<String> {
        self.missing_fields().iter().map(ToString::to_string).collect()
    }
}

/// Check an already parsed candidate
pub fn check_value(candidate: &Value, template: &Template) -> CheckOutcome {
    let report = compare(candidate, template.as_value());
    if report.is_empty() {
        CheckOutcome::Match
    } else {
        CheckOutcome::Mismatch {
            missing_fields: report.into_fields(),
        }
    }
}

/// Parse and check candidate text under a fresh request context
///
/// # Errors
///
/// `EmptyInput` or `InvalidJson` when `text` is not a JSON document.
pub fn check_document(text: &str, template: &Template) -> Result<CheckOutcome, ExError> {
    check_document_in(&RequestContext::new(), text, template)
}

/// Parse and check candidate text, tagging log events with `ctx`
///
/// # Errors
///
/// `EmptyInput` or `InvalidJson` when `text` is not a JSON document, with
/// the operation and the ids of `ctx` attached.
pub fn check_document_in(
    ctx: &RequestContext,
    text: &str,
    template: &Template,
) -> Result<CheckOutcome, ExError> {
    let started = Instant::now();
    log_op_start!(
        OP_CHECK_DOCUMENT,
        request_id = %ctx.request_id,
        trace_id = ctx.trace_id.as_ref().map(TraceId::as_str),
        input_len = text.len()
    );

    let candidate = match parse_candidate(text) {
        Ok(value) => value,
        Err(err) => {
            let ex_err = in_context(err, ctx);
            log_op_error!(
                OP_CHECK_DOCUMENT,
                ex_err.clone(),
                duration_ms = elapsed_ms(started)
            );
            return Err(ex_err);
        }
    };

    let outcome = check_value(&candidate, template);
    log_op_end!(
        OP_CHECK_DOCUMENT,
        duration_ms = elapsed_ms(started),
        request_id = %ctx.request_id,
        missing_count = outcome.missing_fields().len()
    );
    Ok(outcome)
}

fn in_context(err: FieldCheckError, ctx: &RequestContext) -> ExError {
    let ex_err = ExError::from(err)
        .with_op(OP_CHECK_DOCUMENT)
        .with_request_id(ctx.request_id);
    match &ctx.trace_id {
        Some(trace_id) => ex_err.with_trace_id(trace_id.clone()),
        None => ex_err,
    }
}

fn elapsed_ms(started: Instant) -> u64 {
    u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX)
}
