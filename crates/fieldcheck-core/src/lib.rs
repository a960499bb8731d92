//! fieldcheck core - required-field checking for JSON documents
//!
//! This crate compares a candidate JSON document against a template that
//! describes which fields must be present, including nested objects and
//! arrays of objects, and reports every missing field by its dotted and
//! indexed path (e.g. `shareholders[0].data.address.city`).
//!
//! - [`mod@compare`] holds the structural comparator and its typed report
//! - [`template`] provides the template (built-in reference or loaded)
//! - [`check`] is the caller-facing service: parse text, compare, log
//! - [`render`] turns outcomes and errors into text or JSON
//!
//! Only presence and container shape are checked. Primitive value types,
//! extra fields and array lengths beyond "empty vs non-empty" are not.

pub mod check;
pub mod compare;
pub mod config;
pub mod errors;
pub mod input;
pub mod json_kind;
pub mod logging_facility;
pub mod render;
pub mod samples;
pub mod template;

// Re-export commonly used types
pub use check::{check_document, check_document_in, check_value, CheckOutcome};
pub use compare::{compare, find_missing_fields, FieldPath, MissingField, MissingFieldReport};
pub use config::Config;
pub use errors::{ExError, ExErrorKind, FieldCheckError, Result};
pub use json_kind::{classify, JsonKind};
pub use render::OutputFormat;
pub use template::Template;
