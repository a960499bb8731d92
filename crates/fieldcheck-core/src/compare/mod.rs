//! Structural comparison of a candidate document against a template.
//!
//! ## Entry point
//!
//! ```
//! use fieldcheck_core::compare::find_missing_fields;
//! use serde_json::json;
//!
//! let template = json!({"name": "", "address": {"city": ""}});
//! let candidate = json!({"address": {}});
//!
//! let missing = find_missing_fields(&candidate, &template);
//! assert_eq!(missing, vec!["name", "address.city"]);
//! ```
//!
//! ## Rules
//!
//! - Template object keys are required in the candidate.
//! - A template array requires an array; if its first element is an object,
//!   every candidate item must be an object satisfying that element.
//! - A template object requires an object and is checked recursively.
//! - A primitive template value only requires presence.
//!
//! Findings are data, never errors. Order follows template key order, then
//! candidate array index order.

pub mod engine;
pub mod model;
pub mod path;

pub use engine::{compare, compare_at, find_missing_fields, find_missing_fields_at};
pub use model::{Container, MissingField, MissingFieldKind, MissingFieldReport};
pub use path::FieldPath;
