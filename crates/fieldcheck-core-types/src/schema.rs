//! Canonical names shared by the logging macros and the capture layer
//!
//! `tracing` field names must be literal identifiers at the call site, so
//! only the names read back at runtime live here.

// Fields the capture layer lifts out of every event
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";

// Values of the `event` field
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
