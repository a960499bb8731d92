//! Structured logging facility for fieldcheck
//!
//! This module provides:
//! - Single initialization point via `init(profile)` / `init_with_filter`
//! - Structured logging macros (`log_op_start!`, `log_op_end!`, `log_op_error!`)
//! - Test capture mode for deterministic assertions
//!
//! Log output goes to stderr; stdout is reserved for check results.
//!
//! # Usage
//!
//! ```rust
//! use fieldcheck_core::logging_facility::{init, Profile};
//!
//! init(Profile::Development);
//! ```

pub mod init;
pub mod macros;
pub mod test_capture;

pub use init::{init, init_with_filter, Profile};
pub use test_capture::{init_test_capture, CapturedEvent, TestCapture};
