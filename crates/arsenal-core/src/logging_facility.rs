//! Structured logging facility for Snippet Arsenal
//!
//! This module provides a canonical logging facility with:
//! - Single initialization point via `init(profile, default_filter)`
//! - Structured logging macros (`log_op_start!`, `log_op_end!`, `log_op_error!`)
//! - Test capture mode for deterministic assertions
//!
//! All human/JSON output goes to stderr so command output on stdout stays
//! clean.
//!
//! # Usage
//!
//! ```rust
//! use arsenal_core::logging_facility::{init, Profile};
//!
//! // Initialize once at application startup
//! init(Profile::Development, "arsenal=info");
//! ```

pub mod init;
pub mod macros;
pub mod test_capture;

pub use init::{init, Profile};
pub use test_capture::{init_test_capture, CapturedEvent, TestCapture};
