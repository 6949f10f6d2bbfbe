//! Core types shared across Snippet Arsenal facilities
//!
//! - **Schema constants**: Canonical field keys and event names used by the
//!   logging facility and error reporting

pub mod schema;
