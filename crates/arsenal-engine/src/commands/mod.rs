//! Command orchestration layer.
//!
//! Mutations go through `apply_engine_command`, reads through
//! `apply_engine_query`.

pub mod engine_command;
pub mod engine_query;
