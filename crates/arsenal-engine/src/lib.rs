//! Snippet Arsenal Engine - Orchestration layer
//!
//! Coordinates draft validation (core) with persistence (store) and emits the
//! canonical start/end log events for every operation.

pub mod commands;

pub use commands::engine_command::{apply_engine_command, EngineCommand, EngineCommandResult};
pub use commands::engine_query::{apply_engine_query, EngineQuery, EngineQueryResult};
