//! Subcommand implementations

pub mod copy;
pub mod delete;
pub mod save;
pub mod search;
pub mod show;

/// Result type shared by every subcommand
pub type CommandResult = Result<(), Box<dyn std::error::Error>>;
