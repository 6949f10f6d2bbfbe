//! Snippet Arsenal Store - Persistence layer with SQLite
//!
//! Provides:
//! - Connection helpers for the single-file database
//! - Embedded, checksummed schema migrations
//! - `SqliteRepo`: snippet CRUD and keyword search

pub mod db;
pub mod errors;
pub mod migrations;
pub mod repo;

// Re-export key types
pub use errors::Result;
pub use repo::{SqliteRepo, DEFAULT_SEARCH_LIMIT};
