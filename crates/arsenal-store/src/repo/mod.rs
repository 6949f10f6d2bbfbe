//! Repository layer for persisting snippets to SQLite

pub mod sqlite_repo;

pub use sqlite_repo::{SqliteRepo, DEFAULT_SEARCH_LIMIT};
