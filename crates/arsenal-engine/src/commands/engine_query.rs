//! Engine-level read-only query surface.
//!
//! `apply_engine_query` takes a shared connection and never writes.

use std::time::Instant;

use arsenal_core::model::{Snippet, SnippetSummary};
use arsenal_core::{log_op_end, log_op_error, log_op_start};
use arsenal_store::errors::{not_found, Result};
use arsenal_store::SqliteRepo;
use rusqlite::Connection;

/// Read-only queries supported by the engine.
#[derive(Debug, Clone)]
pub enum EngineQuery {
    /// Load a full snippet for the editor.
    SnippetGet { snippet_id: i64 },
    /// Keyword search for the results list.
    SnippetSearch { query: String, limit: usize },
    /// Text to place on the clipboard for a snippet.
    SnippetCopyText { snippet_id: i64 },
}

/// Result of an engine query.
#[derive(Debug, Clone, PartialEq)]
pub enum EngineQueryResult {
    Snippet(Snippet),
    Summaries(Vec<SnippetSummary>),
    /// Trimmed code, or `None` when there is nothing to copy.
    CopyText(Option<String>),
}

/// Apply a read-only engine query.
///
/// # Errors
/// * `NotFound` - `SnippetGet` / `SnippetCopyText` for an unknown id
/// * `Persistence` - SQLite failure
pub fn apply_engine_query(query: EngineQuery, conn: &Connection) -> Result<EngineQueryResult> {
    match query {
        EngineQuery::SnippetGet { snippet_id } => {
            log_op_start!("snippet_get", snippet_id = snippet_id);
            let start = Instant::now();

            let result = load(conn, "snippet_get", snippet_id).map(EngineQueryResult::Snippet);

            finish("snippet_get", start, &result);
            result
        }

        EngineQuery::SnippetSearch { query, limit } => {
            log_op_start!("snippet_search", limit = limit as u64);
            let start = Instant::now();

            let result = SqliteRepo::search_snippets(conn, &query, limit);

            let elapsed = start.elapsed().as_millis() as u64;
            match &result {
                Ok(rows) => {
                    log_op_end!(
                        "snippet_search",
                        duration_ms = elapsed,
                        result_len = rows.len() as u64
                    );
                }
                Err(e) => {
                    let e_clone = e.clone();
                    log_op_error!("snippet_search", e_clone, duration_ms = elapsed);
                }
            }
            result.map(EngineQueryResult::Summaries)
        }

        EngineQuery::SnippetCopyText { snippet_id } => {
            log_op_start!("snippet_copy_text", snippet_id = snippet_id);
            let start = Instant::now();

            let result = load(conn, "snippet_copy_text", snippet_id).map(|snippet| {
                let code = snippet.code.trim();
                EngineQueryResult::CopyText((!code.is_empty()).then(|| code.to_string()))
            });

            finish("snippet_copy_text", start, &result);
            result
        }
    }
}

fn load(conn: &Connection, op: &str, snippet_id: i64) -> Result<Snippet> {
    SqliteRepo::get_snippet(conn, snippet_id)?.ok_or_else(|| not_found(op, snippet_id))
}

fn finish(op: &'static str, start: Instant, result: &Result<EngineQueryResult>) {
    let elapsed = start.elapsed().as_millis() as u64;
    match result {
        Ok(_) => {
            log_op_end!(op, duration_ms = elapsed);
        }
        Err(e) => {
            let e_clone = e.clone();
            log_op_error!(op, e_clone, duration_ms = elapsed);
        }
    }
}
