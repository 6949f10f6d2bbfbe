//! Engine-level mutating commands.

use std::time::Instant;

use arsenal_core::errors::ExError;
use arsenal_core::model::{Snippet, SnippetDraft};
use arsenal_core::{log_op_end, log_op_error, log_op_start};
use arsenal_store::errors::{from_rusqlite, not_found, Result};
use arsenal_store::SqliteRepo;
use chrono::Utc;
use rusqlite::Connection;

/// Commands that write to the snippet store.
#[derive(Debug, Clone)]
pub enum EngineCommand {
    /// Save the editor form. `None` inserts a new snippet, `Some(id)`
    /// overwrites that snippet.
    SnippetSave {
        snippet_id: Option<i64>,
        draft: SnippetDraft,
    },
    /// Permanently delete a snippet.
    SnippetDelete { snippet_id: i64 },
}

/// Result of applying an engine command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineCommandResult {
    /// Snippet was saved; `created` is true for an insert.
    Saved { snippet_id: i64, created: bool },
    /// Snippet was deleted.
    Deleted { snippet_id: i64 },
}

/// Apply an engine command.
///
/// # Errors
/// * `MissingField` / `InvalidTitle` - Draft failed validation (nothing written)
/// * `NotFound` - Update or delete of a snippet that does not exist
/// * `Persistence` - SQLite failure
pub fn apply_engine_command(
    cmd: EngineCommand,
    conn: &mut Connection,
) -> Result<EngineCommandResult> {
    match cmd {
        EngineCommand::SnippetSave { snippet_id, draft } => {
            log_op_start!("snippet_save", snippet_id = ?snippet_id);
            let start = Instant::now();

            let result = save_snippet(conn, snippet_id, draft);

            let elapsed = start.elapsed().as_millis() as u64;
            match &result {
                Ok(EngineCommandResult::Saved {
                    snippet_id,
                    created,
                }) => {
                    log_op_end!(
                        "snippet_save",
                        duration_ms = elapsed,
                        snippet_id = *snippet_id,
                        created = *created
                    );
                }
                Ok(_) => {
                    log_op_end!("snippet_save", duration_ms = elapsed);
                }
                Err(e) => {
                    let e_clone = e.clone();
                    log_op_error!("snippet_save", e_clone, duration_ms = elapsed);
                }
            }
            result
        }

        EngineCommand::SnippetDelete { snippet_id } => {
            log_op_start!("snippet_delete", snippet_id = snippet_id);
            let start = Instant::now();

            let result = delete_snippet(conn, snippet_id);

            let elapsed = start.elapsed().as_millis() as u64;
            match &result {
                Ok(_) => {
                    log_op_end!("snippet_delete", duration_ms = elapsed);
                }
                Err(e) => {
                    let e_clone = e.clone();
                    log_op_error!("snippet_delete", e_clone, duration_ms = elapsed);
                }
            }
            result
        }
    }
}

fn save_snippet(
    conn: &mut Connection,
    snippet_id: Option<i64>,
    draft: SnippetDraft,
) -> Result<EngineCommandResult> {
    let draft = draft.normalized().map_err(ExError::from)?;
    let now = Utc::now();

    match snippet_id {
        None => {
            let snippet = Snippet::from_draft(0, draft, now);
            let snippet_id = SqliteRepo::insert_snippet(conn, &snippet)?;
            Ok(EngineCommandResult::Saved {
                snippet_id,
                created: true,
            })
        }
        Some(snippet_id) => {
            let tx = conn.transaction().map_err(from_rusqlite)?;
            let mut snippet = SqliteRepo::get_snippet(&tx, snippet_id)?
                .ok_or_else(|| not_found("snippet_save", snippet_id))?;
            snippet.apply_draft(draft, now);
            SqliteRepo::update_snippet(&tx, &snippet)?;
            tx.commit().map_err(from_rusqlite)?;

            Ok(EngineCommandResult::Saved {
                snippet_id,
                created: false,
            })
        }
    }
}

fn delete_snippet(conn: &Connection, snippet_id: i64) -> Result<EngineCommandResult> {
    if !SqliteRepo::delete_snippet(conn, snippet_id)? {
        return Err(not_found("snippet_delete", snippet_id));
    }
    Ok(EngineCommandResult::Deleted { snippet_id })
}
