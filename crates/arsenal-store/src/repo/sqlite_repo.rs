//! SQLite repository implementation
//!
//! All functions take `&Connection`; a `Transaction` derefs to one, so the
//! same calls work inside a transaction.

use crate::errors::{from_rusqlite, not_found, Result};
use arsenal_core::model::{Snippet, SnippetSummary, Status};
use chrono::{DateTime, Utc};
use rusqlite::types::Type;
use rusqlite::{Connection, OptionalExtension, Row};

/// Maximum number of rows returned by a search unless the caller asks otherwise
pub const DEFAULT_SEARCH_LIMIT: usize = 200;

const SNIPPET_COLUMNS: &str =
    "id, title, language, tags, status, code, notes, created_at, updated_at";

/// SQLite repository for snippets
pub struct SqliteRepo;

impl SqliteRepo {
    /// Insert a new snippet and return its id
    ///
    /// `snippet.id` is ignored; the database assigns a fresh, never-reused id.
    pub fn insert_snippet(conn: &Connection, snippet: &Snippet) -> Result<i64> {
        conn.execute(
            "INSERT INTO snippets (title, language, tags, status, code, notes, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            rusqlite::params![
                snippet.title,
                snippet.language,
                snippet.tags,
                snippet.status.as_str(),
                snippet.code,
                snippet.notes,
                snippet.created_at.timestamp_millis(),
                snippet.updated_at.timestamp_millis(),
            ],
        )
        .map_err(from_rusqlite)?;

        Ok(conn.last_insert_rowid())
    }

    /// Overwrite an existing snippet's editable fields and `updated_at`
    ///
    /// `created_at` is never rewritten.
    ///
    /// # Errors
    /// * `NotFound` - If no snippet has `snippet.id`
    pub fn update_snippet(conn: &Connection, snippet: &Snippet) -> Result<()> {
        let changed = conn
            .execute(
                "UPDATE snippets
                 SET title = ?1,
                     language = ?2,
                     tags = ?3,
                     status = ?4,
                     code = ?5,
                     notes = ?6,
                     updated_at = ?7
                 WHERE id = ?8",
                rusqlite::params![
                    snippet.title,
                    snippet.language,
                    snippet.tags,
                    snippet.status.as_str(),
                    snippet.code,
                    snippet.notes,
                    snippet.updated_at.timestamp_millis(),
                    snippet.id,
                ],
            )
            .map_err(from_rusqlite)?;

        if changed == 0 {
            return Err(not_found("update_snippet", snippet.id));
        }
        Ok(())
    }

    /// Get a full snippet by id
    pub fn get_snippet(conn: &Connection, snippet_id: i64) -> Result<Option<Snippet>> {
        let sql = format!("SELECT {} FROM snippets WHERE id = ?", SNIPPET_COLUMNS);
        conn.query_row(&sql, [snippet_id], row_to_snippet)
            .optional()
            .map_err(from_rusqlite)
    }

    /// Permanently delete a snippet
    ///
    /// Returns `false` when no snippet had that id.
    pub fn delete_snippet(conn: &Connection, snippet_id: i64) -> Result<bool> {
        let changed = conn
            .execute("DELETE FROM snippets WHERE id = ?", [snippet_id])
            .map_err(from_rusqlite)?;
        Ok(changed > 0)
    }

    /// Keyword search across title, language, tags, code and notes
    ///
    /// The query is trimmed and matched as a case-insensitive (ASCII)
    /// substring; `%` and `_` match literally. An empty query matches every
    /// snippet. Rows come back most recently saved first, ties broken by
    /// newest id, and at most `limit` of them.
    pub fn search_snippets(
        conn: &Connection,
        query: &str,
        limit: usize,
    ) -> Result<Vec<SnippetSummary>> {
        let pattern = format!("%{}%", escape_like(query.trim()));
        let limit = i64::try_from(limit).unwrap_or(i64::MAX);

        let mut stmt = conn
            .prepare(
                r"SELECT id, title, language, tags, status
                  FROM snippets
                  WHERE title LIKE ?1 ESCAPE '\'
                     OR language LIKE ?1 ESCAPE '\'
                     OR tags LIKE ?1 ESCAPE '\'
                     OR code LIKE ?1 ESCAPE '\'
                     OR notes LIKE ?1 ESCAPE '\'
                  ORDER BY updated_at DESC, id DESC
                  LIMIT ?2",
            )
            .map_err(from_rusqlite)?;

        let rows = stmt
            .query_map(rusqlite::params![pattern, limit], row_to_summary)
            .map_err(from_rusqlite)?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(from_rusqlite)?;

        Ok(rows)
    }

    /// Number of stored snippets
    pub fn count_snippets(conn: &Connection) -> Result<i64> {
        conn.query_row("SELECT COUNT(*) FROM snippets", [], |row| row.get(0))
            .map_err(from_rusqlite)
    }
}

/// Escape LIKE wildcards so user input matches literally
fn escape_like(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

fn row_to_snippet(row: &Row<'_>) -> rusqlite::Result<Snippet> {
    Ok(Snippet {
        id: row.get(0)?,
        title: row.get(1)?,
        language: row.get(2)?,
        tags: row.get(3)?,
        status: status_column(row, 4)?,
        code: row.get(5)?,
        notes: row.get(6)?,
        created_at: timestamp_column(row, 7)?,
        updated_at: timestamp_column(row, 8)?,
    })
}

fn row_to_summary(row: &Row<'_>) -> rusqlite::Result<SnippetSummary> {
    Ok(SnippetSummary {
        id: row.get(0)?,
        title: row.get(1)?,
        language: row.get(2)?,
        tags: row.get(3)?,
        status: status_column(row, 4)?,
    })
}

fn status_column(row: &Row<'_>, idx: usize) -> rusqlite::Result<Status> {
    let raw: String = row.get(idx)?;
    raw.parse::<Status>()
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}

fn timestamp_column(row: &Row<'_>, idx: usize) -> rusqlite::Result<DateTime<Utc>> {
    let millis: i64 = row.get(idx)?;
    DateTime::from_timestamp_millis(millis).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            idx,
            Type::Integer,
            format!("timestamp out of range: {}", millis).into(),
        )
    })
}
