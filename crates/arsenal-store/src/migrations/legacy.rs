//! Adoption of a `snippets` table created before schema versioning
//!
//! Older databases hold the same columns but keep timestamps as
//! `YYYY-MM-DD HH:MM:SS` text, allow NULL notes and do not constrain status.
//! When `001_initial_schema` is first applied to such a database, the table is
//! set aside, recreated with the current layout and its rows copied across
//! with their ids.

use crate::errors::{from_rusqlite, incompatible_schema, Result};
use rusqlite::Connection;

/// Migration whose table an older database may already contain
pub const INITIAL_SCHEMA_ID: &str = "001_initial_schema";

const SNIPPET_COLUMNS: [&str; 9] = [
    "id",
    "title",
    "language",
    "tags",
    "status",
    "code",
    "notes",
    "created_at",
    "updated_at",
];

/// Column names and declared types of `snippets`, empty when absent
fn snippet_columns(conn: &Connection) -> Result<Vec<(String, String)>> {
    let mut stmt = conn
        .prepare("PRAGMA table_info(snippets)")
        .map_err(from_rusqlite)?;
    let columns = stmt
        .query_map([], |row| Ok((row.get(1)?, row.get(2)?)))
        .map_err(from_rusqlite)?
        .collect::<std::result::Result<Vec<(String, String)>, _>>()
        .map_err(from_rusqlite)?;
    Ok(columns)
}

/// Rename an older `snippets` table out of the way
///
/// Returns `true` when a table was set aside and must be imported once the
/// initial schema exists.
///
/// # Errors
/// * `ConstraintViolation` - the existing table has a layout this store cannot adopt
pub fn set_aside_legacy_table(conn: &Connection) -> Result<bool> {
    let columns = snippet_columns(conn)?;
    if columns.is_empty() {
        return Ok(false);
    }

    let names: Vec<&str> = columns.iter().map(|(name, _)| name.as_str()).collect();
    if names != SNIPPET_COLUMNS {
        return Err(incompatible_schema(&format!(
            "unexpected snippets columns: {}",
            names.join(", ")
        )));
    }

    let timestamp_type = columns[7].1.to_ascii_uppercase();
    match timestamp_type.as_str() {
        "INTEGER" => Ok(false),
        "TEXT" => {
            conn.execute_batch("ALTER TABLE snippets RENAME TO snippets_legacy")
                .map_err(from_rusqlite)?;
            Ok(true)
        }
        other => Err(incompatible_schema(&format!(
            "unsupported created_at column type '{}'",
            other
        ))),
    }
}

/// Copy rows from the set-aside table into the fresh `snippets` table
///
/// Text timestamps become epoch milliseconds (unparseable values become 0),
/// NULL notes become empty and unknown statuses become `draft`. The
/// AUTOINCREMENT counter carries over so deleted ids stay retired.
pub fn import_legacy_rows(conn: &Connection) -> Result<usize> {
    let imported = conn
        .execute(
            "INSERT INTO snippets (id, title, language, tags, status, code, notes, created_at, updated_at)
             SELECT id, title, language, tags,
                    CASE WHEN lower(trim(status)) IN ('draft', 'tested', 'prod')
                         THEN lower(trim(status)) ELSE 'draft' END,
                    code,
                    COALESCE(notes, ''),
                    COALESCE(CAST(strftime('%s', created_at) AS INTEGER), 0) * 1000,
                    COALESCE(CAST(strftime('%s', updated_at) AS INTEGER),
                             CAST(strftime('%s', created_at) AS INTEGER), 0) * 1000
             FROM snippets_legacy
             ORDER BY id",
            [],
        )
        .map_err(from_rusqlite)?;

    conn.execute_batch(
        "UPDATE sqlite_sequence
            SET seq = max(seq, COALESCE((SELECT seq FROM sqlite_sequence WHERE name = 'snippets_legacy'), 0))
          WHERE name = 'snippets';
         INSERT INTO sqlite_sequence (name, seq)
         SELECT 'snippets', seq FROM sqlite_sequence
          WHERE name = 'snippets_legacy'
            AND NOT EXISTS (SELECT 1 FROM sqlite_sequence WHERE name = 'snippets');
         DROP TABLE snippets_legacy;",
    )
    .map_err(from_rusqlite)?;

    Ok(imported)
}
