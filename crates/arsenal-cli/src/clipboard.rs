//! Clipboard copy of snippet code

use arsenal_core::errors::{ExError, ExErrorKind};
use arsenal_engine::{apply_engine_query, EngineQuery, EngineQueryResult};
use rusqlite::Connection;

/// Destination for copied text
pub trait ClipboardSink {
    fn set_text(&mut self, text: &str) -> Result<(), ExError>;
}

/// The desktop clipboard
///
/// On X11 and Wayland the text stays available after exit only when a
/// clipboard manager takes ownership of it.
pub struct SystemClipboard {
    inner: arboard::Clipboard,
}

impl SystemClipboard {
    pub fn new() -> Result<Self, ExError> {
        let inner = arboard::Clipboard::new().map_err(clipboard_error)?;
        Ok(Self { inner })
    }
}

impl ClipboardSink for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ExError> {
        self.inner
            .set_text(text.to_string())
            .map_err(clipboard_error)
    }
}

fn clipboard_error(err: arboard::Error) -> ExError {
    ExError::new(ExErrorKind::Clipboard)
        .with_op("clipboard")
        .with_message(err.to_string())
}

/// Copy a snippet's trimmed code into `sink`
///
/// Returns `false` without touching the sink when the code is blank.
pub fn copy_snippet_code(
    conn: &Connection,
    snippet_id: i64,
    sink: &mut dyn ClipboardSink,
) -> Result<bool, ExError> {
    match apply_engine_query(EngineQuery::SnippetCopyText { snippet_id }, conn)? {
        EngineQueryResult::CopyText(Some(code)) => {
            sink.set_text(&code)?;
            Ok(true)
        }
        EngineQueryResult::CopyText(None) => Ok(false),
        _ => Err(ExError::new(ExErrorKind::Internal)
            .with_op("copy_snippet_code")
            .with_message("unexpected query result")),
    }
}
