use crate::errors::{Result, SnippetError};
use crate::model::SnippetDraft;

use super::tags::normalize_tags;

/// Validate and normalise editor form contents
///
/// Trims title, language, code and notes, normalises tags, then checks the
/// required fields in form order: title, language, tags, code. Notes may be
/// empty.
///
/// # Errors
/// * `MissingField` - naming the first required field that is empty. A tags
///   value made only of separators counts as empty.
pub fn validate_draft(draft: SnippetDraft) -> Result<SnippetDraft> {
    let normalized = SnippetDraft {
        title: draft.title.trim().to_string(),
        language: draft.language.trim().to_string(),
        tags: normalize_tags(&draft.tags),
        status: draft.status,
        code: draft.code.trim().to_string(),
        notes: draft.notes.trim().to_string(),
    };

    let required = [
        ("title", &normalized.title),
        ("language", &normalized.language),
        ("tags", &normalized.tags),
        ("code", &normalized.code),
    ];
    if let Some((field, _)) = required.into_iter().find(|(_, value)| value.is_empty()) {
        return Err(SnippetError::MissingField { field });
    }

    Ok(normalized)
}
