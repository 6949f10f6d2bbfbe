use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::status::Status;
use crate::errors::Result;
use crate::rules::{tags, validation};

/// Language preset for a fresh editor form
pub const DEFAULT_LANGUAGE: &str = "py";

/// Snippet - a stored piece of code plus descriptive metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snippet {
    /// Locally-unique identifier (SQLite rowid, never reused)
    pub id: i64,

    /// Human-readable title
    pub title: String,

    /// Free-form language label, e.g. `py`, `rust`, `sql`
    pub language: String,

    /// Normalised comma-separated tags (`a,b,c`)
    pub tags: String,

    pub status: Status,

    /// The snippet body
    pub code: String,

    /// Optional free-form notes (empty when absent)
    pub notes: String,

    /// Timestamp when this Snippet was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when this Snippet was last saved
    pub updated_at: DateTime<Utc>,
}

impl Snippet {
    /// Build a Snippet from already-validated draft contents
    ///
    /// Both timestamps are set to `now`.
    pub fn from_draft(id: i64, draft: SnippetDraft, now: DateTime<Utc>) -> Self {
        Self {
            id,
            title: draft.title,
            language: draft.language,
            tags: draft.tags,
            status: draft.status,
            code: draft.code,
            notes: draft.notes,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace the editable fields with `draft`, keeping id and created_at
    pub fn apply_draft(&mut self, draft: SnippetDraft, now: DateTime<Utc>) {
        self.title = draft.title;
        self.language = draft.language;
        self.tags = draft.tags;
        self.status = draft.status;
        self.code = draft.code;
        self.notes = draft.notes;
        self.updated_at = now;
    }

    /// Editor form contents for this snippet
    pub fn to_draft(&self) -> SnippetDraft {
        SnippetDraft {
            title: self.title.clone(),
            language: self.language.clone(),
            tags: self.tags.clone(),
            status: self.status,
            code: self.code.clone(),
            notes: self.notes.clone(),
        }
    }

    /// Tags as a list
    pub fn tag_list(&self) -> Vec<String> {
        tags::split_tags(&self.tags)
    }
}

/// Lightweight search result row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnippetSummary {
    pub id: i64,
    pub title: String,
    pub language: String,
    pub tags: String,
    pub status: Status,
}

/// Unsaved editor form contents
///
/// A draft carries raw user input; call [`SnippetDraft::normalized`] before
/// persisting it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnippetDraft {
    pub title: String,
    pub language: String,
    /// Raw comma-separated tags as typed
    pub tags: String,
    pub status: Status,
    pub code: String,
    pub notes: String,
}

impl Default for SnippetDraft {
    /// A cleared form: language `py`, status `draft`, everything else empty
    fn default() -> Self {
        Self {
            title: String::new(),
            language: DEFAULT_LANGUAGE.to_string(),
            tags: String::new(),
            status: Status::Draft,
            code: String::new(),
            notes: String::new(),
        }
    }
}

impl SnippetDraft {
    /// Trim every field, normalise tags, and check required fields
    ///
    /// # Errors
    /// * `MissingField` - If title, language, tags or code is empty after trimming
    pub fn normalized(self) -> Result<SnippetDraft> {
        validation::validate_draft(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_draft() -> SnippetDraft {
        SnippetDraft {
            title: "Read file".to_string(),
            language: "rust".to_string(),
            tags: "io,fs".to_string(),
            status: Status::Tested,
            code: "std::fs::read_to_string(p)?".to_string(),
            notes: String::new(),
        }
    }

    #[test]
    fn test_default_draft_is_cleared_form() {
        let draft = SnippetDraft::default();
        assert_eq!(draft.language, "py");
        assert_eq!(draft.status, Status::Draft);
        assert!(draft.title.is_empty());
        assert!(draft.code.is_empty());
    }

    #[test]
    fn test_from_draft_sets_both_timestamps() {
        let now = Utc::now();
        let snippet = Snippet::from_draft(7, sample_draft(), now);

        assert_eq!(snippet.id, 7);
        assert_eq!(snippet.created_at, now);
        assert_eq!(snippet.updated_at, now);
        assert_eq!(snippet.tag_list(), vec!["io", "fs"]);
    }

    #[test]
    fn test_apply_draft_keeps_identity_and_creation_time() {
        let created = Utc::now();
        let mut snippet = Snippet::from_draft(3, sample_draft(), created);

        let mut draft = snippet.to_draft();
        draft.title = "Read file to string".to_string();
        let later = created + chrono::Duration::seconds(5);
        snippet.apply_draft(draft, later);

        assert_eq!(snippet.id, 3);
        assert_eq!(snippet.title, "Read file to string");
        assert_eq!(snippet.created_at, created);
        assert_eq!(snippet.updated_at, later);
    }
}
