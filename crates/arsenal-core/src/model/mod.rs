pub mod snippet;
pub mod status;

pub use snippet::{Snippet, SnippetDraft, SnippetSummary, DEFAULT_LANGUAGE};
pub use status::Status;
