//! Snippet Arsenal Core - domain model and rules
//!
//! This crate provides the foundational data structures and rules for the
//! snippet store, including:
//! - Snippet, SnippetDraft and SnippetSummary models
//! - Status taxonomy (draft / tested / prod)
//! - Tag normalisation and draft validation
//! - Canonical error facility and structured logging facility

pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod rules;

// Re-export commonly used types
pub use errors::{ExError, ExErrorKind, Result, SnippetError};
pub use model::{Snippet, SnippetDraft, SnippetSummary, Status};
