use thiserror::Error;

/// Result type alias using SnippetError
pub type Result<T> = std::result::Result<T, SnippetError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that can be used for programmatic
/// error handling, testing, and CLI exit reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Structural/Validation
    InvalidTitle,
    InvalidStatus,
    MissingField,
    NotFound,
    ConstraintViolation,

    // Integration/IO
    Io,
    Persistence,
    Config,
    Clipboard,

    // Internal
    Internal,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidTitle => "ERR_INVALID_TITLE",
            ExErrorKind::InvalidStatus => "ERR_INVALID_STATUS",
            ExErrorKind::MissingField => "ERR_MISSING_FIELD",
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::ConstraintViolation => "ERR_CONSTRAINT_VIOLATION",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Persistence => "ERR_PERSISTENCE",
            ExErrorKind::Config => "ERR_CONFIG",
            ExErrorKind::Clipboard => "ERR_CLIPBOARD",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }
}

/// Canonical structured error type
///
/// Carries a classification kind for programmatic handling plus optional
/// context (operation, entity id, message) for humans.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    entity_id: Option<String>,
    message: String,
    source: Option<Box<ExError>>,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            entity_id: None,
            message: String::new(),
            source: None,
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add entity ID context
    pub fn with_entity_id(mut self, id: impl Into<String>) -> Self {
        self.entity_id = Some(id.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Add source error
    pub fn with_source(mut self, source: ExError) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn entity_id(&self) -> Option<&str> {
        self.entity_id.as_deref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn source_error(&self) -> Option<&ExError> {
        self.source.as_deref()
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(entity_id) = &self.entity_id {
            write!(f, " (snippet_id: {})", entity_id)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

// ========== End Error Facility ==========

/// Domain error taxonomy for snippet operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SnippetError {
    /// A required form field was empty after trimming
    #[error("Missing required field: {field} (title, language, tags, and code are required)")]
    MissingField { field: &'static str },

    /// Status is not one of draft / tested / prod
    #[error("Invalid status '{value}': expected one of draft, tested, prod")]
    InvalidStatus { value: String },

    /// Snippet not found in store
    #[error("Snippet not found: {snippet_id}")]
    SnippetNotFound { snippet_id: i64 },
}

/// Conversion from SnippetError to ExError
impl From<SnippetError> for ExError {
    fn from(err: SnippetError) -> Self {
        match err {
            SnippetError::MissingField { field } => {
                let kind = if field == "title" {
                    ExErrorKind::InvalidTitle
                } else {
                    ExErrorKind::MissingField
                };
                ExError::new(kind)
                    .with_op("validate_draft")
                    .with_message(format!(
                        "{} is required (title, language, tags, and code are required)",
                        field
                    ))
            }

            SnippetError::InvalidStatus { value } => ExError::new(ExErrorKind::InvalidStatus)
                .with_message(format!(
                    "Invalid status '{}': expected one of draft, tested, prod",
                    value
                )),

            SnippetError::SnippetNotFound { snippet_id } => ExError::new(ExErrorKind::NotFound)
                .with_entity_id(snippet_id.to_string())
                .with_message("Snippet not found"),
        }
    }
}
