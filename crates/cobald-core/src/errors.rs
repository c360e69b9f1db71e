use thiserror::Error;

use crate::model::Field;

/// Result type alias using CorpusError
pub type Result<T> = std::result::Result<T, CorpusError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that log consumers, tests, and the
/// CLI can match on without parsing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Parse
    MalformedToken,
    EmptyCorpus,
    InvalidIdentifier,
    OrphanToken,
    EmptySentence,
    DuplicateId,

    // Editing
    ValidationFailed,
    IndexOutOfRange,
    NotFound,
    UnknownField,

    // Persistence
    SnapshotCorrupt,
    InvalidVocabulary,
    Io,
    Serialization,

    // Internal
    Internal,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::MalformedToken => "ERR_MALFORMED_TOKEN",
            ExErrorKind::EmptyCorpus => "ERR_EMPTY_CORPUS",
            ExErrorKind::InvalidIdentifier => "ERR_INVALID_IDENTIFIER",
            ExErrorKind::OrphanToken => "ERR_ORPHAN_TOKEN",
            ExErrorKind::EmptySentence => "ERR_EMPTY_SENTENCE",
            ExErrorKind::DuplicateId => "ERR_DUPLICATE_ID",
            ExErrorKind::ValidationFailed => "ERR_VALIDATION_FAILED",
            ExErrorKind::IndexOutOfRange => "ERR_INDEX_OUT_OF_RANGE",
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::UnknownField => "ERR_UNKNOWN_FIELD",
            ExErrorKind::SnapshotCorrupt => "ERR_SNAPSHOT_CORRUPT",
            ExErrorKind::InvalidVocabulary => "ERR_INVALID_VOCABULARY",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }
}

/// Canonical structured error type
///
/// Flattened view of any `CorpusError` with classification fields for
/// programmatic handling and log output.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    sent_id: Option<String>,
    token_id: Option<String>,
    line: Option<usize>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            sent_id: None,
            token_id: None,
            line: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add sentence id context
    pub fn with_sent_id(mut self, id: impl Into<String>) -> Self {
        self.sent_id = Some(id.into());
        self
    }

    /// Add token identifier context
    pub fn with_token_id(mut self, id: impl Into<String>) -> Self {
        self.token_id = Some(id.into());
        self
    }

    /// Add source line context
    pub fn with_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Get the error kind
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

    pub fn sent_id(&self) -> Option<&str> {
        self.sent_id.as_deref()
    }

    pub fn token_id(&self) -> Option<&str> {
        self.token_id.as_deref()
    }

    pub fn line(&self) -> Option<usize> {
        self.line
    }

    pub fn message(&self) -> &str {
        &self.message
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
        if let Some(sent_id) = &self.sent_id {
            write!(f, " (sent_id: {})", sent_id)?;
        }
        if let Some(token_id) = &self.token_id {
            write!(f, " (token: {})", token_id)?;
        }
        if let Some(line) = self.line {
            write!(f, " (line: {})", line)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Why a field value was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationReason {
    /// Value is not a member of the closed vocabulary for the field
    NotInVocabulary,
    /// Soft-checked value was declined by the caller
    Unconfirmed,
    /// Head is neither digits nor the unset marker
    NotNumeric,
    /// Head points past the greatest integer identifier of the sentence
    OutOfBounds,
    /// Value does not parse for a structured column (DEPS)
    Malformed,
    /// Value contains a tab or line break
    ForbiddenCharacter,
}

impl std::fmt::Display for ValidationReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            ValidationReason::NotInVocabulary => "not in vocabulary",
            ValidationReason::Unconfirmed => "not confirmed",
            ValidationReason::NotNumeric => "not a number",
            ValidationReason::OutOfBounds => "out of bounds",
            ValidationReason::Malformed => "malformed",
            ValidationReason::ForbiddenCharacter => "contains a tab or line break",
        };
        f.write_str(text)
    }
}

/// A single rejected field value
///
/// The offending value is returned to the caller for highlighting; the
/// document is left unchanged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid {field} value '{value}': {reason}")]
pub struct ValidationError {
    pub field: Field,
    pub value: String,
    pub reason: ValidationReason,
}

impl ValidationError {
    pub fn new(field: Field, value: impl Into<String>, reason: ValidationReason) -> Self {
        Self {
            field,
            value: value.into(),
            reason,
        }
    }
}

/// Why a structural edit target was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexReason {
    /// Not a well-formed identifier string
    Malformed,
    /// Outside `[1, max integer id + 1]`
    OutOfRange,
    /// No token carries this identifier
    NotFound,
    /// Identifier kind cannot anchor the requested insert
    NotInsertable,
    /// Removing the target would leave the sentence without words
    LastWord,
}

impl std::fmt::Display for IndexReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            IndexReason::Malformed => "malformed identifier",
            IndexReason::OutOfRange => "out of range",
            IndexReason::NotFound => "no such token",
            IndexReason::NotInsertable => "cannot anchor this insert",
            IndexReason::LastWord => "sentence must keep at least one word",
        };
        f.write_str(text)
    }
}

/// A rejected insert/delete target; the sentence is left unchanged
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid token index '{target}': {reason}")]
pub struct IndexError {
    pub target: String,
    pub reason: IndexReason,
}

impl IndexError {
    pub fn new(target: impl Into<String>, reason: IndexReason) -> Self {
        Self {
            target: target.into(),
            reason,
        }
    }
}

/// Error taxonomy for corpus operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CorpusError {
    // ===== Parse Errors =====
    /// Data line did not split into exactly 12 tab-separated fields
    #[error("Token line {line} has {fields} fields instead of 12")]
    MalformedToken { line: usize, fields: usize },

    /// Input contained no sentences
    #[error("Corpus contains no sentences")]
    EmptyCorpus,

    /// Data line ID column is not a valid identifier
    #[error("Invalid token identifier '{value}' on line {line}")]
    InvalidIdentifier { line: usize, value: String },

    /// Data line appeared before any sent_id comment
    #[error("Token line {line} precedes any sent_id comment")]
    OrphanToken { line: usize },

    /// A sent_id block without data lines
    #[error("Sentence {sent_id} has no tokens")]
    EmptySentence { sent_id: String },

    /// Two sentences share a sent_id
    #[error("Duplicate sentence id: {sent_id}")]
    DuplicateSentenceId { sent_id: String },

    // ===== Editing Errors =====
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Index(#[from] IndexError),

    /// No sentence for this id or sequence number
    #[error("Sentence not found: {sentence}")]
    SentenceNotFound { sentence: String },

    /// Token position outside the sentence
    #[error("Token index {index} out of range for sentence {sent_id} with {len} tokens")]
    TokenIndexOutOfRange {
        sent_id: String,
        index: usize,
        len: usize,
    },

    /// Field name is not one of the editable columns
    #[error("Unknown field: {name}")]
    UnknownField { name: String },

    // ===== Persistence Errors =====
    /// Snapshot bytes failed magic, version, or digest checks
    #[error("Snapshot is corrupt: {reason}")]
    SnapshotCorrupt { reason: String },

    /// Vocabulary file is not a mapping of string lists
    #[error("Invalid vocabulary {path}: {reason}")]
    InvalidVocabulary { path: String, reason: String },

    /// Filesystem failure
    #[error("I/O error during {op}: {message}")]
    Io { op: String, message: String },

    /// Serialization error (JSON encoding/decoding)
    #[error("Serialization error: {message}")]
    Serialization { message: String },

    /// Broken internal contract between layers
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl CorpusError {
    /// Build an I/O error tagged with the failing operation
    pub fn io(op: &str, err: std::io::Error) -> Self {
        CorpusError::Io {
            op: op.to_string(),
            message: err.to_string(),
        }
    }
}

/// Conversion from CorpusError to ExError
impl From<CorpusError> for ExError {
    fn from(err: CorpusError) -> Self {
        match err {
            CorpusError::MalformedToken { line, fields } => {
                ExError::new(ExErrorKind::MalformedToken)
                    .with_op("parse")
                    .with_line(line)
                    .with_message(format!("{} fields instead of 12", fields))
            }
            CorpusError::EmptyCorpus => ExError::new(ExErrorKind::EmptyCorpus)
                .with_op("parse")
                .with_message("No sentences found"),
            CorpusError::InvalidIdentifier { line, value } => {
                ExError::new(ExErrorKind::InvalidIdentifier)
                    .with_op("parse")
                    .with_line(line)
                    .with_token_id(value)
            }
            CorpusError::OrphanToken { line } => ExError::new(ExErrorKind::OrphanToken)
                .with_op("parse")
                .with_line(line)
                .with_message("Token line before any sent_id"),
            CorpusError::EmptySentence { sent_id } => ExError::new(ExErrorKind::EmptySentence)
                .with_op("parse")
                .with_sent_id(sent_id),
            CorpusError::DuplicateSentenceId { sent_id } => ExError::new(ExErrorKind::DuplicateId)
                .with_op("parse")
                .with_sent_id(sent_id),
            CorpusError::Validation(err) => ExError::new(ExErrorKind::ValidationFailed)
                .with_op("validate")
                .with_message(err.to_string()),
            CorpusError::Index(err) => ExError::new(ExErrorKind::IndexOutOfRange)
                .with_token_id(err.target.clone())
                .with_message(err.reason.to_string()),
            CorpusError::SentenceNotFound { sentence } => {
                ExError::new(ExErrorKind::NotFound).with_sent_id(sentence)
            }
            CorpusError::TokenIndexOutOfRange {
                sent_id,
                index,
                len,
            } => ExError::new(ExErrorKind::IndexOutOfRange)
                .with_sent_id(sent_id)
                .with_message(format!("token index {} of {}", index, len)),
            CorpusError::UnknownField { name } => {
                ExError::new(ExErrorKind::UnknownField).with_message(name)
            }
            CorpusError::SnapshotCorrupt { reason } => ExError::new(ExErrorKind::SnapshotCorrupt)
                .with_op("restore")
                .with_message(reason),
            CorpusError::InvalidVocabulary { path, reason } => {
                ExError::new(ExErrorKind::InvalidVocabulary)
                    .with_op("load_vocabulary")
                    .with_message(format!("{}: {}", path, reason))
            }
            CorpusError::Io { op, message } => ExError::new(ExErrorKind::Io)
                .with_op(op)
                .with_message(message),
            CorpusError::Serialization { message } => {
                ExError::new(ExErrorKind::Serialization).with_message(message)
            }
            CorpusError::Internal { message } => {
                ExError::new(ExErrorKind::Internal).with_message(message)
            }
        }
    }
}

impl From<ValidationError> for ExError {
    fn from(err: ValidationError) -> Self {
        CorpusError::from(err).into()
    }
}

impl From<IndexError> for ExError {
    fn from(err: IndexError) -> Self {
        CorpusError::from(err).into()
    }
}

/// Conversion from serde_json::Error to CorpusError
impl From<serde_json::Error> for CorpusError {
    fn from(err: serde_json::Error) -> Self {
        CorpusError::Serialization {
            message: err.to_string(),
        }
    }
}
