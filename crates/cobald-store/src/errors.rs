//! Error helpers for cobald-store
//!
//! The store reports `CorpusError` like the core, so `load` and `save`
//! return the same error type the hosting application already handles.

use cobald_core::errors::CorpusError;

/// Result type alias using CorpusError
pub type Result<T> = std::result::Result<T, CorpusError>;

/// Create an IO error tagged with the failing operation
pub fn io_error(operation: &str, err: std::io::Error) -> CorpusError {
    CorpusError::io(operation, err)
}

/// Create a vocabulary file error
pub fn vocabulary_error(path: &str, reason: impl Into<String>) -> CorpusError {
    CorpusError::InvalidVocabulary {
        path: path.to_string(),
        reason: reason.into(),
    }
}
