//! CoBaLD Core - in-memory engine for annotated sentence corpora
//!
//! This crate provides the document model and every pure operation on it:
//! - Token identifier algebra (integer, decimal, and range identifiers)
//! - Parsing and serializing 12-column CoNLL-U text
//! - Structural edits that renumber tokens and rewrite references
//! - Commit validation against closed vocabularies, plus a structural audit
//! - Undo/redo edit log and the `apply()` command boundary
//! - Snapshot encoding with digest verification
//!
//! Filesystem access lives in `cobald-store`; sessions live in `cobald-engine`.

pub mod apply;
pub mod commands;
pub mod conllu;
pub mod edit_log;
pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod ops;
pub mod policy;
pub mod queries;
pub mod render;
pub mod rules;
pub mod snapshot;
pub mod vocab;

pub use cobald_core_types::schema;

// Re-export commonly used types
pub use apply::{apply, Applied, Effect};
pub use commands::Command;
pub use conllu::{parse, serialize};
pub use edit_log::{EditEntry, EditLog, FieldEdit};
pub use errors::{CorpusError, ExError, ExErrorKind, IndexError, Result, ValidationError};
pub use model::{Cursor, Document, Field, Identifier, Sentence, Token};
pub use ops::{Anchor, InsertKind};
pub use policy::{AcceptUnknown, ConfirmHook, RejectUnknown};
pub use rules::{FieldVerdict, ValidationScope, Validator};
pub use vocab::{Vocabulary, VocabularySet};
