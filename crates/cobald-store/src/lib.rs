//! CoBaLD Store - filesystem adapter for corpora and vocabularies
//!
//! Provides:
//! - Loading a corpus from CoNLL-U text or a snapshot (sniffed by magic bytes)
//! - Saving snapshots and exporting canonical CoNLL-U, both written atomically
//! - Loading closed vocabularies from YAML files

pub mod corpus_io;
pub mod errors;
pub mod fs;
pub mod vocab_file;

// Re-export key types
pub use corpus_io::{export_canonical, load, load_with_cursor, save, Loaded, SourceFormat};
pub use errors::Result;
pub use vocab_file::{load_vocabulary, parse_vocabulary_str};
