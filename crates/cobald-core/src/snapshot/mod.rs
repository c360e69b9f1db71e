//! Snapshot codec for fast reload of work in progress
//!
//! ## Layout
//!
//! 8 magic bytes (`COBALD\0\x01`) followed by a JSON envelope carrying the
//! format version, creation time, cursor, document digest, and the whole
//! document including its translation language and flag.
//!
//! ## Non-Responsibilities
//!
//! - Filesystem access (handled by `cobald-store`)

pub mod digest;
pub mod envelope;

pub use digest::compute_document_digest;
pub use envelope::{
    is_snapshot, restore, snapshot, Restored, SnapshotEnvelope, FORMAT_VERSION, SNAPSHOT_MAGIC,
};
