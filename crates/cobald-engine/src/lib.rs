//! CoBaLD Engine - editing sessions over a loaded corpus
//!
//! A `Session` is the synchronous API a hosting application talks to. It
//! keeps edits in per-sentence drafts, validates them on commit, and
//! coordinates the core operations with the filesystem adapter.

pub mod draft;
pub mod session;

pub use draft::Draft;
pub use session::{CommitOutcome, Session};
