//! Deterministic document digests
//!
//! The digest is the SHA256 of the document's canonical JSON encoding, so
//! the same document always yields the same 64-character hex string.

use sha2::{Digest, Sha256};

use crate::errors::Result;
use crate::model::Document;

/// Compute the digest of a whole document
///
/// # Errors
/// Returns `CorpusError::Serialization` if JSON encoding fails.
pub fn compute_document_digest(doc: &Document) -> Result<String> {
    let canonical = serde_json::to_string(doc)?;
    Ok(hash_string(&canonical))
}

fn hash_string(s: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(s.as_bytes());
    hex::encode(hasher.finalize())
}
