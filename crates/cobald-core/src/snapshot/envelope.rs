use std::time::Instant;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::digest::compute_document_digest;
use crate::errors::{CorpusError, Result};
use crate::model::{Cursor, Document};
use crate::{log_op_end, log_op_error, log_op_start};

/// Leading bytes of every snapshot
pub const SNAPSHOT_MAGIC: &[u8; 8] = b"COBALD\x00\x01";

/// Envelope layout version written by this build
pub const FORMAT_VERSION: u32 = 1;

/// JSON body following the magic bytes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapshotEnvelope {
    pub format_version: u32,
    pub created_at: DateTime<Utc>,
    pub cursor: Cursor,
    pub document_digest: String,
    pub document: Document,
}

/// A verified snapshot
#[derive(Debug, Clone, PartialEq)]
pub struct Restored {
    pub document: Document,
    /// Cursor stored in the snapshot, reset to 1 if it no longer fits
    pub cursor: Cursor,
    pub created_at: DateTime<Utc>,
}

/// True if `bytes` start with the snapshot magic
pub fn is_snapshot(bytes: &[u8]) -> bool {
    bytes.starts_with(SNAPSHOT_MAGIC)
}

/// Encode a document and cursor as snapshot bytes
///
/// # Errors
/// Returns `CorpusError::Serialization` if JSON encoding fails.
pub fn snapshot(doc: &Document, cursor: Cursor) -> Result<Vec<u8>> {
    log_op_start!("snapshot", sentence_count = doc.len());
    let start = Instant::now();

    let result = encode(doc, cursor);

    match &result {
        Ok(bytes) => {
            log_op_end!(
                "snapshot",
                duration_ms = start.elapsed().as_millis() as u64,
                bytes = bytes.len()
            );
        }
        Err(e) => {
            log_op_error!(
                "snapshot",
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64
            );
        }
    }
    result
}

fn encode(doc: &Document, cursor: Cursor) -> Result<Vec<u8>> {
    let envelope = SnapshotEnvelope {
        format_version: FORMAT_VERSION,
        created_at: Utc::now(),
        cursor,
        document_digest: compute_document_digest(doc)?,
        document: doc.clone(),
    };
    let mut bytes = SNAPSHOT_MAGIC.to_vec();
    serde_json::to_writer(&mut bytes, &envelope)?;
    Ok(bytes)
}

/// Decode and verify snapshot bytes
///
/// # Errors
/// `SnapshotCorrupt` when the magic, format version, JSON body, or document
/// digest does not check out.
pub fn restore(bytes: &[u8]) -> Result<Restored> {
    log_op_start!("restore", bytes = bytes.len());
    let start = Instant::now();

    let result = decode(bytes);

    match &result {
        Ok(restored) => {
            log_op_end!(
                "restore",
                duration_ms = start.elapsed().as_millis() as u64,
                sentence_count = restored.document.len(),
                cursor = restored.cursor.get()
            );
        }
        Err(e) => {
            log_op_error!(
                "restore",
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64
            );
        }
    }
    result
}

fn corrupt(reason: impl Into<String>) -> CorpusError {
    CorpusError::SnapshotCorrupt {
        reason: reason.into(),
    }
}

fn decode(bytes: &[u8]) -> Result<Restored> {
    let body = bytes
        .strip_prefix(SNAPSHOT_MAGIC.as_slice())
        .ok_or_else(|| corrupt("missing snapshot header"))?;
    let envelope: SnapshotEnvelope =
        serde_json::from_slice(body).map_err(|e| corrupt(format!("unreadable body: {}", e)))?;

    if envelope.format_version != FORMAT_VERSION {
        return Err(corrupt(format!(
            "unsupported format version {}",
            envelope.format_version
        )));
    }
    if envelope.document.is_empty() {
        return Err(corrupt("snapshot holds no sentences"));
    }
    let digest = compute_document_digest(&envelope.document)?;
    if digest != envelope.document_digest {
        return Err(corrupt("document digest mismatch"));
    }

    let cursor = Cursor::resolve(Some(envelope.cursor.get()), envelope.document.len());
    Ok(Restored {
        document: envelope.document,
        cursor,
        created_at: envelope.created_at,
    })
}
