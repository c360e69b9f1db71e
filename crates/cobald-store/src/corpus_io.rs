//! Corpus files: load, save, export
//!
//! A corpus file is either CoNLL-U text or a snapshot. `load` tells them
//! apart by the snapshot magic bytes, so callers never pass a format.

use std::fs;
use std::path::Path;
use std::time::Instant;

use cobald_core::snapshot::{is_snapshot, restore, snapshot};
use cobald_core::{log_op_end, log_op_error, log_op_start};
use cobald_core::{parse, serialize, Cursor, Document};

use crate::errors::{io_error, Result};
use crate::fs::atomic_write;

/// How a loaded file was encoded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Conllu,
    Snapshot,
}

/// A loaded corpus and the sentence to open first
#[derive(Debug, Clone, PartialEq)]
pub struct Loaded {
    pub document: Document,
    pub cursor: Cursor,
    pub format: SourceFormat,
}

/// Load a corpus from CoNLL-U text or a snapshot
///
/// # Errors
/// Any parse error of the text (`MalformedToken`, `EmptyCorpus`, ...),
/// `SnapshotCorrupt` for a damaged snapshot, `Io` if the file is unreadable.
pub fn load(path: &Path) -> Result<Document> {
    load_with_cursor(path, None).map(|loaded| loaded.document)
}

/// Load a corpus and position the cursor
///
/// The cursor is `requested` when it names an existing sentence. Otherwise a
/// snapshot's stored cursor is used, and text files start at 1.
///
/// # Errors
/// Same conditions as [`load`].
pub fn load_with_cursor(path: &Path, requested: Option<usize>) -> Result<Loaded> {
    log_op_start!("load", path = %path.display());
    let start = Instant::now();

    let result = load_impl(path, requested);

    match &result {
        Ok(loaded) => {
            log_op_end!(
                "load",
                duration_ms = start.elapsed().as_millis() as u64,
                path = %path.display(),
                format = ?loaded.format,
                sentence_count = loaded.document.len(),
                cursor = loaded.cursor.get()
            );
        }
        Err(e) => {
            log_op_error!(
                "load",
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64,
                path = %path.display()
            );
        }
    }
    result
}

fn load_impl(path: &Path, requested: Option<usize>) -> Result<Loaded> {
    let bytes = fs::read(path).map_err(|e| io_error("read_corpus", e))?;

    if is_snapshot(&bytes) {
        let restored = restore(&bytes)?;
        let len = restored.document.len();
        let cursor = match requested {
            Some(n) if (1..=len).contains(&n) => Cursor::resolve(Some(n), len),
            _ => restored.cursor,
        };
        return Ok(Loaded {
            document: restored.document,
            cursor,
            format: SourceFormat::Snapshot,
        });
    }

    let text = String::from_utf8(bytes).map_err(|e| {
        io_error(
            "read_corpus",
            std::io::Error::new(std::io::ErrorKind::InvalidData, e),
        )
    })?;
    let document = parse(&text)?;
    let cursor = Cursor::resolve(requested, document.len());
    Ok(Loaded {
        document,
        cursor,
        format: SourceFormat::Conllu,
    })
}

/// Save a snapshot of the document and cursor
///
/// # Errors
/// `Serialization` if encoding fails, `Io` if the write fails.
pub fn save(document: &Document, cursor: Cursor, path: &Path) -> Result<()> {
    log_op_start!("save", path = %path.display());
    let start = Instant::now();

    let result = snapshot(document, cursor).and_then(|bytes| atomic_write(path, &bytes));

    match &result {
        Ok(()) => {
            log_op_end!(
                "save",
                duration_ms = start.elapsed().as_millis() as u64,
                path = %path.display(),
                sentence_count = document.len()
            );
        }
        Err(e) => {
            log_op_error!(
                "save",
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64,
                path = %path.display()
            );
        }
    }
    result
}

/// Write the document as canonical CoNLL-U text
///
/// # Errors
/// `Io` if the write fails.
pub fn export_canonical(document: &Document, path: &Path) -> Result<()> {
    log_op_start!("export", path = %path.display());
    let start = Instant::now();

    let result = atomic_write(path, serialize(document).as_bytes());

    match &result {
        Ok(()) => {
            log_op_end!(
                "export",
                duration_ms = start.elapsed().as_millis() as u64,
                path = %path.display(),
                sentence_count = document.len()
            );
        }
        Err(e) => {
            log_op_error!(
                "export",
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64,
                path = %path.display()
            );
        }
    }
    result
}
