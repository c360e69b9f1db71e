#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use cobald_core::errors::CorpusError;
use cobald_core::snapshot::{compute_document_digest, is_snapshot, restore, snapshot, SNAPSHOT_MAGIC};
use cobald_core::{parse, Cursor};
use common::{arb_document, SCENARIO_A};
use proptest::prelude::*;

#[test]
fn test_snapshot_keeps_document_and_cursor() {
    // GIVEN a parsed corpus positioned on its only sentence
    let doc = parse(SCENARIO_A).unwrap();

    // WHEN saving then restoring a snapshot
    let bytes = snapshot(&doc, Cursor::default()).unwrap();
    let restored = restore(&bytes).unwrap();

    // THEN document, cursor, and digest survive
    assert!(is_snapshot(&bytes));
    assert_eq!(restored.document, doc);
    assert_eq!(restored.cursor.get(), 1);
    assert_eq!(
        compute_document_digest(&restored.document).unwrap(),
        compute_document_digest(&doc).unwrap()
    );
}

#[test]
fn test_plain_conllu_is_not_a_snapshot() {
    assert!(!is_snapshot(SCENARIO_A.as_bytes()));
    assert!(matches!(
        restore(SCENARIO_A.as_bytes()),
        Err(CorpusError::SnapshotCorrupt { .. })
    ));
}

#[test]
fn test_unknown_format_version_is_rejected() {
    let bytes = snapshot(&parse(SCENARIO_A).unwrap(), Cursor::default()).unwrap();
    let body = String::from_utf8(bytes[SNAPSHOT_MAGIC.len()..].to_vec()).unwrap();
    let bumped = body.replacen("\"format_version\":1", "\"format_version\":9", 1);
    let mut forged = SNAPSHOT_MAGIC.to_vec();
    forged.extend_from_slice(bumped.as_bytes());

    match restore(&forged) {
        Err(CorpusError::SnapshotCorrupt { reason }) => assert!(reason.contains("version 9")),
        other => panic!("expected SnapshotCorrupt, got {:?}", other),
    }
}

#[test]
fn test_digest_is_stable_and_content_sensitive() {
    let doc = parse(SCENARIO_A).unwrap();
    let first = compute_document_digest(&doc).unwrap();
    assert_eq!(first, compute_document_digest(&doc.clone()).unwrap());
    assert_eq!(first.len(), 64);

    let mut edited = doc;
    edited.get_mut(1).unwrap().checked = true;
    assert_ne!(first, compute_document_digest(&edited).unwrap());
}

proptest! {
    #[test]
    fn prop_snapshot_restore_is_identity(doc in arb_document(), cursor in 1usize..4) {
        let requested = Cursor::resolve(Some(cursor), doc.len());
        let restored = restore(&snapshot(&doc, requested).unwrap()).unwrap();
        prop_assert_eq!(restored.cursor, requested);
        prop_assert_eq!(restored.document, doc);
    }
}
