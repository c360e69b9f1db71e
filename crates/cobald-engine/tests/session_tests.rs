#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use cobald_core::errors::{CorpusError, ValidationReason};
use cobald_core::model::Head;
use cobald_core::{AcceptUnknown, Anchor, Field, Identifier, InsertKind, RejectUnknown};
use cobald_engine::{CommitOutcome, Session};
use common::{new_session, test_vocab, CORPUS};

#[test]
fn test_scenario_e_commit_rejects_out_of_bounds_head() {
    // GIVEN sentence s2 whose greatest word is 5
    let mut session = new_session();
    let before = session.document().clone();

    // WHEN word 3 is pointed at 99 and committed
    session.set_field("s2", 2, Field::Head, "99").unwrap();
    let err = session.commit("s2", &AcceptUnknown).unwrap_err();

    // THEN the error names the head value and nothing was persisted
    match err {
        CorpusError::Validation(e) => {
            assert_eq!(e.field, Field::Head);
            assert_eq!(e.value, "99");
            assert_eq!(e.reason, ValidationReason::OutOfBounds);
        }
        other => panic!("expected Validation, got {:?}", other),
    }
    assert_eq!(session.document(), &before);
    assert_eq!(session.pending_drafts(), vec!["s2"]);
}

#[test]
fn test_slot_gating_never_mutates_document() {
    // GIVEN a valid edit and an invalid slot in the same sentence
    let mut session = new_session();
    let before = session.document().clone();
    session.set_field("s1", 0, Field::Lemma, "hi").unwrap();
    session.set_field("s1", 1, Field::SemSlot, "Nowhere").unwrap();

    // WHEN committing
    let err = session.commit("s1", &AcceptUnknown).unwrap_err();

    // THEN the valid edit is not partially persisted either
    assert!(matches!(err, CorpusError::Validation(ref e) if e.field == Field::SemSlot));
    assert_eq!(session.document(), &before);
}

#[test]
fn test_structural_edit_then_commit() {
    // GIVEN sentence s2
    let mut session = new_session();

    // WHEN inserting a word at 2 and filling it in
    let outcome = session
        .insert_token("s2", Anchor::At(Identifier::Integer(2)), InsertKind::Integer)
        .unwrap();
    assert_eq!(outcome.new_id, Identifier::Integer(2));
    for (field, value) in [
        (Field::Form, "and"),
        (Field::Head, "1"),
        (Field::Deprel, "dep"),
        (Field::SemSlot, "SLOT1"),
        (Field::SemClass, "CLASS1"),
    ] {
        session.set_field("s2", 1, field, value).unwrap();
    }
    let outcome = session.commit("s2", &AcceptUnknown).unwrap();

    // THEN the committed sentence has six words with heads intact
    assert_eq!(outcome, CommitOutcome::Committed { edits: 6 });
    let s2 = session.sentence(2).unwrap();
    assert_eq!(s2.word_count(), 6);
    assert_eq!(s2.tokens[1].form, "and");
    assert_eq!(s2.tokens[2].form, "two");
    assert_eq!(s2.tokens[2].head, Head::Token(1));
}

#[test]
fn test_delete_reports_dangling_and_blocks_commit_until_fixed() {
    // GIVEN s1 where word 2 heads on word 1
    let mut session = new_session();

    // WHEN deleting word 1
    let outcome = session.delete_token("s1", Identifier::Integer(1)).unwrap();

    // THEN the cleared head is reported and the remaining word is unset
    assert_eq!(outcome.dangling.len(), 1);
    let working = session.working_sentence("s1").unwrap();
    assert_eq!(working.tokens[0].form, "world");
    assert_eq!(working.tokens[0].head, Head::Unset);

    // AND an unset head is still committable
    session.commit("s1", &AcceptUnknown).unwrap();
    assert_eq!(session.sentence(1).unwrap().word_count(), 1);
}

#[test]
fn test_undo_redo_through_session() {
    let mut session = new_session();
    session.set_field("s3", 0, Field::Form, "Ciao").unwrap();
    session.set_comment("s3", "greeting").unwrap();

    assert!(session.undo("s3").unwrap());
    assert!(session.undo("s3").unwrap());
    assert!(!session.undo("s3").unwrap());
    assert!(session.pending_drafts().is_empty());

    assert!(session.redo("s3").unwrap());
    assert_eq!(session.working_sentence("s3").unwrap().tokens[0].form, "Ciao");
    assert_eq!(session.working_sentence("s3").unwrap().comment, "");
}

#[test]
fn test_navigation_commits_first_and_stays_on_failure() {
    // GIVEN an invalid draft on the active sentence
    let mut session = new_session();
    session.set_field("s1", 0, Field::SemClass, "BAD").unwrap();

    // WHEN moving on
    let err = session.next(&AcceptUnknown).unwrap_err();

    // THEN the cursor stays put
    assert!(matches!(err, CorpusError::Validation(_)));
    assert_eq!(session.cursor().get(), 1);

    // WHEN the value is fixed
    session.set_field("s1", 0, Field::SemClass, "CLASS2").unwrap();
    let cursor = session.next(&AcceptUnknown).unwrap();

    // THEN the move succeeds and the draft is committed
    assert_eq!(cursor.get(), 2);
    assert_eq!(session.sentence(1).unwrap().tokens[0].semclass, "CLASS2");
    assert!(session.pending_drafts().is_empty());
}

#[test]
fn test_navigation_bounds() {
    let mut session = new_session();
    assert_eq!(session.prev(&AcceptUnknown).unwrap().get(), 1);
    session.goto(3, &AcceptUnknown).unwrap();
    assert_eq!(session.next(&AcceptUnknown).unwrap().get(), 3);
    assert!(matches!(
        session.goto(4, &AcceptUnknown),
        Err(CorpusError::SentenceNotFound { .. })
    ));
    assert_eq!(session.active_sentence().unwrap().id(), "s3");
}

#[test]
fn test_unconfirmed_relation_blocks_commit() {
    let mut session = new_session();
    session.set_field("s3", 0, Field::Deprel, "discourse").unwrap();

    let err = session.commit("s3", &RejectUnknown).unwrap_err();
    assert!(matches!(
        err,
        CorpusError::Validation(ref e) if e.reason == ValidationReason::Unconfirmed
    ));

    let outcome = session
        .commit("s3", &|_field: Field, value: &str| value == "discourse")
        .unwrap();
    assert_eq!(outcome, CommitOutcome::Committed { edits: 1 });
}

#[test]
fn test_find_first_unchecked_and_checked_flag() {
    let mut session = new_session();
    assert_eq!(session.find_first_unchecked(), Some("s2"));

    session.set_checked("s2", true).unwrap();
    assert_eq!(session.find_first_unchecked(), Some("s3"));

    session.set_checked("s3", true).unwrap();
    assert_eq!(session.find_first_unchecked(), None);
}

#[test]
fn test_with_cursor_falls_back_to_first() {
    let doc = cobald_core::parse(CORPUS).unwrap();
    let session = Session::new(doc.clone(), test_vocab()).with_cursor(Some(3));
    assert_eq!(session.cursor().get(), 3);
    let session = Session::new(doc, test_vocab()).with_cursor(Some(7));
    assert_eq!(session.cursor().get(), 1);
}
