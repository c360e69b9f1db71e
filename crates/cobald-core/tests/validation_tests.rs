#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use std::cell::RefCell;

use cobald_core::errors::ValidationReason;
use cobald_core::model::{Features, Field, Head};
use cobald_core::rules::{audit_document, FindingKind};
use cobald_core::{
    apply, parse, AcceptUnknown, Command, FieldVerdict, RejectUnknown, ValidationScope, Validator,
};
use common::{sentence_from, test_vocab, SCENARIO_A};

#[test]
fn test_scenario_e_head_out_of_bounds_names_field_and_value() {
    // GIVEN a five-word sentence with known labels
    let vocab = test_vocab();
    let mut sentence = sentence_from(&["1", "2", "3", "4", "5"]);
    for token in &mut sentence.tokens {
        token.semslot = "SLOT1".to_string();
        token.semclass = "CLASS1".to_string();
        token.deprel = "dep".to_string();
        token.head = Head::Root;
    }

    // WHEN word 2 points at 99 and the sentence is checked
    sentence = apply(
        sentence,
        Command::SetField {
            token_index: 1,
            field: Field::Head,
            value: "99".to_string(),
        },
    )
    .unwrap()
    .sentence;
    let err = Validator::new(&vocab, ValidationScope::default())
        .validate_sentence(&sentence, &AcceptUnknown)
        .unwrap_err();

    // THEN the error names the field and the offending value
    assert_eq!(err.field, Field::Head);
    assert_eq!(err.value, "99");
    assert_eq!(err.reason, ValidationReason::OutOfBounds);
}

#[test]
fn test_slot_outside_vocabulary_is_rejected_without_prompting() {
    // GIVEN Scenario A with an unknown slot on word 2
    let vocab = test_vocab();
    let mut doc = parse(SCENARIO_A).unwrap();
    doc.get_mut(1).unwrap().tokens[1].semslot = "SLOT9".to_string();
    let asked = RefCell::new(Vec::new());
    let hook = |field: Field, value: &str| {
        asked.borrow_mut().push((field, value.to_string()));
        true
    };

    // WHEN validating
    let err = Validator::new(&vocab, ValidationScope::default())
        .validate_sentence(doc.get(1).unwrap(), &hook)
        .unwrap_err();

    // THEN the closed set fails hard and nobody was asked
    assert_eq!(err.field, Field::SemSlot);
    assert_eq!(err.value, "SLOT9");
    assert_eq!(err.reason, ValidationReason::NotInVocabulary);
    assert!(asked.borrow().is_empty());
}

#[test]
fn test_unknown_relation_goes_through_the_hook() {
    // GIVEN Scenario A with a relation label missing from the vocabulary
    let vocab = test_vocab();
    let mut doc = parse(SCENARIO_A).unwrap();
    doc.get_mut(1).unwrap().tokens[1].deprel = "nmod:poss".to_string();
    let sentence = doc.get(1).unwrap();
    let validator = Validator::new(&vocab, ValidationScope::default());

    // WHEN the caller confirms, THEN the sentence passes
    let asked = RefCell::new(Vec::new());
    let hook = |field: Field, value: &str| {
        asked.borrow_mut().push((field, value.to_string()));
        true
    };
    validator.validate_sentence(sentence, &hook).unwrap();
    assert_eq!(*asked.borrow(), vec![(Field::Deprel, "nmod:poss".to_string())]);

    // WHEN the caller declines, THEN the commit fails as unconfirmed
    let err = validator
        .validate_sentence(sentence, &RejectUnknown)
        .unwrap_err();
    assert_eq!(err.field, Field::Deprel);
    assert_eq!(err.reason, ValidationReason::Unconfirmed);
}

#[test]
fn test_feature_keys_checked_only_in_scope() {
    let vocab = test_vocab();
    let mut doc = parse(SCENARIO_A).unwrap();
    doc.get_mut(1).unwrap().tokens[0].feats = Features::new("Case=Nom|Mood=Ind");
    let sentence = doc.get(1).unwrap();

    Validator::new(&vocab, ValidationScope::default())
        .validate_sentence(sentence, &RejectUnknown)
        .unwrap();

    let strict = Validator::new(&vocab, ValidationScope { features: true });
    let verdicts = strict.verdicts(&sentence.tokens[0], sentence.max_integer_id());
    assert!(verdicts.contains(&FieldVerdict::NeedsConfirmation {
        field: Field::Feats,
        value: "Mood".to_string(),
    }));
    let err = strict
        .validate_sentence(sentence, &RejectUnknown)
        .unwrap_err();
    assert_eq!(err.field, Field::Feats);
    assert_eq!(err.value, "Mood");
}

#[test]
fn test_audit_reports_structural_findings_across_document() {
    // GIVEN a corpus whose second word points past the sentence
    let text = SCENARIO_A.replace("\t1\tdep\t", "\t7\tdep\t");
    let doc = parse(&text).unwrap();

    // WHEN auditing
    let findings = audit_document(&doc, Some(&test_vocab()));

    // THEN exactly the dangling head is reported
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].kind, FindingKind::DanglingHead);
    assert_eq!(findings[0].sent_id, "s1");
}
