#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use cobald_core::errors::CorpusError;
use cobald_core::logging_facility::test_capture::init_test_capture;
use cobald_core::ops::{insert_token, Anchor, InsertKind};
use cobald_core::schema::{EVENT_END, EVENT_END_ERROR, EVENT_START, FIELD_ERR_CODE};
use cobald_core::{log_op_end, log_op_error, log_op_start, parse, Identifier};
use common::{sentence_from, SCENARIO_A};

#[test]
fn test_log_op_start_macro() {
    let capture = init_test_capture();
    let op_name = "test_log_op_start_unique_1";

    log_op_start!(op_name, sent_id = "s1");

    let starts = capture.find(op_name, EVENT_START);
    assert_eq!(starts.len(), 1, "Should have exactly one start event");
    assert_eq!(starts[0].field("sent_id"), Some("s1"));
}

#[test]
fn test_log_op_end_macro_records_duration() {
    let capture = init_test_capture();
    let op_name = "test_log_op_end_unique_2";

    log_op_end!(op_name, duration_ms = 42);

    let ends = capture.find(op_name, EVENT_END);
    assert_eq!(ends.len(), 1, "Should have exactly one end event");
    assert_eq!(ends[0].field("duration_ms"), Some("42"));
}

#[test]
fn test_log_op_error_includes_code() {
    let capture = init_test_capture();
    let op_name = "test_log_op_error_unique_3";

    let err = CorpusError::MalformedToken { line: 4, fields: 10 };
    log_op_error!(op_name, err, duration_ms = 10);

    let errors = capture.find(op_name, EVENT_END_ERROR);
    assert_eq!(errors.len(), 1, "Should have exactly one error event");
    assert_eq!(errors[0].field(FIELD_ERR_CODE), Some("ERR_MALFORMED_TOKEN"));
    assert_eq!(errors[0].field("err.kind"), Some("MalformedToken"));
}

#[test]
fn test_parse_logs_start_and_end() {
    // GIVEN a capture installed before the call
    let capture = init_test_capture();

    // WHEN parsing a valid corpus
    parse(SCENARIO_A).unwrap();

    // THEN the boundary events exist with the sentence count
    capture.assert_event_exists("parse", EVENT_START);
    let ends = capture.find("parse", EVENT_END);
    assert!(ends
        .iter()
        .any(|e| e.field("sentence_count") == Some("1")));
}

#[test]
fn test_failed_parse_logs_error_code() {
    let capture = init_test_capture();

    let err = parse("no data here\n").unwrap_err();
    assert_eq!(err, CorpusError::EmptyCorpus);

    let errors = capture.find("parse", EVENT_END_ERROR);
    assert!(errors
        .iter()
        .any(|e| e.field(FIELD_ERR_CODE) == Some("ERR_EMPTY_CORPUS")));
}

#[test]
fn test_rejected_insert_logs_index_error() {
    let capture = init_test_capture();
    let mut sentence = sentence_from(&["1"]);

    insert_token(
        &mut sentence,
        Anchor::At(Identifier::Integer(5)),
        InsertKind::Integer,
    )
    .unwrap_err();

    let errors = capture.find("insert_token", EVENT_END_ERROR);
    assert!(errors
        .iter()
        .any(|e| e.field(FIELD_ERR_CODE) == Some("ERR_INDEX_OUT_OF_RANGE")));
}
