#![allow(clippy::unwrap_used, clippy::expect_used)]

use arsenal_core::errors::{ExError, ExErrorKind, SnippetError};
use arsenal_core::logging_facility::test_capture::init_test_capture;
use arsenal_core::{log_op_end, log_op_error, log_op_start};
use arsenal_core_types::schema::{
    EVENT_END, EVENT_END_ERROR, EVENT_START, FIELD_ERR_KIND, FIELD_SNIPPET_ID,
};

#[test]
fn test_log_op_start_macro() {
    let capture = init_test_capture();
    let op_name = "test_log_op_start_unique_1";

    log_op_start!(op_name, snippet_id = 4);

    let start_events: Vec<_> = capture
        .events_for_op(op_name)
        .into_iter()
        .filter(|e| e.event.as_deref() == Some(EVENT_START))
        .collect();

    assert_eq!(start_events.len(), 1, "Should capture one start event");
    assert_eq!(start_events[0].field(FIELD_SNIPPET_ID), Some("4"));
    assert!(start_events[0].component.is_some());
}

#[test]
fn test_log_op_end_macro() {
    let capture = init_test_capture();
    let op_name = "test_log_op_end_unique_2";

    log_op_end!(op_name, duration_ms = 42);

    let end_events: Vec<_> = capture
        .events_for_op(op_name)
        .into_iter()
        .filter(|e| e.event.as_deref() == Some(EVENT_END))
        .collect();

    assert_eq!(end_events.len(), 1, "Should have exactly one end event");
    assert_eq!(end_events[0].duration_ms(), Some(42));
}

#[test]
fn test_log_op_error_includes_kind_and_code() {
    let capture = init_test_capture();
    let op_name = "test_log_op_error_unique_3";

    let err = SnippetError::SnippetNotFound { snippet_id: 9 };
    log_op_error!(op_name, err, duration_ms = 10);

    let error_events: Vec<_> = capture
        .events_for_op(op_name)
        .into_iter()
        .filter(|e| e.event.as_deref() == Some(EVENT_END_ERROR))
        .collect();

    assert_eq!(error_events.len(), 1);
    let event = &error_events[0];
    assert_eq!(event.level, tracing::Level::ERROR);
    assert_eq!(event.field(FIELD_ERR_KIND), Some("NotFound"));
    assert_eq!(event.err_code(), Some("ERR_NOT_FOUND"));
}

#[test]
fn test_log_op_error_accepts_ex_error() {
    let capture = init_test_capture();
    let op_name = "test_log_op_error_unique_4";

    let err = ExError::new(ExErrorKind::Persistence).with_message("locked");
    log_op_error!(op_name, err, duration_ms = 1, snippet_id = 2);

    capture.assert_event_exists(op_name, EVENT_END_ERROR);
    let event = &capture.events_for_op(op_name)[0];
    assert_eq!(event.field("err_message"), Some("locked"));
    assert_eq!(event.field(FIELD_SNIPPET_ID), Some("2"));
}
