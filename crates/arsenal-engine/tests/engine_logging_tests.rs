// Every engine operation emits start and end / end_error events

use arsenal_core::logging_facility::test_capture::init_test_capture;
use arsenal_core::model::SnippetDraft;
use arsenal_core_types::schema::{EVENT_END, EVENT_END_ERROR, EVENT_START, FIELD_RESULT_LEN};
use arsenal_engine::{apply_engine_command, apply_engine_query, EngineCommand, EngineQuery};
use rusqlite::Connection;

fn setup_test_db() -> Connection {
    let mut conn = Connection::open_in_memory().unwrap();
    arsenal_store::migrations::apply_migrations(&mut conn).unwrap();
    conn
}

#[test]
fn test_engine_operations_log_boundaries() {
    let capture = init_test_capture();
    let mut conn = setup_test_db();

    let draft = SnippetDraft {
        title: "logged".to_string(),
        tags: "log".to_string(),
        code: "print()".to_string(),
        ..SnippetDraft::default()
    };
    apply_engine_command(
        EngineCommand::SnippetSave {
            snippet_id: None,
            draft,
        },
        &mut conn,
    )
    .unwrap();

    capture.assert_event_exists("snippet_save", EVENT_START);
    capture.assert_event_exists("snippet_save", EVENT_END);

    let end = capture
        .events_for_op("snippet_save")
        .into_iter()
        .find(|e| e.event.as_deref() == Some(EVENT_END))
        .unwrap();
    assert_eq!(end.field("created"), Some("true"));
    assert!(end.duration_ms().is_some());

    let _ = apply_engine_query(EngineQuery::SnippetGet { snippet_id: 404 }, &conn);
    capture.assert_event_exists("snippet_get", EVENT_START);
    let errors = capture.count_events(|e| {
        e.op.as_deref() == Some("snippet_get") && e.event.as_deref() == Some(EVENT_END_ERROR)
    });
    assert_eq!(errors, 1);
    let error_event = capture
        .events_for_op("snippet_get")
        .into_iter()
        .find(|e| e.event.as_deref() == Some(EVENT_END_ERROR))
        .unwrap();
    assert_eq!(error_event.err_code(), Some("ERR_NOT_FOUND"));

    let _ = apply_engine_query(
        EngineQuery::SnippetSearch {
            query: "logged".to_string(),
            limit: 10,
        },
        &conn,
    );
    let search_end = capture
        .events_for_op("snippet_search")
        .into_iter()
        .find(|e| e.event.as_deref() == Some(EVENT_END))
        .unwrap();
    assert_eq!(search_end.field(FIELD_RESULT_LEN), Some("1"));
}
