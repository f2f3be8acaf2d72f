//! `SearchSession`: store mutations, index lifecycle and observer events.

use std::sync::Arc;
use std::thread;

use super::common::{make_record, widget_store};
use zyros::{
    search, Error, NoopObserver, QueryError, QueryRequest, RecordError, RecordingObserver,
    SearchEvent, SearchSession,
};

#[test]
fn test_session_search_matches_free_function() {
    let mut session = SearchSession::from_records(widget_store()).unwrap();
    let request = QueryRequest::new("widget");
    let via_session = session.search(&request).unwrap();
    let index = session.index().unwrap();
    assert_eq!(via_session, search(&index, &request).unwrap());
}

#[test]
fn test_observer_sees_build_then_queries() {
    let observer = RecordingObserver::new();
    let mut session = SearchSession::with_observer(observer.clone());
    session.replace_all(widget_store()).unwrap();

    session.search(&QueryRequest::new("widget")).unwrap();
    session.search(&QueryRequest::new("x")).unwrap();

    let events = observer.events();
    assert_eq!(events.len(), 3);
    assert!(matches!(
        events[0],
        SearchEvent::IndexBuilt { records: 2, .. }
    ));
    assert!(matches!(
        &events[1],
        SearchEvent::QueryExecuted { query, results: 2, .. } if query == "widget"
    ));
    assert!(matches!(
        &events[2],
        SearchEvent::QueryExecuted { results: 0, .. }
    ));
}

#[test]
fn test_invalid_query_surfaces_as_error() {
    let mut session = SearchSession::with_observer(NoopObserver);
    session.extend(widget_store()).unwrap();
    let err = session
        .search(&QueryRequest::new("widget").category(""))
        .unwrap_err();
    assert!(matches!(err, Error::Query(QueryError::EmptyCategory)));
}

#[test]
fn test_replace_all_rejects_duplicates_and_keeps_old_store() {
    let mut session = SearchSession::from_records(widget_store()).unwrap();
    let err = session
        .replace_all(vec![
            make_record("dup", "One", "Body"),
            make_record("dup", "Two", "Body"),
        ])
        .unwrap_err();
    assert_eq!(
        err,
        RecordError::DuplicateIdentifier {
            identifier: "dup".to_string()
        }
    );
    assert_eq!(session.len(), 2);
}

#[test]
fn test_replace_all_swaps_the_snapshot() {
    let mut session = SearchSession::from_records(widget_store()).unwrap();
    let old = session.index().unwrap();
    session
        .replace_all(vec![make_record("garden", "Garden Tools", "Rakes, hoes and shovels.")])
        .unwrap();

    assert!(session.search(&QueryRequest::new("widget")).unwrap().is_empty());
    // The old snapshot is untouched
    assert_eq!(search(&old, &QueryRequest::new("widget")).unwrap().len(), 2);
}

#[test]
fn test_index_can_be_shared_across_threads() {
    let mut session = SearchSession::from_records(widget_store()).unwrap();
    let index = session.index().unwrap();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let index = Arc::clone(&index);
            thread::spawn(move || search(&index, &QueryRequest::new("widget")).unwrap().len())
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), 2);
    }
}
