//! Empty stores, short queries, unicode and malformed records.

use super::common::{build_test_index, make_record, widget_index, widget_store};
use zyros::{build_index, search, Field, QueryRequest, RecordError, SearchIndex, SearchableRecord};

#[test]
fn test_empty_store_returns_empty_result() {
    let index = build_index(&[]).unwrap();
    assert!(index.is_empty());
    for query in ["widget", "wigdet", "", "a"] {
        assert!(search(&index, &QueryRequest::new(query)).unwrap().is_empty());
    }
    assert_eq!(index, SearchIndex::empty());
}

#[test]
fn test_short_and_blank_queries_match_nothing() {
    let index = widget_index();
    for query in ["", " ", "w", "  w  ", "\t"] {
        assert!(
            search(&index, &QueryRequest::new(query)).unwrap().is_empty(),
            "query {:?} should match nothing",
            query
        );
    }
}

#[test]
fn test_punctuation_only_query_matches_nothing() {
    assert!(search(&widget_index(), &QueryRequest::new("?!..")).unwrap().is_empty());
}

#[test]
fn test_query_case_is_ignored() {
    let index = widget_index();
    let lower = search(&index, &QueryRequest::new("widget")).unwrap();
    let upper = search(&index, &QueryRequest::new("WIDGET")).unwrap();
    assert_eq!(lower, upper);
}

#[cfg(feature = "unicode-normalization")]
#[test]
fn test_diacritics_are_ignored() {
    let records = vec![make_record("cafe", "Café Résumé", "Menü of the day")];
    let index = build_test_index(&records);
    assert_eq!(search(&index, &QueryRequest::new("cafe")).unwrap().len(), 1);
    assert_eq!(search(&index, &QueryRequest::new("menu")).unwrap().len(), 1);
}

#[test]
fn test_optional_fields_are_optional() {
    let records = vec![make_record("bare", "Bare Page", "Only the basics.")];
    let index = build_test_index(&records);
    let result = search(&index, &QueryRequest::new("basics")).unwrap();
    assert_eq!(result.len(), 1);
    assert!(search(&index, &QueryRequest::new("basics").tag("x"))
        .unwrap()
        .is_empty());
}

#[test]
fn test_deserialized_record_without_body_is_rejected_at_build() {
    let good = make_record("good", "Good", "Body");
    let bad: SearchableRecord =
        serde_json::from_str(r#"{"identifier":"bad","title":"Bad","bodyText":"   "}"#).unwrap();

    let err = build_index(&[good, bad]).unwrap_err();
    assert_eq!(
        err,
        RecordError::MissingField {
            position: 1,
            identifier: "bad".to_string(),
            field: Field::Body,
        }
    );
}

#[test]
fn test_build_is_idempotent() {
    let store = widget_store();
    assert_eq!(build_index(&store).unwrap(), build_index(&store).unwrap());
}

#[test]
fn test_repeated_queries_are_identical() {
    let index = widget_index();
    let request = QueryRequest::new("widget tuning").tag("advanced");
    assert_eq!(search(&index, &request).unwrap(), search(&index, &request).unwrap());
}
