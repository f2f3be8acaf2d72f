//! Relevance ranking: field weights, match quality, tie-breaking.

use super::common::{blog_store, build_test_index, make_record, widget_index};
use zyros::{search, Field, QueryRequest};

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn test_exact_query_returns_both_widget_pages_in_store_order() {
    let result = search(&widget_index(), &QueryRequest::new("widget")).unwrap();

    assert_eq!(result.identifiers(), vec!["getting-started", "advanced-tuning"]);
    assert_eq!(result.hits[0].record.title, "Getting Started with Widgets");
}

#[test]
fn test_typo_still_matches_with_lower_scores() {
    let index = widget_index();
    let exact = search(&index, &QueryRequest::new("widget")).unwrap();
    let typo = search(&index, &QueryRequest::new("wigdet")).unwrap();

    assert_eq!(typo.len(), 2);
    for hit in &typo {
        let clean = exact
            .iter()
            .find(|h| h.record.identifier == hit.record.identifier)
            .unwrap();
        assert!(
            hit.score < clean.score,
            "typo score {} should be below exact score {} for {}",
            hit.score,
            clean.score,
            hit.record.identifier
        );
    }
}

#[test]
fn test_field_weights_order_results() {
    let result = search(&build_test_index(&blog_store()), &QueryRequest::new("rust")).unwrap();

    assert_eq!(
        result.identifiers(),
        vec!["async-rust", "rust-intro", "changelog", "contact"]
    );
    // title + description + tags, title + tags, body + tags, body
    let scores: Vec<f64> = result.iter().map(|h| h.score).collect();
    assert!(approx(scores[0], 0.8));
    assert!(approx(scores[1], 0.5));
    assert!(approx(scores[2], 0.3));
    assert!(approx(scores[3], 0.2));
}

#[test]
fn test_equal_scores_keep_store_order() {
    let records = vec![
        make_record("c", "Zebra notes", "filler"),
        make_record("a", "Alpha notes", "filler"),
        make_record("b", "Middle notes", "filler"),
    ];
    let result = search(&build_test_index(&records), &QueryRequest::new("notes")).unwrap();
    assert_eq!(result.identifiers(), vec!["c", "a", "b"]);
}

#[test]
fn test_prefix_beats_inner_substring() {
    let records = vec![
        make_record("inner", "Rewidgeting", "body"),
        make_record("prefix", "Widgeting", "body"),
    ];
    let result = search(&build_test_index(&records), &QueryRequest::new("widget")).unwrap();
    assert_eq!(result.identifiers(), vec!["prefix", "inner"]);
    assert!(approx(result.hits[0].score, 0.4));
    assert!(approx(result.hits[1].score, 0.4 * 0.75));
}

#[test]
fn test_multi_term_quality_is_averaged() {
    let records = vec![
        make_record("both", "Widget Setup", "body"),
        make_record("one", "Widget Tuning", "body"),
    ];
    let result = search(&build_test_index(&records), &QueryRequest::new("widget setup")).unwrap();
    assert_eq!(result.identifiers(), vec!["both", "one"]);
    assert!(approx(result.hits[0].score, 0.4));
    assert!(approx(result.hits[1].score, 0.2));
}

#[test]
fn test_unrelated_text_does_not_match() {
    let result = search(&widget_index(), &QueryRequest::new("kubernetes")).unwrap();
    assert!(result.is_empty());
}

#[test]
fn test_matched_spans_point_at_original_text() {
    let result = search(&widget_index(), &QueryRequest::new("widget")).unwrap();
    let hit = &result.hits[0];
    let title_spans: Vec<&str> = hit
        .matched_spans
        .iter()
        .filter(|s| s.field == Field::Title)
        .map(|s| &hit.record.title[s.range.clone()])
        .collect();
    assert_eq!(title_spans, vec!["Widgets"]);
}

#[test]
fn test_tag_spans_name_the_tag() {
    let result = search(&widget_index(), &QueryRequest::new("setup")).unwrap();
    assert_eq!(result.hits[0].record.identifier, "getting-started");
    let tag_span = result.hits[0]
        .matched_spans
        .iter()
        .find(|s| s.field == Field::Tags)
        .unwrap();
    assert_eq!(tag_span.tag.as_deref(), Some("setup"));
}
