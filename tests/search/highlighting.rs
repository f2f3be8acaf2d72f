//! Highlighting search results.

use super::common::widget_index;
use zyros::{highlight, highlight_spans, highlight_with, search, QueryRequest};

#[test]
fn test_scenario_highlight_preserves_case() {
    assert_eq!(
        highlight("Widget Setup Guide", "widget"),
        "<mark>Widget</mark> Setup Guide"
    );
}

#[test]
fn test_highlighting_every_hit_title() {
    let result = search(&widget_index(), &QueryRequest::new("widget")).unwrap();
    let titles: Vec<String> = result
        .iter()
        .map(|h| highlight(&h.record.title, "widget"))
        .collect();
    assert_eq!(
        titles,
        vec![
            "Getting Started with <mark>Widget</mark>s",
            "Advanced <mark>Widget</mark> Tuning",
        ]
    );
}

#[test]
fn test_typo_queries_do_not_highlight() {
    // Highlighting is literal; fuzzy hits are shown through matched_spans
    assert_eq!(
        highlight("Advanced Widget Tuning", "wigdet"),
        "Advanced Widget Tuning"
    );
}

#[test]
fn test_stripping_markers_restores_text() {
    let text = "Widgets, widgets everywhere: a widget-lover's guide to WIDGETS.";
    let marked = highlight_with(text, "widget lover", "{{", "}}");
    assert_eq!(marked.replace("{{", "").replace("}}", ""), text);
    assert_eq!(highlight_spans(text, "widget lover").len(), 5);
}

#[test]
fn test_query_whitespace_is_trimmed() {
    assert_eq!(
        highlight("Advanced Widget Tuning", "  tuning  "),
        "Advanced Widget <mark>Tuning</mark>"
    );
}

#[test]
fn test_default_markers_match_config_defaults() {
    use zyros::highlight::{DEFAULT_CLOSE, DEFAULT_OPEN};
    use zyros::SearchConfig;

    let text = "Widget Setup Guide";
    let config = SearchConfig::default();
    assert_eq!(config.highlight.open, DEFAULT_OPEN);
    assert_eq!(config.highlight.close, DEFAULT_CLOSE);
    assert_eq!(
        highlight(text, "setup"),
        highlight_with(text, "setup", DEFAULT_OPEN, DEFAULT_CLOSE)
    );
}
