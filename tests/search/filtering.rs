//! Category and tag filters.

use super::common::{blog_store, build_test_index, widget_index};
use zyros::{search, CategoryFilter, QueryError, QueryRequest};

#[test]
fn test_tag_filter_keeps_only_tagged_record() {
    let request = QueryRequest::new("widget").tag("advanced");
    let result = search(&widget_index(), &request).unwrap();
    assert_eq!(result.identifiers(), vec!["advanced-tuning"]);
}

#[test]
fn test_tags_use_and_semantics() {
    let request = QueryRequest::new("widget").tag("advanced").tag("setup");
    assert!(search(&widget_index(), &request).unwrap().is_empty());

    let index = build_test_index(&blog_store());
    let request = QueryRequest::new("rust").tag("rust").tag("tutorial");
    assert_eq!(search(&index, &request).unwrap().identifiers(), vec!["rust-intro"]);
}

#[test]
fn test_category_is_exact_and_case_sensitive() {
    let index = widget_index();
    assert_eq!(
        search(&index, &QueryRequest::new("widget").category("docs"))
            .unwrap()
            .len(),
        2
    );
    assert!(search(&index, &QueryRequest::new("widget").category("Docs"))
        .unwrap()
        .is_empty());
}

#[test]
fn test_all_category_matches_unfiltered_search() {
    let index = build_test_index(&blog_store());
    let unfiltered = search(&index, &QueryRequest::new("rust")).unwrap();
    assert_eq!(unfiltered.len(), 4);

    let built = search(&index, &QueryRequest::new("rust").category("all")).unwrap();
    let raw = QueryRequest::from_raw("rust", Some("all"), Vec::<&str>::new(), None).unwrap();
    let parsed = search(&index, &raw).unwrap();

    assert_eq!(built.identifiers(), unfiltered.identifiers());
    assert_eq!(parsed.identifiers(), unfiltered.identifiers());
}

#[test]
fn test_uncategorized_records_fail_concrete_category() {
    let index = build_test_index(&blog_store());
    let result = search(&index, &QueryRequest::new("rust").category("blog")).unwrap();
    // changelog has no category
    assert_eq!(result.identifiers(), vec!["async-rust", "rust-intro"]);
}

#[test]
fn test_all_sentinel_disables_category_filter() {
    let request = QueryRequest::from_raw("rust", Some("all"), Vec::<String>::new(), None).unwrap();
    assert_eq!(request.category, CategoryFilter::All);
    assert!(request.is_unfiltered());

    let index = build_test_index(&blog_store());
    assert_eq!(search(&index, &request).unwrap().len(), 4);
}

#[test]
fn test_filters_apply_before_limit() {
    let index = build_test_index(&blog_store());
    let request = QueryRequest::new("rust").category("pages").limit(1);
    assert_eq!(search(&index, &request).unwrap().identifiers(), vec!["contact"]);
}

#[test]
fn test_malformed_filters_are_rejected() {
    assert_eq!(
        QueryRequest::from_raw("rust", Some("  "), Vec::<String>::new(), None),
        Err(QueryError::EmptyCategory)
    );
    assert_eq!(
        QueryRequest::from_raw("rust", None, ["rust", ""], None),
        Err(QueryError::EmptyTag)
    );

    let index = widget_index();
    let request = QueryRequest::new("widget").tag(" ");
    assert_eq!(search(&index, &request), Err(QueryError::EmptyTag));
}
