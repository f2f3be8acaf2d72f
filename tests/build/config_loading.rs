//! Search settings: site `search` section and standalone files.

use std::io::Write;

use super::common::load_fixture_site;
use zyros::{ConfigError, SearchConfig, SortMode};

#[test]
fn test_site_search_section_is_used() {
    let site = load_fixture_site();
    assert_eq!(site.config.highlight.open, "[");
    assert_eq!(site.config.highlight.close, "]");
    assert_eq!(site.config.limit, Some(10));
    assert_eq!(site.config.default_sort, SortMode::Relevance);
}

#[test]
fn test_standalone_config_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{"defaultSort": "date", "limit": 3}}"#).unwrap();

    let config = SearchConfig::load(file.path()).unwrap();
    assert_eq!(config.default_sort, SortMode::Date);
    assert_eq!(config.limit, Some(3));
    assert_eq!(config.highlight.open, "<mark>");
}

#[test]
fn test_bad_sort_in_config_is_json_error() {
    assert!(matches!(
        SearchConfig::from_json(r#"{"defaultSort": "newest"}"#),
        Err(ConfigError::Json(_))
    ));
}
