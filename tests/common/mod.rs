//! Shared test utilities and fixtures.

#![allow(dead_code)]

use std::path::PathBuf;

use zyros::{build_index, load_site, LoadedSite, SearchIndex, SearchableRecord};

// Re-export canonical test utilities from zyros::testing
pub use zyros::testing::{make_dated_record, make_record, make_tagged_record, widget_store};

/// Directory containing the JSON fixtures.
pub const FIXTURES_DIR: &str = "data/fixtures";

pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join(FIXTURES_DIR)
        .join(name)
}

/// The four-page Acme site used by the loading and end-to-end tests.
pub fn load_fixture_site() -> LoadedSite {
    load_site(&fixture_path("site.json")).expect("fixture site must load")
}

pub fn build_test_index(records: &[SearchableRecord]) -> SearchIndex {
    build_index(records).expect("test records must be valid")
}

/// Index over the scenario store: two widget docs pages.
pub fn widget_index() -> SearchIndex {
    build_test_index(&widget_store())
}

/// A small blog: mixed categories, tags and dates, some fields missing.
pub fn blog_store() -> Vec<SearchableRecord> {
    vec![
        SearchableRecord::builder("rust-intro", "Rust for Beginners", "Ownership and borrowing explained.")
            .category("blog")
            .tags(["rust", "tutorial"])
            .published_at(zyros::testing::parse_utc("2024-02-01T00:00:00Z"))
            .build()
            .unwrap(),
        SearchableRecord::builder("async-rust", "Async Rust in Practice", "Futures, executors and pinning.")
            .description("Writing async services in Rust")
            .category("blog")
            .tags(["rust", "async"])
            .published_at(zyros::testing::parse_utc("2024-06-15T12:00:00Z"))
            .build()
            .unwrap(),
        SearchableRecord::builder("contact", "Contact", "Email us about rust training.")
            .category("pages")
            .build()
            .unwrap(),
        SearchableRecord::builder("changelog", "Changelog", "Rust toolchain bumped to the latest stable.")
            .tags(["rust"])
            .build()
            .unwrap(),
    ]
}

