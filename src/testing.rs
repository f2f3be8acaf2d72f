// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use chrono::{DateTime, Utc};

use crate::types::{SearchHit, SearchableRecord};

/// Create a record with only required fields.
///
/// Panics on invalid input; tests pass literals.
pub fn make_record(identifier: &str, title: &str, body: &str) -> SearchableRecord {
    SearchableRecord::new(identifier, title, body).expect("test record must be valid")
}

/// Create a record with category and tags.
pub fn make_tagged_record(
    identifier: &str,
    title: &str,
    body: &str,
    category: &str,
    tags: &[&str],
) -> SearchableRecord {
    SearchableRecord::builder(identifier, title, body)
        .category(category)
        .tags(tags.iter().copied())
        .build()
        .expect("test record must be valid")
}

/// Create a dated record. `published_at` is RFC 3339.
pub fn make_dated_record(identifier: &str, title: &str, published_at: &str) -> SearchableRecord {
    SearchableRecord::builder(identifier, title, "body")
        .published_at(parse_utc(published_at))
        .build()
        .expect("test record must be valid")
}

pub fn parse_utc(value: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(value)
        .expect("test date must be RFC 3339")
        .with_timezone(&Utc)
}

/// The two-page widget docs store used across scenario tests.
pub fn widget_store() -> Vec<SearchableRecord> {
    vec![
        make_tagged_record(
            "getting-started",
            "Getting Started with Widgets",
            "Install and configure everything in five minutes.",
            "docs",
            &["setup"],
        ),
        make_tagged_record(
            "advanced-tuning",
            "Advanced Widget Tuning",
            "Knobs, dials and performance settings.",
            "docs",
            &["advanced"],
        ),
    ]
}

/// A hit with a fixed score and no spans.
pub fn make_hit(identifier: &str, title: &str, score: f64) -> SearchHit {
    SearchHit {
        record: make_record(identifier, title, "body"),
        score,
        matched_spans: Vec::new(),
    }
}

/// A hit with an optional publish date.
pub fn dated_hit(identifier: &str, published_at: Option<&str>) -> SearchHit {
    let mut record = make_record(identifier, identifier, "body");
    record.published_at = published_at.map(parse_utc);
    SearchHit {
        record,
        score: 0.5,
        matched_spans: Vec::new(),
    }
}
