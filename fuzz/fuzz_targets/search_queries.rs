// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for search query handling.
//!
//! Throws arbitrary queries at a small fixed store. The pipeline must never
//! panic, must respect the limit, and must return hits in relevance order
//! with scores in (0, 1].

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use std::collections::HashSet;
use zyros::{build_index, search, QueryRequest, SearchIndex, SearchableRecord};

#[derive(Debug, Arbitrary)]
struct QueryInput {
    query: String,
    limit: u8,
}

fn store() -> SearchIndex {
    let pages = [
        ("getting-started", "Getting Started with Widgets", "Install and configure everything."),
        ("advanced-tuning", "Advanced Widget Tuning", "Knobs, dials and performance settings."),
        ("café", "Café Menü Über Alles", "Résumé of naïve coöperation."),
        ("emoji", "Rocket 🚀 Launch", "日本語のテキスト and mixed text"),
    ];
    let records: Vec<SearchableRecord> = pages
        .iter()
        .filter_map(|(id, title, body)| SearchableRecord::new(*id, *title, *body).ok())
        .collect();
    build_index(&records).expect("fixed store is valid")
}

fuzz_target!(|input: QueryInput| {
    static INDEX: std::sync::OnceLock<SearchIndex> = std::sync::OnceLock::new();
    let index = INDEX.get_or_init(store);

    // Cap query length to avoid timeout
    let query: String = input.query.chars().take(200).collect();
    let limit = usize::from(input.limit % 8) + 1;

    // INVARIANT 1: search() never panics, and a valid request never errors
    let result = search(index, &QueryRequest::new(query.as_str()).limit(limit))
        .expect("valid request");

    // INVARIANT 2: Limit respected
    assert!(result.len() <= limit);

    // INVARIANT 3: Scores bounded and non-increasing
    for hit in &result {
        assert!(hit.score > 0.0 && hit.score <= 1.0 + 1e-9, "score {}", hit.score);
    }
    for pair in result.hits.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }

    // INVARIANT 4: No duplicate records
    let mut seen = HashSet::new();
    for hit in &result {
        assert!(seen.insert(hit.record.identifier.clone()));
    }

    // INVARIANT 5: Short queries return nothing
    if query.trim().chars().count() < 2 {
        assert!(result.is_empty());
    }
});
