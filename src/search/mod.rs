// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The query pipeline: where the rubber meets the road.
//!
//! ```text
//! validate ─▶ match & score (store order) ─▶ filter ─▶ sort ─▶ limit
//! ```
//!
//! Validation happens before any matching, so a malformed request never
//! produces a partial result. Filtering happens after scoring and before the
//! final sort, whatever the sort mode. Matching walks the index in store
//! order and every sort is stable, which is what makes ties come out in
//! store order.
//!
//! The pipeline reads the index and nothing else. Same index, same request,
//! same result.

pub mod filter;
pub mod matching;

use crate::error::QueryError;
use crate::fuzzy::{EditDistanceMatcher, FuzzyMatcher};
use crate::index::SearchIndex;
use crate::scoring::ranking::sort_hits;
use crate::types::{QueryRequest, QueryResult, SearchHit};

pub use filter::{apply_filters, passes_filters};
pub use matching::{query_terms, score_record, MIN_QUERY_CHARS};

/// Run a query with the default edit-distance matcher.
pub fn search(index: &SearchIndex, request: &QueryRequest) -> Result<QueryResult, QueryError> {
    search_with(index, request, &EditDistanceMatcher)
}

/// Run a query with a caller-supplied matcher.
pub fn search_with(
    index: &SearchIndex,
    request: &QueryRequest,
    matcher: &dyn FuzzyMatcher,
) -> Result<QueryResult, QueryError> {
    request.validate()?;

    let terms = query_terms(&request.query);
    if terms.is_empty() || index.is_empty() {
        return Ok(QueryResult::empty());
    }

    let mut hits: Vec<SearchHit> = index
        .entries()
        .filter_map(|(record, entry)| score_record(record, entry, &terms, matcher))
        .collect();

    apply_filters(&mut hits, request);
    sort_hits(&mut hits, request.sort);

    if let Some(limit) = request.limit {
        hits.truncate(limit);
    }

    Ok(QueryResult { hits })
}
