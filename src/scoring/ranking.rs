// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ordering for each sort mode.
//!
//! Every comparator here is used with `sort_by`, which is stable. Ties are
//! therefore broken by the order hits come in, and hits always come in store
//! order. That's the whole tie-breaking story: no doc-id or title fallbacks.

use std::cmp::Ordering;

use crate::types::{SearchHit, SortMode};

/// Higher score first. `total_cmp` keeps this a total order even for NaN.
pub fn by_relevance(a: &SearchHit, b: &SearchHit) -> Ordering {
    b.score.total_cmp(&a.score)
}

/// Newest first; undated hits after every dated one.
pub fn by_date(a: &SearchHit, b: &SearchHit) -> Ordering {
    match (a.record.published_at, b.record.published_at) {
        (Some(x), Some(y)) => y.cmp(&x),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Lexicographic by title.
pub fn by_title(a: &SearchHit, b: &SearchHit) -> Ordering {
    a.record.title.cmp(&b.record.title)
}

/// Stable sort of hits that arrived in store order.
pub fn sort_hits(hits: &mut [SearchHit], mode: SortMode) {
    match mode {
        SortMode::Relevance => hits.sort_by(by_relevance),
        SortMode::Date => hits.sort_by(by_date),
        SortMode::Title => hits.sort_by(by_title),
    }
}
