// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Category and tag filters, applied after scoring and before the final sort.

use crate::types::{QueryRequest, SearchHit, SearchableRecord};

/// Does the record survive the request's filters?
///
/// Category is an exact, case-sensitive match (records without a category
/// only pass `All`). Tags use AND semantics.
pub fn passes_filters(record: &SearchableRecord, request: &QueryRequest) -> bool {
    request.category.matches(record.category.as_deref()) && record.has_all_tags(&request.tags)
}

/// Drop hits that fail the filters, keeping the rest in order.
pub fn apply_filters(hits: &mut Vec<SearchHit>, request: &QueryRequest) {
    if request.is_unfiltered() {
        return;
    }
    hits.retain(|hit| passes_filters(&hit.record, request));
}
