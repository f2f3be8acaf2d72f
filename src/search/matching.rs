// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Per-record matching: query terms against tokenized fields.

use crate::fuzzy::{edit_budget, FuzzyMatcher};
use crate::index::IndexedRecord;
use crate::scoring::{mean_quality, FieldQualities};
use crate::types::{Field, MatchedSpan, SearchHit, SearchableRecord};
use crate::utils::{tokenize, Token};

/// Fewest characters a query needs before search kicks in.
pub const MIN_QUERY_CHARS: usize = 2;

/// Split a raw query into normalized, de-duplicated search terms.
///
/// Returns nothing for queries under `MIN_QUERY_CHARS` (after trimming).
/// One-character words inside a longer query are dropped too: a lone "a"
/// would substring-match nearly every record.
pub fn query_terms(query: &str) -> Vec<String> {
    if query.trim().chars().count() < MIN_QUERY_CHARS {
        return Vec::new();
    }

    let mut terms: Vec<String> = Vec::new();
    for token in tokenize(query) {
        if token.text.chars().count() >= MIN_QUERY_CHARS && !terms.contains(&token.text) {
            terms.push(token.text);
        }
    }
    terms
}

/// Best quality of `term` over `tokens`, plus the indices of every token it hit.
fn best_match<'t, I>(term: &str, tokens: I, matcher: &dyn FuzzyMatcher) -> (f64, Vec<usize>)
where
    I: IntoIterator<Item = &'t Token>,
{
    let budget = edit_budget(term);
    let mut best = 0.0_f64;
    let mut hit = Vec::new();

    for (i, token) in tokens.into_iter().enumerate() {
        if let Some(m) = matcher.find(term, &token.text, budget) {
            if m.quality > 0.0 {
                best = best.max(m.quality.min(1.0));
                hit.push(i);
            }
        }
    }

    (best, hit)
}

/// Score one record. `None` means the combined score is zero.
pub fn score_record(
    record: &SearchableRecord,
    entry: &IndexedRecord,
    terms: &[String],
    matcher: &dyn FuzzyMatcher,
) -> Option<SearchHit> {
    let mut qualities = FieldQualities::default();
    let mut spans: Vec<MatchedSpan> = Vec::new();

    for field in [Field::Title, Field::Description, Field::Body] {
        let tokens = entry.text_tokens(field);
        if tokens.is_empty() {
            continue;
        }

        let mut per_term = Vec::with_capacity(terms.len());
        let mut hit_tokens: Vec<usize> = Vec::new();
        for term in terms {
            let (quality, hits) = best_match(term, tokens, matcher);
            per_term.push(quality);
            hit_tokens.extend(hits);
        }
        qualities.set(field, mean_quality(&per_term));

        hit_tokens.sort_unstable();
        hit_tokens.dedup();
        spans.extend(hit_tokens.into_iter().map(|i| MatchedSpan {
            field,
            range: tokens[i].span.clone(),
            tag: None,
        }));
    }

    if !entry.tags.is_empty() {
        let mut per_term = Vec::with_capacity(terms.len());
        let mut hit_tokens: Vec<usize> = Vec::new();
        for term in terms {
            let (quality, hits) = best_match(term, entry.tags.iter().map(|t| &t.token), matcher);
            per_term.push(quality);
            hit_tokens.extend(hits);
        }
        qualities.set(Field::Tags, mean_quality(&per_term));

        hit_tokens.sort_unstable();
        hit_tokens.dedup();
        spans.extend(hit_tokens.into_iter().map(|i| {
            let tag_token = &entry.tags[i];
            MatchedSpan {
                field: Field::Tags,
                range: tag_token.token.span.clone(),
                tag: Some(tag_token.tag.clone()),
            }
        }));
    }

    let score = qualities.score();
    if score > 0.0 {
        Some(SearchHit {
            record: record.clone(),
            score,
            matched_spans: spans,
        })
    } else {
        None
    }
}
