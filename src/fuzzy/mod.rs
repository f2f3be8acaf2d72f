// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy search: typo tolerance via edit distance.
//!
//! The query pipeline never talks to an edit-distance routine directly. It
//! goes through `FuzzyMatcher`, which answers one question: how well does
//! this (normalized) needle match this (normalized) haystack token, and
//! where? Anything that can produce a quality in `[0, 1]` can stand in.
//!
//! # Match quality
//!
//! | Kind                          | Quality            |
//! |-------------------------------|--------------------|
//! | Exact token or token prefix   | 1.0                |
//! | Substring inside the token    | 0.75               |
//! | Within `max_edits` (distance d)| `1 / (1 + d)`     |
//!
//! Fuzzy hits top out at 0.5, so a typo never ties a clean hit.

mod distance;

use std::ops::Range;

pub use distance::osa_distance_within;

/// Quality of a needle that appears inside a token but not at its start.
pub const SUBSTRING_QUALITY: f64 = 0.75;

/// Allowed edits for a needle, by its length in characters.
///
/// Short needles must match cleanly: with one edit, "cat" matches "car",
/// "bat", "cut" and half the dictionary. Long needles get two so a
/// transposition plus a missing plural still lands.
pub fn edit_budget(needle: &str) -> usize {
    match needle.chars().count() {
        0..=2 => 0,
        3..=4 => 1,
        _ => 2,
    }
}

/// One fuzzy hit: how good, and which bytes of the haystack it covers.
#[derive(Debug, Clone, PartialEq)]
pub struct FuzzyMatch {
    pub quality: f64,
    pub span: Range<usize>,
}

/// Approximate matching of a needle against one haystack token.
///
/// Implementations must return `None` rather than a zero-quality match, and
/// must never report a quality above 1.0.
pub trait FuzzyMatcher: Send + Sync {
    fn find(&self, needle: &str, haystack: &str, max_edits: usize) -> Option<FuzzyMatch>;
}

/// Default matcher: substring first, then bounded OSA distance.
///
/// The edit distance is taken against the whole token and against the
/// token's prefix of the needle's length, whichever is smaller. That makes
/// "wigdet" hit "widgets" at distance 1 instead of 2.
#[derive(Debug, Clone, Copy, Default)]
pub struct EditDistanceMatcher;

impl FuzzyMatcher for EditDistanceMatcher {
    fn find(&self, needle: &str, haystack: &str, max_edits: usize) -> Option<FuzzyMatch> {
        if needle.is_empty() || haystack.is_empty() {
            return None;
        }

        if let Some(pos) = haystack.find(needle) {
            let quality = if pos == 0 { 1.0 } else { SUBSTRING_QUALITY };
            return Some(FuzzyMatch {
                quality,
                span: pos..pos + needle.len(),
            });
        }

        if max_edits == 0 {
            return None;
        }

        let mut best = osa_distance_within(needle, haystack, max_edits)
            .map(|d| (d, 0..haystack.len()));

        let needle_chars = needle.chars().count();
        if haystack.chars().count() > needle_chars {
            let prefix_end = haystack
                .char_indices()
                .nth(needle_chars)
                .map_or(haystack.len(), |(i, _)| i);
            if let Some(d) = osa_distance_within(needle, &haystack[..prefix_end], max_edits) {
                if best.as_ref().map_or(true, |(bd, _)| d < *bd) {
                    best = Some((d, 0..prefix_end));
                }
            }
        }

        best.map(|(d, span)| FuzzyMatch {
            quality: 1.0 / (1.0 + d as f64),
            span,
        })
    }
}
