// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Highlighting: wrap the parts of a text that match the query.
//!
//! Matching here is literal and case-insensitive, not fuzzy. It runs on the
//! original text (no normalization), so every byte outside a marked span
//! comes out exactly as it went in, casing included.
//!
//! # Candidates
//!
//! The whole trimmed query, plus each whitespace-separated word of it with
//! at least `MIN_QUERY_CHARS` characters. "widget setup" highlights the
//! phrase where it appears intact and the words where it doesn't.
//!
//! # Overlaps
//!
//! All occurrences of all candidates are collected, then accepted greedily
//! longest-first, left-most among equal lengths, skipping anything that
//! overlaps an accepted span.

use std::ops::Range;

use crate::search::MIN_QUERY_CHARS;

pub const DEFAULT_OPEN: &str = "<mark>";
pub const DEFAULT_CLOSE: &str = "</mark>";

/// Highlight with `<mark>` / `</mark>`.
pub fn highlight(text: &str, query: &str) -> String {
    highlight_with(text, query, DEFAULT_OPEN, DEFAULT_CLOSE)
}

/// Highlight with custom markers.
pub fn highlight_with(text: &str, query: &str, open: &str, close: &str) -> String {
    let spans = highlight_spans(text, query);
    if spans.is_empty() {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len() + spans.len() * (open.len() + close.len()));
    let mut cursor = 0;
    for span in spans {
        out.push_str(&text[cursor..span.start]);
        out.push_str(open);
        out.push_str(&text[span.clone()]);
        out.push_str(close);
        cursor = span.end;
    }
    out.push_str(&text[cursor..]);
    out
}

/// Byte ranges of `text` that match the query, sorted and non-overlapping.
pub fn highlight_spans(text: &str, query: &str) -> Vec<Range<usize>> {
    let candidates = candidates(query);
    if candidates.is_empty() || text.is_empty() {
        return Vec::new();
    }

    let mut found: Vec<Range<usize>> = Vec::new();
    for (start, _) in text.char_indices() {
        for candidate in &candidates {
            if let Some(end) = match_at(text, start, candidate) {
                found.push(start..end);
            }
        }
    }

    found.sort_by(|a, b| b.len().cmp(&a.len()).then(a.start.cmp(&b.start)));

    let mut accepted: Vec<Range<usize>> = Vec::new();
    for span in found {
        if accepted
            .iter()
            .all(|a| span.end <= a.start || span.start >= a.end)
        {
            accepted.push(span);
        }
    }
    accepted.sort_by_key(|r| r.start);
    accepted
}

fn candidates(query: &str) -> Vec<Vec<char>> {
    let trimmed = query.trim();
    if trimmed.chars().count() < MIN_QUERY_CHARS {
        return Vec::new();
    }

    let mut out: Vec<Vec<char>> = vec![trimmed.chars().collect()];
    for word in trimmed.split_whitespace() {
        let chars: Vec<char> = word.chars().collect();
        if chars.len() >= MIN_QUERY_CHARS && !out.contains(&chars) {
            out.push(chars);
        }
    }
    out
}

/// End byte of `needle` matched case-insensitively at `start`, if it matches.
fn match_at(text: &str, start: usize, needle: &[char]) -> Option<usize> {
    let mut chars = text[start..].char_indices();
    let mut end = start;
    for &n in needle {
        let (offset, c) = chars.next()?;
        if !eq_ignore_case(c, n) {
            return None;
        }
        end = start + offset + c.len_utf8();
    }
    Some(end)
}

fn eq_ignore_case(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase())
}
