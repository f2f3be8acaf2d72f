// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for highlighting.
//!
//! With markers that can't appear in the input, stripping them from the
//! output must give back the original text byte for byte, and every span
//! must sit on char boundaries without overlapping the next one.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use zyros::{highlight_spans, highlight_with};

const OPEN: &str = "\u{E000}";
const CLOSE: &str = "\u{E001}";

#[derive(Debug, Arbitrary)]
struct HighlightInput {
    text: String,
    query: String,
}

fuzz_target!(|input: HighlightInput| {
    let text: String = input.text.chars().take(500).collect();
    let query: String = input.query.chars().take(50).collect();
    if text.contains(OPEN) || text.contains(CLOSE) {
        return;
    }

    // INVARIANT 1: Removing markers reproduces the text
    let marked = highlight_with(&text, &query, OPEN, CLOSE);
    let stripped = marked.replace(OPEN, "").replace(CLOSE, "");
    assert_eq!(stripped, text);

    // INVARIANT 2: Spans are ordered, disjoint and on char boundaries
    let spans = highlight_spans(&text, &query);
    for span in &spans {
        assert!(span.start < span.end && span.end <= text.len());
        assert!(text.is_char_boundary(span.start) && text.is_char_boundary(span.end));
    }
    for pair in spans.windows(2) {
        assert!(pair[0].end <= pair[1].start);
    }
});
