// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Edit distance with an early-exit optimization.
//!
//! The key insight: `|len(a) - len(b)|` is a lower bound on edit distance.
//! If two strings differ in length by more than the threshold, skip the O(nm) DP.
//!
//! Distance here is optimal string alignment: an adjacent transposition
//! counts as one edit. Typing "wigdet" for "widget" is one slip of the
//! fingers, not two.

/// Optimal string alignment distance, if it's at most `max`.
///
/// Bounded with two early exits:
/// 1. If length difference exceeds `max`, return `None` immediately
/// 2. If two consecutive rows are entirely above `max`, abandon the DP
///
/// The row-minimum exit is still sound: every cell in row `i+1` is derived
/// from row `i` or row `i-1` plus a non-negative cost, and both rows were
/// already above `max` when we'd bail.
pub fn osa_distance_within(a: &str, b: &str, max: usize) -> Option<usize> {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    if a.len().abs_diff(b.len()) > max {
        return None;
    }
    if a.is_empty() || b.is_empty() {
        let d = a.len().max(b.len());
        return (d <= max).then_some(d);
    }

    let width = b.len() + 1;
    let mut two_back: Vec<usize> = vec![0; width];
    let mut prev: Vec<usize> = (0..width).collect();
    let mut curr: Vec<usize> = vec![0; width];

    for i in 1..=a.len() {
        curr[0] = i;
        let mut min_row = curr[0];

        for j in 1..=b.len() {
            let cost = usize::from(a[i - 1] != b[j - 1]);
            let mut value = (prev[j] + 1).min(curr[j - 1] + 1).min(prev[j - 1] + cost);
            if i > 1 && j > 1 && a[i - 1] == b[j - 2] && a[i - 2] == b[j - 1] {
                value = value.min(two_back[j - 2] + 1);
            }
            curr[j] = value;
            min_row = min_row.min(value);
        }

        if min_row > max && prev.iter().all(|&v| v > max) {
            return None;
        }

        std::mem::swap(&mut two_back, &mut prev);
        std::mem::swap(&mut prev, &mut curr);
    }

    let d = prev[b.len()];
    (d <= max).then_some(d)
}
