// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the bounded OSA distance.
//!
//! The reported distance must respect the bound and the length difference
//! lower bound, be symmetric, and be zero exactly on identical strings.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use zyros::osa_distance_within;

#[derive(Debug, Arbitrary)]
struct MatchInput {
    a: String,
    b: String,
    max: u8,
}

fuzz_target!(|input: MatchInput| {
    // Cap lengths to avoid timeouts
    let a: String = input.a.chars().take(50).collect();
    let b: String = input.b.chars().take(50).collect();
    let max = usize::from(input.max % 4);

    let osa = osa_distance_within(&a, &b, max);

    // INVARIANT 1: Reported distance never exceeds the bound
    if let Some(d) = osa {
        assert!(d <= max, "distance {} over bound {} for {:?}/{:?}", d, max, a, b);

        // INVARIANT 2: Length difference is a lower bound
        let len_diff = a.chars().count().abs_diff(b.chars().count());
        assert!(len_diff <= d, "len diff {} > distance {} for {:?}/{:?}", len_diff, d, a, b);
    }

    // INVARIANT 3: Symmetry
    assert_eq!(osa, osa_distance_within(&b, &a, max), "asymmetric for {:?}/{:?}", a, b);

    // INVARIANT 4: Identity
    assert_eq!(osa_distance_within(&a, &a, 0), Some(0));
    if a == b {
        assert_eq!(osa, Some(0));
    } else {
        assert_ne!(osa, Some(0));
    }
});
