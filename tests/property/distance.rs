//! Differential tests: bounded OSA distance against `strsim`.

use proptest::prelude::*;

use zyros::osa_distance_within;

fn short_string() -> impl Strategy<Value = String> {
    // Small alphabet so near-misses and transpositions are common
    prop::string::string_regex("[abcdé]{0,8}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    #[test]
    fn prop_osa_matches_strsim(a in short_string(), b in short_string(), max in 0usize..4) {
        let expected = strsim::osa_distance(&a, &b);
        let got = osa_distance_within(&a, &b, max);
        if expected <= max {
            prop_assert_eq!(got, Some(expected), "a={:?} b={:?}", a, b);
        } else {
            prop_assert_eq!(got, None, "a={:?} b={:?}", a, b);
        }
    }

    #[test]
    fn prop_osa_never_exceeds_levenshtein(a in short_string(), b in short_string()) {
        let lev = strsim::levenshtein(&a, &b);
        prop_assert!(osa_distance_within(&a, &b, lev).is_some());
    }

    #[test]
    fn prop_osa_is_symmetric(a in short_string(), b in short_string()) {
        prop_assert_eq!(osa_distance_within(&a, &b, 8), osa_distance_within(&b, &a, 8));
    }
}
