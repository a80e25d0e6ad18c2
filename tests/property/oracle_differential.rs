//! Differential testing: the bounded edit-distance kernel vs. strsim.
//!
//! `strsim::osa_distance` is an unbounded, straightforward optimal string
//! alignment. Within the bound the two must agree exactly; beyond it the
//! kernel must say `None`.

use gistpick::{bounded_distance, within_distance};
use proptest::prelude::*;

fn short_word() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-e]{0,9}").unwrap()
}

fn unicode_word() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(vec!['a', 'é', 'ß', 'ü', 'ø', 'z', '日']), 0..8)
        .prop_map(|chars| chars.into_iter().collect())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn prop_bounded_matches_oracle(a in short_word(), b in short_word(), max in 0usize..4) {
        let oracle = strsim::osa_distance(&a, &b);
        let expected = (oracle <= max).then_some(oracle);
        prop_assert_eq!(bounded_distance(&a, &b, max), expected, "{:?} vs {:?}", a, b);
    }

    #[test]
    fn prop_bounded_matches_oracle_unicode(a in unicode_word(), b in unicode_word(), max in 0usize..4) {
        let oracle = strsim::osa_distance(&a, &b);
        let expected = (oracle <= max).then_some(oracle);
        prop_assert_eq!(bounded_distance(&a, &b, max), expected);
    }

    #[test]
    fn prop_within_is_symmetric(a in short_word(), b in short_word(), max in 0usize..4) {
        prop_assert_eq!(within_distance(&a, &b, max), within_distance(&b, &a, max));
    }
}
