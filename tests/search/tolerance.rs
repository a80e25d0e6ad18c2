//! Typo, prefix and normalization tolerance.

use super::common::{index_from, ranked_ids, snippet_index};
use gistpick::{MatchTier, SearchConfig, SearchIndex};

#[test]
fn test_partial_word_matches_by_prefix() {
    let index = snippet_index();
    let result = index.query("cach");

    assert_eq!(ranked_ids(&index, "cach"), vec!["g3", "g1"]);
    assert!(result.iter().all(|m| m.tier == MatchTier::Prefix));
}

#[test]
fn test_transposed_letters_still_match() {
    let index = snippet_index();
    assert_eq!(ranked_ids(&index, "cahce"), vec!["g3", "g1"]);
    assert_eq!(ranked_ids(&index, "postgers"), vec!["g6", "g4"]);
}

#[test]
fn test_substitution_and_deletion() {
    let index = snippet_index();
    assert_eq!(ranked_ids(&index, "dockar"), vec!["g4"]);
    assert_eq!(ranked_ids(&index, "imges"), vec!["g7"]);
}

#[test]
fn test_two_edits_need_long_terms() {
    let index = index_from(&["invalidation rules", "pooling rules"]);
    // 12 chars: one substitution plus one transposition
    assert_eq!(ranked_ids(&index, "invalidetoin"), vec!["0"]);
    // 7 chars gets a single edit, two is too many
    assert!(ranked_ids(&index, "pualing").is_empty());
}

#[test]
fn test_short_terms_match_exactly_or_by_prefix_only() {
    let index = index_from(&["log parsing", "lag time"]);
    assert_eq!(ranked_ids(&index, "log"), vec!["0"]);
    assert_eq!(ranked_ids(&index, "la"), vec!["1"]);
}

#[test]
fn test_case_and_diacritics_are_ignored() {
    let index = snippet_index();
    assert_eq!(ranked_ids(&index, "CACHE"), ranked_ids(&index, "cache"));
    assert_eq!(ranked_ids(&index, "CAFÉ"), vec!["g8"]);
    assert_eq!(ranked_ids(&index, "cafe"), vec!["g8"]);
}

#[test]
fn test_punctuation_only_query_is_empty() {
    let index = snippet_index();
    assert!(index.query("   ").is_empty());
    assert!(index.query("--- !!").is_empty());
    assert!(index.query("").is_empty());
}

#[test]
fn test_nonsense_is_empty() {
    let index = snippet_index();
    assert!(index.query("zzzznomatch").is_empty());
}

#[test]
fn test_fuzzy_threshold_is_configurable() {
    let records = vec![gistpick::testing::make_record("a", "cache layer")];
    let strict = SearchIndex::build(
        &records,
        SearchConfig {
            fuzzy_min_len: 6,
            ..SearchConfig::default()
        },
    )
    .unwrap();

    // Five letters, below the raised threshold
    assert!(strict.query("cahce").is_empty());
    assert_eq!(strict.query("cache").len(), 1);
}
