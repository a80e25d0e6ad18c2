//! Ranking and tolerance properties over random corpora.

use super::common::index_from;
use gistpick::{MatchTier, SearchConfig, SearchIndex};
use proptest::prelude::*;

/// Generate random word-like strings.
fn word_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z]{2,10}").unwrap()
}

/// Generate random descriptions (multiple words).
fn description_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(word_strategy(), 1..8).prop_map(|words| words.join(" "))
}

fn corpus_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(description_strategy(), 1..12)
}

fn build(corpus: &[String]) -> SearchIndex {
    let refs: Vec<&str> = corpus.iter().map(String::as_str).collect();
    index_from(&refs)
}

/// Swap two adjacent characters (a typo the index has to forgive).
fn transpose(word: &str, at: usize) -> String {
    let mut chars: Vec<char> = word.chars().collect();
    let i = at % (chars.len() - 1);
    chars.swap(i, i + 1);
    chars.into_iter().collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_query_is_deterministic(corpus in corpus_strategy(), query in "[a-z ]{0,12}") {
        let index = build(&corpus);
        prop_assert_eq!(index.query(&query), index.query(&query));
    }

    #[test]
    fn prop_results_sorted_and_unique(corpus in corpus_strategy(), query in "[a-z]{1,8}( [a-z]{1,8})?") {
        let index = build(&corpus);
        let result = index.query(&query);

        for pair in result.as_slice().windows(2) {
            prop_assert!(pair[0].score >= pair[1].score);
            if pair[0].score == pair[1].score {
                prop_assert!(pair[0].position < pair[1].position);
            }
        }
        let mut ids = result.ids();
        ids.sort();
        ids.dedup();
        prop_assert_eq!(ids.len(), result.len());
    }

    /// Every word of every description finds that description, exactly.
    #[test]
    fn prop_indexed_words_are_found(corpus in corpus_strategy(), pick in any::<prop::sample::Index>()) {
        let index = build(&corpus);
        let doc = pick.index(corpus.len());
        let words: Vec<&str> = corpus[doc].split(' ').collect();
        let word = words[pick.index(words.len())];

        let result = index.query(word);
        let hit = result.iter().find(|m| m.id.as_str() == doc.to_string());
        prop_assert!(hit.is_some(), "{:?} missed doc {}", word, doc);
        prop_assert_eq!(hit.unwrap().tier, MatchTier::Exact);
    }

    /// A transposition in a long enough word still finds it.
    #[test]
    fn prop_transposition_tolerated(word in "[a-z]{4,10}", at in 0usize..10, filler in description_strategy()) {
        let typo = transpose(&word, at);
        let corpus = vec![filler, format!("notes on {}", word)];
        let index = build(&corpus);

        let ids: Vec<String> = index.query(&typo).iter().map(|m| m.id.as_str().to_string()).collect();
        prop_assert!(ids.contains(&"1".to_string()), "{:?} -> {:?} missed", word, typo);
    }

    #[test]
    fn prop_max_results_is_a_prefix(corpus in corpus_strategy(), query in "[a-z]{1,4}", limit in 1usize..5) {
        let records: Vec<_> = corpus
            .iter()
            .enumerate()
            .map(|(i, d)| gistpick::testing::make_record(&i.to_string(), d))
            .collect();
        let full = SearchIndex::build(&records, SearchConfig::default()).unwrap();
        let capped = SearchIndex::build(
            &records,
            SearchConfig { max_results: Some(limit), ..SearchConfig::default() },
        )
        .unwrap();

        let full = full.query(&query);
        let capped = capped.query(&query);
        prop_assert_eq!(capped.len(), full.len().min(limit));
        prop_assert_eq!(capped.as_slice(), &full.as_slice()[..capped.len()]);
    }
}
