// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The fuzzy search index: exact → prefix → fuzzy over one description field.
//!
//! Built once per search session from a snapshot of the record store and
//! never touched again. Every description is tokenized into normalized terms;
//! the terms form a sorted vocabulary with one posting list each. A query is
//! tokenized the same way and each query term is matched against the
//! vocabulary in three tiers:
//!
//! - **Exact**: hash lookup. "cache" finds "cache".
//! - **Prefix**: binary search into the sorted vocabulary, then a forward
//!   scan. "cach" finds "cache", "caching".
//! - **Fuzzy**: bounded edit distance over the vocabulary. "cahce" finds
//!   "cache". Short terms get no edit budget at all.
//!
//! Multi-term queries are AND: a record must match every term somewhere in
//! its description. Per-term scores are summed. Records that miss a term are
//! dropped, not ranked last, so "no match" is an empty result.

use crate::config::SearchConfig;
use crate::error::{Error, Result};
use crate::fuzzy::{bounded_distance, edit_budget};
use crate::scoring::ranking::compare_matches;
use crate::scoring::{position_bonus, term_score};
use crate::types::{IndexedEntry, MatchTier, QueryResult, Record, RecordId, SearchMatch};
use crate::utils::tokenize;
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

/// Where a vocabulary term occurs: which entry, and the first token index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Posting {
    entry: usize,
    token_index: usize,
}

/// Best match of one query term inside one entry.
#[derive(Debug, Clone)]
struct TermHit {
    score: f64,
    tier: MatchTier,
    token: usize,
}

/// Immutable fuzzy index over a record snapshot.
#[derive(Debug, Clone)]
pub struct SearchIndex {
    entries: Vec<IndexedEntry>,
    /// Token count per entry, for the position bonus.
    token_counts: Vec<usize>,
    /// Sorted, unique normalized terms.
    vocabulary: Vec<String>,
    /// Term → vocabulary index.
    term_lookup: HashMap<String, usize>,
    /// One posting list per vocabulary term, sorted by entry.
    postings: Vec<Vec<Posting>>,
    config: SearchConfig,
}

/// Build an index over `records`. Alias for [`SearchIndex::build`].
pub fn init_search(records: &[Record], config: SearchConfig) -> Result<SearchIndex> {
    SearchIndex::build(records, config)
}

impl SearchIndex {
    /// Build the index from a snapshot.
    ///
    /// Fails with [`Error::DuplicateRecordId`] if two records share an id,
    /// and with [`Error::Config`] if `config` doesn't validate.
    pub fn build(records: &[Record], config: SearchConfig) -> Result<Self> {
        config.validate()?;

        let mut seen: HashMap<&RecordId, usize> = HashMap::with_capacity(records.len());
        for (position, record) in records.iter().enumerate() {
            if let Some(&first) = seen.get(&record.id) {
                return Err(Error::DuplicateRecordId {
                    id: record.id.clone(),
                    first,
                    second: position,
                });
            }
            seen.insert(&record.id, position);
        }

        let mut entries = Vec::with_capacity(records.len());
        let mut token_counts = Vec::with_capacity(records.len());
        let mut term_postings: BTreeMap<String, Vec<Posting>> = BTreeMap::new();

        for (position, record) in records.iter().enumerate() {
            let tokens = tokenize(&record.description);
            token_counts.push(tokens.len());

            for (token_index, token) in tokens.into_iter().enumerate() {
                let list = term_postings.entry(token).or_default();
                // Only the first occurrence per entry; entries arrive in order
                if list.last().map(|p| p.entry) != Some(position) {
                    list.push(Posting {
                        entry: position,
                        token_index,
                    });
                }
            }

            entries.push(IndexedEntry {
                id: record.id.clone(),
                text: Arc::from(record.description.as_str()),
                position,
            });
        }

        let mut vocabulary = Vec::with_capacity(term_postings.len());
        let mut postings = Vec::with_capacity(term_postings.len());
        for (term, list) in term_postings {
            vocabulary.push(term);
            postings.push(list);
        }
        let term_lookup = vocabulary
            .iter()
            .enumerate()
            .map(|(idx, term)| (term.clone(), idx))
            .collect();

        log::debug!(
            "indexed {} records ({} distinct terms)",
            entries.len(),
            vocabulary.len()
        );

        Ok(SearchIndex {
            entries,
            token_counts,
            vocabulary,
            term_lookup,
            postings,
            config,
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[IndexedEntry] {
        &self.entries
    }

    pub fn vocabulary(&self) -> &[String] {
        &self.vocabulary
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Rank every record against `text`.
    ///
    /// Empty or all-punctuation text gives an empty result. The same text
    /// against the same index always gives the same ordered list.
    pub fn query(&self, text: &str) -> QueryResult {
        let terms = tokenize(text);
        if terms.is_empty() || self.entries.is_empty() {
            return QueryResult::empty();
        }

        // Runs on the caller's thread; a query is a handful of terms
        let per_term: Vec<HashMap<usize, TermHit>> =
            terms.iter().map(|term| self.match_term(term)).collect();

        // AND semantics: candidates come from the sparsest term
        let Some(narrowest) = per_term.iter().min_by_key(|hits| hits.len()) else {
            return QueryResult::empty();
        };
        let mut candidates: Vec<usize> = narrowest.keys().copied().collect();
        candidates.sort_unstable();

        let mut matches: Vec<SearchMatch> = candidates
            .into_iter()
            .filter_map(|entry| self.combine(entry, &per_term))
            .collect();

        matches.sort_by(compare_matches);
        if let Some(limit) = self.config.max_results {
            matches.truncate(limit);
        }
        QueryResult::from_ranked(matches)
    }

    /// Sum one entry's per-term hits. `None` if any term missed it.
    fn combine(&self, entry: usize, per_term: &[HashMap<usize, TermHit>]) -> Option<SearchMatch> {
        let mut score = 0.0;
        let mut tier = MatchTier::Exact;
        let mut matched_terms = Vec::with_capacity(per_term.len());

        for hits in per_term {
            let hit = hits.get(&entry)?;
            score += hit.score;
            tier = tier.max(hit.tier);
            matched_terms.push(self.vocabulary[hit.token].clone());
        }

        let indexed = &self.entries[entry];
        Some(SearchMatch {
            id: indexed.id.clone(),
            score,
            text: Arc::clone(&indexed.text),
            tier,
            matched_terms,
            position: indexed.position,
        })
    }

    /// Best hit per entry for a single normalized query term.
    fn match_term(&self, term: &str) -> HashMap<usize, TermHit> {
        let mut hits: HashMap<usize, TermHit> = HashMap::new();
        let term_len = term.chars().count();

        // Tier 1: exact
        if let Some(&vocab_idx) = self.term_lookup.get(term) {
            self.record_hits(&mut hits, vocab_idx, MatchTier::Exact, 0, term_len);
        }

        // Tier 2: prefix. Vocabulary is sorted, so all extensions are contiguous
        let start = self.vocabulary.partition_point(|v| v.as_str() < term);
        for vocab_idx in start..self.vocabulary.len() {
            let candidate = &self.vocabulary[vocab_idx];
            if !candidate.starts_with(term) {
                break;
            }
            if candidate != term {
                self.record_hits(&mut hits, vocab_idx, MatchTier::Prefix, 0, term_len);
            }
        }

        // Tier 3: fuzzy
        let budget = edit_budget(term_len, &self.config);
        if budget > 0 {
            for (vocab_idx, candidate) in self.vocabulary.iter().enumerate() {
                if candidate.starts_with(term) {
                    continue;
                }
                if let Some(distance) = bounded_distance(term, candidate, budget) {
                    self.record_hits(&mut hits, vocab_idx, MatchTier::Fuzzy, distance, term_len);
                }
            }
        }

        hits
    }

    fn record_hits(
        &self,
        hits: &mut HashMap<usize, TermHit>,
        vocab_idx: usize,
        tier: MatchTier,
        distance: usize,
        term_len: usize,
    ) {
        let token_len = self.vocabulary[vocab_idx].chars().count();
        let base = term_score(tier, distance, term_len, token_len);

        for posting in &self.postings[vocab_idx] {
            let score = base + position_bonus(posting.token_index, self.token_counts[posting.entry]);
            let better = hits.get(&posting.entry).map_or(true, |existing| {
                score > existing.score || (score == existing.score && vocab_idx < existing.token)
            });
            if better {
                hits.insert(
                    posting.entry,
                    TermHit {
                        score,
                        tier,
                        token: vocab_idx,
                    },
                );
            }
        }
    }
}
