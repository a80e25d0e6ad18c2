// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The data the picker moves around.
//!
//! Records belong to the record store. The index never keeps a `Record`; it
//! keeps an `IndexedEntry`, a read-only projection holding just the id, the
//! raw description and the record's position in the snapshot. Queries produce
//! a `QueryResult`, which is built once and replaced wholesale by the next one.
//!
//! # Invariants
//!
//! - **RecordId**: unique within a snapshot. The index builder rejects
//!   duplicates instead of silently keeping one of them.
//! - **IndexedEntry**: `position` is the record's index in the snapshot the
//!   index was built from. Ranking ties fall back to it.
//! - **QueryResult**: sorted by score descending, then position ascending.
//!   Never mutated after construction.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

// =============================================================================
// IDENTIFIERS
// =============================================================================

/// Opaque record identifier.
///
/// Stable for the lifetime of the process. The picker never inspects its
/// contents, only compares and hashes it.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(Arc<str>);

impl RecordId {
    pub fn new(id: impl Into<Arc<str>>) -> Self {
        RecordId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for RecordId {
    fn from(id: &str) -> Self {
        RecordId(Arc::from(id))
    }
}

impl From<String> for RecordId {
    fn from(id: String) -> Self {
        RecordId(Arc::from(id))
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// RECORDS
// =============================================================================

/// Full record body, fetched lazily.
///
/// Maps file name to file content. Absent on a `Record` until the detail
/// fetcher has populated the store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordDetails {
    #[serde(default)]
    pub files: BTreeMap<String, String>,
}

/// A record as the store holds it.
///
/// `description` is raw text. It may carry a title marker, but nothing in the
/// search path parses it. `language` is a comma-separated tag list used only
/// for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    pub id: RecordId,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub language: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<RecordDetails>,
}

impl Record {
    pub fn new(id: impl Into<RecordId>, description: impl Into<String>) -> Self {
        Record {
            id: id.into(),
            description: description.into(),
            language: String::new(),
            details: None,
        }
    }

    pub fn has_details(&self) -> bool {
        self.details.is_some()
    }

    /// Language tags, trimmed, empties dropped.
    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.language
            .split(',')
            .map(str::trim)
            .filter(|lang| !lang.is_empty())
    }
}

// =============================================================================
// INDEX & RESULTS
// =============================================================================

/// What the index keeps per record: id, searchable text, snapshot position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexedEntry {
    pub id: RecordId,
    pub text: Arc<str>,
    pub position: usize,
}

/// Which tier produced a term match. Lower is better.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchTier {
    /// Query term equals a description token.
    Exact = 1,
    /// Query term is a prefix of a description token.
    Prefix = 2,
    /// Query term is within the edit budget of a description token.
    Fuzzy = 3,
}

/// One ranked hit.
///
/// `tier` is the worst tier across the query's terms: a two-term query where
/// one term matched exactly and one fuzzily reports `Fuzzy`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchMatch {
    pub id: RecordId,
    pub score: f64,
    /// The raw description that matched.
    pub text: Arc<str>,
    pub tier: MatchTier,
    /// Description token each query term matched, in query-term order.
    pub matched_terms: Vec<String>,
    #[serde(skip)]
    pub position: usize,
}

/// Ranked matches for one query.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct QueryResult {
    matches: Vec<SearchMatch>,
}

impl QueryResult {
    /// Wrap already-ranked matches.
    pub fn from_ranked(matches: Vec<SearchMatch>) -> Self {
        QueryResult { matches }
    }

    pub fn empty() -> Self {
        QueryResult::default()
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    pub fn get(&self, position: usize) -> Option<&SearchMatch> {
        self.matches.get(position)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SearchMatch> {
        self.matches.iter()
    }

    pub fn as_slice(&self) -> &[SearchMatch] {
        &self.matches
    }

    /// Ids in rank order.
    pub fn ids(&self) -> Vec<RecordId> {
        self.matches.iter().map(|m| m.id.clone()).collect()
    }
}

impl<'a> IntoIterator for &'a QueryResult {
    type Item = &'a SearchMatch;
    type IntoIter = std::slice::Iter<'a, SearchMatch>;

    fn into_iter(self) -> Self::IntoIter {
        self.matches.iter()
    }
}
