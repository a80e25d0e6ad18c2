// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind term scores.
//!
//! # Key Invariant: Tier Dominance
//!
//! ```text
//! Exact                       = 100.0
//! Prefix   (worst coverage)   >  50.0
//! Prefix   (best coverage)    =  65.0
//! Fuzzy    (best, 1 edit)     =  31.2
//! Position bonus              <=  0.5
//! ```
//!
//! Exact + worst position beats Prefix + best position, and the same holds
//! between Prefix and Fuzzy. `tests::tier_dominance_holds` pins this down.

use crate::types::MatchTier;

// =============================================================================
// SCORING CONSTANTS
// =============================================================================

/// Term equals a description token.
pub const EXACT_SCORE: f64 = 100.0;

/// Term is a proper prefix of a description token.
pub const PREFIX_SCORE: f64 = 50.0;

/// Prefix bonus scaled by how much of the token the term covers (30% max).
pub const PREFIX_COVERAGE_COEFFICIENT: f64 = 0.3;

/// Base fuzzy scores by edit distance.
pub const FUZZY_DISTANCE_1_SCORE: f64 = 30.0;
pub const FUZZY_DISTANCE_2_SCORE: f64 = 15.0;

/// Penalty per edit (20% per edit).
pub const FUZZY_EDIT_PENALTY: f64 = 0.2;

/// Length similarity bonus coefficient (30% of score).
pub const FUZZY_LENGTH_BONUS_COEFFICIENT: f64 = 0.3;

/// Matches on the first description token get this; the last get ~0.
pub const MAX_POSITION_BONUS: f64 = 0.5;

/// Score for a prefix match of `term_len` characters into a `token_len` token.
#[inline]
pub fn prefix_score(term_len: usize, token_len: usize) -> f64 {
    let coverage = if token_len == 0 {
        0.0
    } else {
        (term_len as f64 / token_len as f64).min(1.0)
    };
    PREFIX_SCORE * (1.0 + coverage * PREFIX_COVERAGE_COEFFICIENT)
}

/// Score for a fuzzy match at `distance` edits.
///
/// Same shape as the prefix score: a base by distance, a per-edit penalty,
/// and a bonus for tokens whose length is close to the query term.
#[inline]
pub fn fuzzy_score(distance: usize, term_len: usize, token_len: usize) -> f64 {
    let base_score = match distance {
        0 | 1 => FUZZY_DISTANCE_1_SCORE,
        _ => FUZZY_DISTANCE_2_SCORE,
    };
    let penalty = 1.0 - (distance.max(1) as f64 * FUZZY_EDIT_PENALTY);
    let length_diff = term_len.abs_diff(token_len);
    let length_bonus = 1.0 / (1.0 + length_diff as f64);
    base_score * penalty * (1.0 + length_bonus * FUZZY_LENGTH_BONUS_COEFFICIENT)
}

/// Small bonus for matches early in the description.
///
/// `token_index` is the matched token's position among `token_count` tokens.
#[inline]
pub fn position_bonus(token_index: usize, token_count: usize) -> f64 {
    if token_count == 0 {
        return 0.0;
    }
    MAX_POSITION_BONUS * (1.0 - token_index as f64 / token_count as f64)
}

/// Score a single term match of the given tier.
pub fn term_score(tier: MatchTier, distance: usize, term_len: usize, token_len: usize) -> f64 {
    match tier {
        MatchTier::Exact => EXACT_SCORE,
        MatchTier::Prefix => prefix_score(term_len, token_len),
        MatchTier::Fuzzy => fuzzy_score(distance, term_len, token_len),
    }
}
