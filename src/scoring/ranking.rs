// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: how matches get sorted.
//!
//! Score descending, then snapshot position ascending. The position tiebreak
//! keeps equal-scoring records in the order the store listed them, which is
//! what a stable sort on score alone would give, but stated outright so
//! hash-map iteration order upstream can't disturb it.

use crate::types::SearchMatch;
use std::cmp::Ordering;

/// Compare two matches for ranking.
///
/// 1. **Score** - higher first (`total_cmp`, so NaN can't break the order)
/// 2. **Position** - earlier record in the snapshot first
pub fn compare_matches(a: &SearchMatch, b: &SearchMatch) -> Ordering {
    b.score
        .total_cmp(&a.score)
        .then_with(|| a.position.cmp(&b.position))
}
