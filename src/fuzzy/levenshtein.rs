// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Edit distance with early exits.
//!
//! `|len(a) - len(b)|` is a lower bound on edit distance, so pairs whose
//! lengths differ by more than the budget are rejected before the DP runs.
//! Inside the DP, once two consecutive rows both exceed the budget no later
//! cell can come back under it and the comparison is abandoned.
//!
//! Distance is optimal string alignment: insert, delete, substitute, and swap
//! of two adjacent characters each cost one. "cahce" is one edit from "cache".

use crate::config::SearchConfig;

/// Largest edit budget the index will ever grant a term.
pub const MAX_EDITS: usize = 2;

/// Edit distance between `a` and `b` if it is at most `max`.
///
/// Returns `None` as soon as the distance is known to exceed `max`.
/// Lengths are counted in characters, not bytes.
pub fn bounded_distance(a: &str, b: &str, max: usize) -> Option<usize> {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    // Early-exit: length difference is a lower bound on edit distance
    if a.len().abs_diff(b.len()) > max {
        return None;
    }
    if a.is_empty() || b.is_empty() {
        return Some(a.len().max(b.len()));
    }

    let width = b.len() + 1;
    let mut before: Vec<usize> = vec![0; width];
    let mut prev: Vec<usize> = (0..width).collect();
    let mut curr: Vec<usize> = vec![0; width];
    let mut prev_min = 0;

    for i in 1..=a.len() {
        curr[0] = i;
        let mut row_min = curr[0];

        for j in 1..=b.len() {
            let cost = usize::from(a[i - 1] != b[j - 1]);
            let mut cell = (prev[j] + 1).min(curr[j - 1] + 1).min(prev[j - 1] + cost);
            if i > 1 && j > 1 && a[i - 1] == b[j - 2] && a[i - 2] == b[j - 1] {
                cell = cell.min(before[j - 2] + 1);
            }
            curr[j] = cell;
            row_min = row_min.min(cell);
        }

        // A transposition can reach back two rows, so both must be over budget
        if row_min > max && prev_min > max {
            return None;
        }
        prev_min = row_min;

        std::mem::swap(&mut before, &mut prev);
        std::mem::swap(&mut prev, &mut curr);
    }

    let distance = prev[b.len()];
    (distance <= max).then_some(distance)
}

/// Are these strings within `max` edits of each other?
pub fn within_distance(a: &str, b: &str, max: usize) -> bool {
    bounded_distance(a, b, max).is_some()
}

/// How many edits a query term of `term_len` characters may absorb.
///
/// Short terms get none: at three letters a single edit matches half the
/// vocabulary. The thresholds come from `SearchConfig`.
pub fn edit_budget(term_len: usize, config: &SearchConfig) -> usize {
    if term_len < config.fuzzy_min_len {
        0
    } else if term_len < config.two_edit_min_len {
        1
    } else {
        MAX_EDITS
    }
}
