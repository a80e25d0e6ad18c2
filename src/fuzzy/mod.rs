// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy matching: typo tolerance via bounded edit distance.
//!
//! One kernel (optimal string alignment, so a swapped pair of letters costs one
//! edit) plus the policy that decides how many edits a query term is allowed.

mod levenshtein;

pub use levenshtein::*;
