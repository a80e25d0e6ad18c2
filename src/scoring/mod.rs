// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how matches get their numbers and their order.
//!
//! Tier dominates everything else. The weakest prefix match outscores the
//! strongest fuzzy match for the same term, and position within the
//! description only nudges scores inside a tier.

mod core;
pub mod ranking;

pub use self::core::*;
