// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Tunables for a search session.
//!
//! Everything has a default, so an empty JSON object is a valid config file.
//! Field names are camelCase on disk.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchConfig {
    /// Query terms shorter than this get no typo tolerance.
    pub fuzzy_min_len: usize,
    /// Query terms at least this long may absorb two edits.
    pub two_edit_min_len: usize,
    /// Cap on returned matches. `None` returns every match.
    pub max_results: Option<usize>,
    /// Tag selected when a commit resets the tag filter.
    pub default_tag_label: String,
    /// Prefix the tag layer expects on tag labels.
    pub tag_prefix: String,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            fuzzy_min_len: 4,
            two_edit_min_len: 8,
            max_results: None,
            default_tag_label: "All".to_string(),
            tag_prefix: "lang@".to_string(),
        }
    }
}

impl SearchConfig {
    /// Load and validate a JSON config file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let raw = fs::read_to_string(path.as_ref())?;
        let config: SearchConfig = serde_json::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.fuzzy_min_len == 0 {
            return Err(Error::Config("fuzzyMinLen must be at least 1".to_string()));
        }
        if self.two_edit_min_len < self.fuzzy_min_len {
            return Err(Error::Config(format!(
                "twoEditMinLen ({}) must be >= fuzzyMinLen ({})",
                self.two_edit_min_len, self.fuzzy_min_len
            )));
        }
        if self.max_results == Some(0) {
            return Err(Error::Config("maxResults must be positive".to_string()));
        }
        Ok(())
    }

    /// The label carried by the tag-filter reset signal.
    pub fn reset_tag(&self) -> String {
        format!("{}{}", self.tag_prefix, self.default_tag_label)
    }
}
