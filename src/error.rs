// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Errors the picker can surface to its caller.
//!
//! Two of these are contract violations rather than runtime hiccups.
//! `DuplicateRecordId` means the snapshot handed to the index builder was
//! malformed; `UnknownRecord` means a commit used an id that did not come from
//! the current snapshot. Both fail fast. An empty result list is never an error.

use crate::types::RecordId;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Two records in the same snapshot share an id. No index is produced.
    #[error("duplicate record id {id} at positions {first} and {second}")]
    DuplicateRecordId {
        id: RecordId,
        first: usize,
        second: usize,
    },

    /// A commit referenced an id the record store does not know.
    #[error("record {0} is not in the store (stale result set?)")]
    UnknownRecord(RecordId),

    #[error("invalid config: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Construction-time failure (bad snapshot or bad config).
    pub fn is_construction_error(&self) -> bool {
        matches!(self, Error::DuplicateRecordId { .. } | Error::Config(_))
    }

    /// Caller used state that no longer matches the store.
    pub fn is_invalid_state(&self) -> bool {
        matches!(self, Error::UnknownRecord(_))
    }
}
