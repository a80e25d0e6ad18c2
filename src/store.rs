// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Where records live.
//!
//! The core only reads through [`RecordStore`]. Writes (detail population)
//! happen on the collaborator side, which is why `populate_details` sits on
//! the concrete [`MemoryStore`] rather than on the trait.

use crate::error::{Error, Result};
use crate::types::{Record, RecordDetails, RecordId};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::Arc;

/// Read access to the record collection.
pub trait RecordStore {
    /// The record for `id`, if present.
    fn record(&self, id: &RecordId) -> Option<Record>;

    /// Every record, in collection order.
    fn snapshot(&self) -> Vec<Record>;
}

impl<S: RecordStore + ?Sized> RecordStore for &S {
    fn record(&self, id: &RecordId) -> Option<Record> {
        (**self).record(id)
    }

    fn snapshot(&self) -> Vec<Record> {
        (**self).snapshot()
    }
}

impl<S: RecordStore + ?Sized> RecordStore for Arc<S> {
    fn record(&self, id: &RecordId) -> Option<Record> {
        (**self).record(id)
    }

    fn snapshot(&self) -> Vec<Record> {
        (**self).snapshot()
    }
}

#[derive(Debug, Default)]
struct StoreInner {
    records: Vec<Record>,
    positions: HashMap<RecordId, usize>,
}

/// In-memory store shared between the session and the detail worker.
///
/// Cloning is cheap and every clone sees the same records.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    inner: Arc<RwLock<StoreInner>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        MemoryStore::default()
    }

    /// Build a store, rejecting duplicate ids.
    pub fn from_records(records: impl IntoIterator<Item = Record>) -> Result<Self> {
        let mut inner = StoreInner::default();
        for record in records {
            let position = inner.records.len();
            if let Some(&first) = inner.positions.get(&record.id) {
                return Err(Error::DuplicateRecordId {
                    id: record.id,
                    first,
                    second: position,
                });
            }
            inner.positions.insert(record.id.clone(), position);
            inner.records.push(record);
        }
        Ok(MemoryStore {
            inner: Arc::new(RwLock::new(inner)),
        })
    }

    /// Load a JSON array of records.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let raw = fs::read_to_string(path.as_ref())?;
        let records: Vec<Record> = serde_json::from_str(&raw)?;
        MemoryStore::from_records(records)
    }

    /// Insert or replace a record. Replacement keeps the original position.
    pub fn insert(&self, record: Record) {
        let mut inner = self.inner.write();
        match inner.positions.get(&record.id).copied() {
            Some(position) => inner.records[position] = record,
            None => {
                let position = inner.records.len();
                inner.positions.insert(record.id.clone(), position);
                inner.records.push(record);
            }
        }
    }

    /// Attach fetched details. Returns `false` if the record is gone.
    pub fn populate_details(&self, id: &RecordId, details: RecordDetails) -> bool {
        let mut inner = self.inner.write();
        let Some(position) = inner.positions.get(id).copied() else {
            return false;
        };
        inner.records[position].details = Some(details);
        true
    }

    pub fn has_details(&self, id: &RecordId) -> bool {
        let inner = self.inner.read();
        inner
            .positions
            .get(id)
            .is_some_and(|&position| inner.records[position].has_details())
    }

    pub fn len(&self) -> usize {
        self.inner.read().records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl RecordStore for MemoryStore {
    fn record(&self, id: &RecordId) -> Option<Record> {
        let inner = self.inner.read();
        inner
            .positions
            .get(id)
            .map(|&position| inner.records[position].clone())
    }

    fn snapshot(&self) -> Vec<Record> {
        self.inner.read().records.clone()
    }
}
