// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Lazy detail fetching.
//!
//! The committer only ever calls [`DetailFetcher::fetch_details`] and moves
//! on. It never waits. [`ChannelFetcher`] turns that call into a message on
//! an mpsc channel; [`spawn_detail_worker`] sits on the other end, loads the
//! details and writes them into the [`MemoryStore`]. Whoever reads the store
//! next sees them.
//!
//! The worker coalesces: if the same id is queued twice before it gets to
//! it, the second request is dropped. Requests for records that already have
//! details are skipped too. Nothing here retries; a failed load is logged and
//! forgotten.

use crate::store::{MemoryStore, RecordStore};
use crate::types::{Record, RecordDetails, RecordId};
use std::collections::{HashMap, HashSet};
use std::sync::mpsc::{Receiver, Sender};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

/// Fire-and-forget request for a record's details.
pub trait DetailFetcher {
    fn fetch_details(&self, record: &Record, id: &RecordId);
}

impl<F: DetailFetcher + ?Sized> DetailFetcher for &F {
    fn fetch_details(&self, record: &Record, id: &RecordId) {
        (**self).fetch_details(record, id);
    }
}

impl<F: DetailFetcher + ?Sized> DetailFetcher for Arc<F> {
    fn fetch_details(&self, record: &Record, id: &RecordId) {
        (**self).fetch_details(record, id);
    }
}

/// Message sent from the fetcher to the worker.
#[derive(Debug, Clone)]
pub struct DetailRequest {
    pub id: RecordId,
    pub record: Record,
}

/// Sends each request down a channel. Never blocks.
#[derive(Debug, Clone)]
pub struct ChannelFetcher {
    tx: Sender<DetailRequest>,
}

impl ChannelFetcher {
    pub fn new(tx: Sender<DetailRequest>) -> Self {
        ChannelFetcher { tx }
    }
}

impl DetailFetcher for ChannelFetcher {
    fn fetch_details(&self, record: &Record, id: &RecordId) {
        let request = DetailRequest {
            id: id.clone(),
            record: record.clone(),
        };
        if self.tx.send(request).is_err() {
            log::warn!("detail worker is gone, dropping fetch for {}", id);
        }
    }
}

/// Produces details for a record. Runs on the worker thread.
pub trait DetailLoader: Send + 'static {
    fn load(&self, record: &Record) -> anyhow::Result<RecordDetails>;
}

/// Serves details from a fixed map. Unknown ids fail.
#[derive(Debug, Clone, Default)]
pub struct StaticLoader {
    details: HashMap<RecordId, RecordDetails>,
}

impl StaticLoader {
    pub fn new(details: HashMap<RecordId, RecordDetails>) -> Self {
        StaticLoader { details }
    }
}

impl DetailLoader for StaticLoader {
    fn load(&self, record: &Record) -> anyhow::Result<RecordDetails> {
        self.details
            .get(&record.id)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("no details available for {}", record.id))
    }
}

/// What the worker did with a request. Sent on the optional event channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailEvent {
    Loaded(RecordId),
    Skipped(RecordId),
    Failed(RecordId),
}

/// Spawn the detail worker thread.
///
/// Exits when every [`ChannelFetcher`] holding the sender is dropped.
pub fn spawn_detail_worker<L: DetailLoader>(
    rx: Receiver<DetailRequest>,
    store: MemoryStore,
    loader: L,
    events: Option<Sender<DetailEvent>>,
) -> JoinHandle<()> {
    thread::spawn(move || {
        let notify = |event: DetailEvent| {
            if let Some(tx) = &events {
                let _ = tx.send(event);
            }
        };

        while let Ok(first) = rx.recv() {
            // Drain whatever queued up meanwhile, keeping arrival order
            let mut batch = vec![first];
            while let Ok(next) = rx.try_recv() {
                batch.push(next);
            }

            let mut seen: HashSet<RecordId> = HashSet::with_capacity(batch.len());
            for request in batch {
                if !seen.insert(request.id.clone()) {
                    log::debug!("coalesced duplicate fetch for {}", request.id);
                    continue;
                }
                if store.has_details(&request.id) {
                    log::debug!("details for {} already cached", request.id);
                    notify(DetailEvent::Skipped(request.id));
                    continue;
                }

                let record = store
                    .record(&request.id)
                    .unwrap_or(request.record);
                match loader.load(&record) {
                    Ok(details) => {
                        store.populate_details(&request.id, details);
                        log::debug!("populated details for {}", request.id);
                        notify(DetailEvent::Loaded(request.id));
                    }
                    Err(e) => {
                        log::warn!("failed to load details for {}: {}", request.id, e);
                        notify(DetailEvent::Failed(request.id));
                    }
                }
            }
        }
    })
}
