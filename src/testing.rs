//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical fixtures and recording collaborators so tests can
//! observe what the committer did without a real worker or UI.

#![doc(hidden)]

use crate::commit::{CommitTelemetry, Signal, SignalSink};
use crate::fetch::DetailFetcher;
use crate::types::{MatchTier, QueryResult, Record, RecordDetails, RecordId, SearchMatch};
use parking_lot::Mutex;
use std::sync::Arc;

/// Create a record with no details.
pub fn make_record(id: &str, description: &str) -> Record {
    Record::new(id, description)
}

/// Create a record whose details are already cached.
pub fn make_record_with_details(id: &str, description: &str) -> Record {
    let mut record = Record::new(id, description);
    let mut details = RecordDetails::default();
    details
        .files
        .insert(format!("{}.txt", id), description.to_string());
    record.details = Some(details);
    record
}

/// A ranked result of `n` matches with ids `r0..r{n-1}`, best first.
pub fn ranked(n: usize) -> QueryResult {
    let matches = (0..n)
        .map(|i| SearchMatch {
            id: RecordId::from(format!("r{}", i)),
            score: (n - i) as f64,
            text: Arc::from(format!("record {}", i)),
            tier: MatchTier::Exact,
            matched_terms: vec!["record".to_string()],
            position: i,
        })
        .collect();
    QueryResult::from_ranked(matches)
}

/// Signal sink that remembers everything it was given.
#[derive(Debug, Default)]
pub struct RecordingSink {
    signals: Mutex<Vec<Signal>>,
}

impl RecordingSink {
    pub fn signals(&self) -> Vec<Signal> {
        self.signals.lock().clone()
    }
}

impl SignalSink for RecordingSink {
    fn emit(&self, signal: Signal) {
        self.signals.lock().push(signal);
    }
}

/// Fetcher that records requests and never completes them.
#[derive(Debug, Default)]
pub struct RecordingFetcher {
    requests: Mutex<Vec<RecordId>>,
}

impl RecordingFetcher {
    pub fn requests(&self) -> Vec<RecordId> {
        self.requests.lock().clone()
    }
}

impl DetailFetcher for RecordingFetcher {
    fn fetch_details(&self, _record: &Record, id: &RecordId) {
        self.requests.lock().push(id.clone());
    }
}

/// Telemetry that records `"fetch <id>"` / `"activate <id>"` lines.
#[derive(Debug, Default)]
pub struct RecordingTelemetry {
    events: Mutex<Vec<String>>,
}

impl RecordingTelemetry {
    pub fn events(&self) -> Vec<String> {
        self.events.lock().clone()
    }
}

impl CommitTelemetry for RecordingTelemetry {
    fn fetch_dispatched(&self, id: &RecordId) {
        self.events.lock().push(format!("fetch {}", id));
    }

    fn record_activated(&self, id: &RecordId) {
        self.events.lock().push(format!("activate {}", id));
    }
}
