// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Turning "the user picked X" into an active record.
//!
//! [`SelectionCommitter::commit`] does, in order:
//!
//! 1. look the record up (unknown id → [`Error::UnknownRecord`], nothing else
//!    happens)
//! 2. if it has no details, hand it to the [`DetailFetcher`] without waiting
//! 3. emit [`Signal::RecordActivated`]
//! 4. emit [`Signal::TagFilterReset`] with the configured default tag
//! 5. emit [`Signal::SearchWindowVisibility`] `Off`
//!
//! Steps 3-5 never depend on the fetch finishing. The activated record may
//! briefly render without details; they show up once the worker writes them.

use crate::config::SearchConfig;
use crate::error::{Error, Result};
use crate::fetch::DetailFetcher;
use crate::store::RecordStore;
use crate::types::RecordId;
use std::sync::mpsc::Sender;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    On,
    Off,
}

/// Outbound notifications for the presentation and state layers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Signal {
    RecordActivated(RecordId),
    TagFilterReset(String),
    SearchWindowVisibility(Visibility),
}

/// Receives signals. Must not block.
pub trait SignalSink {
    fn emit(&self, signal: Signal);
}

impl<N: SignalSink + ?Sized> SignalSink for &N {
    fn emit(&self, signal: Signal) {
        (**self).emit(signal);
    }
}

impl SignalSink for Sender<Signal> {
    fn emit(&self, signal: Signal) {
        if let Err(e) = self.send(signal) {
            log::debug!("signal receiver dropped: {:?}", e.0);
        }
    }
}

/// Hooks invoked at the commit boundary, and nowhere else.
pub trait CommitTelemetry {
    fn fetch_dispatched(&self, id: &RecordId);
    fn record_activated(&self, id: &RecordId);
}

impl<T: CommitTelemetry + ?Sized> CommitTelemetry for &T {
    fn fetch_dispatched(&self, id: &RecordId) {
        (**self).fetch_dispatched(id);
    }

    fn record_activated(&self, id: &RecordId) {
        (**self).record_activated(id);
    }
}

/// Forwards commit telemetry to the `log` facade.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogTelemetry;

impl CommitTelemetry for LogTelemetry {
    fn fetch_dispatched(&self, id: &RecordId) {
        log::info!("[dispatch] fetch details {}", id);
    }

    fn record_activated(&self, id: &RecordId) {
        log::info!("[dispatch] activate record {}", id);
    }
}

pub struct SelectionCommitter<S, F, N, T = LogTelemetry> {
    store: S,
    fetcher: F,
    sink: N,
    telemetry: T,
    reset_tag: String,
}

impl<S, F, N> SelectionCommitter<S, F, N, LogTelemetry>
where
    S: RecordStore,
    F: DetailFetcher,
    N: SignalSink,
{
    pub fn new(store: S, fetcher: F, sink: N, config: &SearchConfig) -> Self {
        SelectionCommitter {
            store,
            fetcher,
            sink,
            telemetry: LogTelemetry,
            reset_tag: config.reset_tag(),
        }
    }
}

impl<S, F, N, T> SelectionCommitter<S, F, N, T>
where
    S: RecordStore,
    F: DetailFetcher,
    N: SignalSink,
    T: CommitTelemetry,
{
    /// Swap the telemetry collaborator.
    pub fn with_telemetry<U: CommitTelemetry>(self, telemetry: U) -> SelectionCommitter<S, F, N, U> {
        SelectionCommitter {
            store: self.store,
            fetcher: self.fetcher,
            sink: self.sink,
            telemetry,
            reset_tag: self.reset_tag,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn sink(&self) -> &N {
        &self.sink
    }

    /// Activate `id`. See the module docs for the exact sequence.
    pub fn commit(&self, id: &RecordId) -> Result<()> {
        let record = self
            .store
            .record(id)
            .ok_or_else(|| Error::UnknownRecord(id.clone()))?;

        if !record.has_details() {
            self.telemetry.fetch_dispatched(id);
            self.fetcher.fetch_details(&record, id);
        }

        self.telemetry.record_activated(id);
        self.sink.emit(Signal::RecordActivated(id.clone()));
        self.sink.emit(Signal::TagFilterReset(self.reset_tag.clone()));
        self.sink
            .emit(Signal::SearchWindowVisibility(Visibility::Off));
        Ok(())
    }
}
