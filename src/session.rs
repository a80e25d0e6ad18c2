// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! One activation of the search window.
//!
//! A session owns the index, the navigation state and the committer, and
//! eats [`Command`]s one at a time. It is created when the window opens and
//! dropped when it closes. Once closed (explicitly, or by a successful
//! commit) it ignores everything; fetches already dispatched still finish.

use crate::commit::{CommitTelemetry, LogTelemetry, SelectionCommitter, Signal, SignalSink, Visibility};
use crate::config::SearchConfig;
use crate::error::Result;
use crate::fetch::DetailFetcher;
use crate::index::SearchIndex;
use crate::navigation::NavigationState;
use crate::store::RecordStore;
use std::sync::mpsc::Receiver;

/// Input events, in the order the input source delivers them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    QueryChanged(String),
    MoveUp,
    MoveDown,
    Commit,
    SessionClosed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    Open,
    Closed,
}

pub struct SearchSession<S, F, N, T = LogTelemetry> {
    index: SearchIndex,
    navigation: NavigationState,
    committer: SelectionCommitter<S, F, N, T>,
    status: SessionStatus,
}

impl<S, F, N> SearchSession<S, F, N, LogTelemetry>
where
    S: RecordStore,
    F: DetailFetcher,
    N: SignalSink,
{
    /// Snapshot `store`, build the index, start with an empty query.
    pub fn open(store: S, fetcher: F, sink: N, config: SearchConfig) -> Result<Self> {
        let snapshot = store.snapshot();
        let index = SearchIndex::build(&snapshot, config)?;
        let committer = SelectionCommitter::new(store, fetcher, sink, index.config());
        log::debug!("search session opened over {} records", index.len());

        Ok(SearchSession {
            index,
            navigation: NavigationState::new(),
            committer,
            status: SessionStatus::Open,
        })
    }
}

impl<S, F, N, T> SearchSession<S, F, N, T>
where
    S: RecordStore,
    F: DetailFetcher,
    N: SignalSink,
    T: CommitTelemetry,
{
    pub fn with_telemetry<U: CommitTelemetry>(self, telemetry: U) -> SearchSession<S, F, N, U> {
        SearchSession {
            index: self.index,
            navigation: self.navigation,
            committer: self.committer.with_telemetry(telemetry),
            status: self.status,
        }
    }

    pub fn index(&self) -> &SearchIndex {
        &self.index
    }

    pub fn navigation(&self) -> &NavigationState {
        &self.navigation
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn is_closed(&self) -> bool {
        self.status == SessionStatus::Closed
    }

    /// Apply one command.
    ///
    /// `Commit` with nothing selected does nothing: keyboard input can beat
    /// the first query. A commit that fails leaves the session open.
    pub fn handle(&mut self, command: Command) -> Result<SessionStatus> {
        if self.is_closed() {
            log::debug!("session closed, ignoring {:?}", command);
            return Ok(SessionStatus::Closed);
        }

        match command {
            Command::QueryChanged(text) => self.navigation.set_query(&self.index, &text),
            Command::MoveUp => self.navigation.move_up(),
            Command::MoveDown => self.navigation.move_down(),
            Command::Commit => {
                if let Some(id) = self.navigation.current_selection() {
                    self.committer.commit(&id)?;
                    self.status = SessionStatus::Closed;
                }
            }
            Command::SessionClosed => {
                self.committer
                    .sink()
                    .emit(Signal::SearchWindowVisibility(Visibility::Off));
                self.status = SessionStatus::Closed;
            }
        }

        Ok(self.status)
    }

    /// Drain `commands` until the session closes or every sender hangs up.
    pub fn run(&mut self, commands: &Receiver<Command>) -> Result<SessionStatus> {
        while !self.is_closed() {
            let Ok(command) = commands.recv() else {
                break;
            };
            self.handle(command)?;
        }
        Ok(self.status)
    }
}
