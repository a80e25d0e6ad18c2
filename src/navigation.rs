// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Selection cursor over the current result list.
//!
//! Pure state: no I/O, no index access except through `set_query`. Up and
//! down wrap around, so the list behaves like a ring. Keyboard events can
//! arrive before the first query has produced anything, so every move on an
//! empty list is a silent no-op.
//!
//! **Invariant**: whenever the result list is non-empty, `cursor < len`.
//! Moves preserve it by wrapping; replacing the results resets the cursor to 0.
//!
//! "Nothing typed yet" and "typed, nothing matched" are different states
//! ([`Results::NoQuery`] vs. an empty [`Results::Ready`]) so the view layer
//! never has to guess which message to show.

use crate::index::SearchIndex;
use crate::types::{QueryResult, RecordId, SearchMatch};

/// The result list as the navigation layer sees it.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Results {
    /// No query has been entered (or it was cleared).
    #[default]
    NoQuery,
    /// A query ran. May hold zero matches.
    Ready(QueryResult),
}

impl Results {
    pub fn len(&self) -> usize {
        match self {
            Results::NoQuery => 0,
            Results::Ready(result) => result.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn as_query_result(&self) -> Option<&QueryResult> {
        match self {
            Results::NoQuery => None,
            Results::Ready(result) => Some(result),
        }
    }
}

/// What a presentation layer should draw.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ResultsView<'a> {
    NoQuery,
    NoResults { query: &'a str },
    Matches {
        matches: &'a [SearchMatch],
        selected: usize,
    },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NavigationState {
    query: String,
    results: Results,
    cursor: usize,
}

impl NavigationState {
    pub fn new() -> Self {
        NavigationState::default()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn results(&self) -> &Results {
        &self.results
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Run `text` against `index` and replace the results. Cursor goes to 0.
    pub fn set_query(&mut self, index: &SearchIndex, text: &str) {
        let result = if text.is_empty() {
            None
        } else {
            Some(index.query(text))
        };
        self.replace(text, result);
    }

    /// Replace the results with an already-computed list. Cursor goes to 0.
    ///
    /// An empty `query` always means [`Results::NoQuery`], whatever `result`
    /// holds.
    pub fn set_results(&mut self, query: &str, result: QueryResult) {
        let result = (!query.is_empty()).then_some(result);
        self.replace(query, result);
    }

    fn replace(&mut self, query: &str, result: Option<QueryResult>) {
        self.query = query.to_string();
        self.results = match result {
            Some(result) => Results::Ready(result),
            None => Results::NoQuery,
        };
        self.cursor = 0;
    }

    /// Previous result, wrapping from the first to the last.
    pub fn move_up(&mut self) {
        let len = self.results.len();
        if len == 0 {
            return;
        }
        self.cursor = if self.cursor == 0 { len - 1 } else { self.cursor - 1 };
    }

    /// Next result, wrapping from the last to the first.
    pub fn move_down(&mut self) {
        let len = self.results.len();
        if len == 0 {
            return;
        }
        self.cursor = if self.cursor + 1 >= len { 0 } else { self.cursor + 1 };
    }

    pub fn current_match(&self) -> Option<&SearchMatch> {
        self.results.as_query_result()?.get(self.cursor)
    }

    pub fn current_selection(&self) -> Option<RecordId> {
        self.current_match().map(|m| m.id.clone())
    }

    pub fn view(&self) -> ResultsView<'_> {
        match &self.results {
            Results::NoQuery => ResultsView::NoQuery,
            Results::Ready(result) if result.is_empty() => ResultsView::NoResults {
                query: &self.query,
            },
            Results::Ready(result) => ResultsView::Matches {
                matches: result.as_slice(),
                selected: self.cursor,
            },
        }
    }
}
