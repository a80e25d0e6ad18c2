//! Search-as-you-type record picker.
//!
//! Type a query, get a ranked list of records whose description matches it,
//! walk a cursor through the list, commit a choice. Committing fetches the
//! record's full details in the background if they aren't cached yet and
//! tells the rest of the application which record is now active.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌─────────────────┐
//! │  store.rs    │────▶│  index.rs    │────▶│  navigation.rs  │
//! │ (RecordStore,│     │ (SearchIndex,│     │ (cursor, wrap,  │
//! │  MemoryStore)│     │  query)      │     │  ResultsView)   │
//! └──────────────┘     └──────────────┘     └─────────────────┘
//!        │                    ▲                      │
//!        │              fuzzy/ scoring/              ▼
//!        │                                  ┌─────────────────┐
//!        └─────────────────────────────────▶│   commit.rs     │
//!                                           │ (fetch? + three │
//!              fetch.rs ◀── DetailRequest ──│  signals)       │
//!            (worker thread)                └─────────────────┘
//!
//!                    session.rs: Command ─▶ all of the above
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use gistpick::{Command, MemoryStore, SearchConfig, SearchSession};
//!
//! let store = MemoryStore::from_json_file("records.json")?;
//! let mut session = SearchSession::open(store, fetcher, signals_tx, SearchConfig::default())?;
//!
//! session.handle(Command::QueryChanged("cach".into()))?;
//! session.handle(Command::MoveDown)?;
//! session.handle(Command::Commit)?;
//! ```

// Module declarations
mod commit;
mod config;
mod error;
mod fetch;
pub mod fuzzy;
mod index;
mod navigation;
pub mod scoring;
mod session;
mod store;
mod types;
mod utils;

#[doc(hidden)]
pub mod testing;

// Re-exports for public API
pub use commit::{CommitTelemetry, LogTelemetry, SelectionCommitter, Signal, SignalSink, Visibility};
pub use config::SearchConfig;
pub use error::{Error, Result};
pub use fetch::{
    spawn_detail_worker, ChannelFetcher, DetailEvent, DetailFetcher, DetailLoader, DetailRequest,
    StaticLoader,
};
pub use fuzzy::{bounded_distance, edit_budget, within_distance};
pub use index::{init_search, SearchIndex};
pub use navigation::{NavigationState, Results, ResultsView};
pub use session::{Command, SearchSession, SessionStatus};
pub use store::{MemoryStore, RecordStore};
pub use types::{
    IndexedEntry, MatchTier, QueryResult, Record, RecordDetails, RecordId, SearchMatch,
};
pub use utils::{normalize, tokenize};
