//! A whole search-window activation driven through commands.

use super::common::{snippet_store, RecordingTelemetry};
use gistpick::{
    spawn_detail_worker, ChannelFetcher, Command, DetailEvent, RecordDetails, RecordId,
    RecordStore, ResultsView, SearchConfig, SearchSession, SessionStatus, Signal, StaticLoader,
    Visibility,
};
use std::collections::HashMap;
use std::sync::mpsc;
use std::time::Duration;

fn query(text: &str) -> Command {
    Command::QueryChanged(text.to_string())
}

#[test]
fn test_type_navigate_commit_with_live_worker() {
    let store = snippet_store();
    let mut details = HashMap::new();
    let mut body = RecordDetails::default();
    body.files.insert("cache.rs".to_string(), "struct Cache;".to_string());
    details.insert(RecordId::from("g1"), body.clone());

    let (request_tx, request_rx) = mpsc::channel();
    let (event_tx, event_rx) = mpsc::channel();
    let worker = spawn_detail_worker(
        request_rx,
        store.clone(),
        StaticLoader::new(details),
        Some(event_tx),
    );

    let (signal_tx, signal_rx) = mpsc::channel();
    let mut session = SearchSession::open(
        store.clone(),
        ChannelFetcher::new(request_tx),
        signal_tx,
        SearchConfig::default(),
    )
    .unwrap();

    session.handle(query("ca")).unwrap();
    session.handle(query("cach")).unwrap();
    // [g3, g1]: up from the top wraps to g1
    session.handle(Command::MoveUp).unwrap();
    assert_eq!(
        session.navigation().current_selection(),
        Some(RecordId::from("g1"))
    );

    assert_eq!(session.handle(Command::Commit).unwrap(), SessionStatus::Closed);
    let signals: Vec<Signal> = signal_rx.try_iter().collect();
    assert_eq!(
        signals,
        vec![
            Signal::RecordActivated(RecordId::from("g1")),
            Signal::TagFilterReset("lang@All".to_string()),
            Signal::SearchWindowVisibility(Visibility::Off),
        ]
    );

    assert_eq!(
        event_rx.recv_timeout(Duration::from_secs(5)).unwrap(),
        DetailEvent::Loaded(RecordId::from("g1"))
    );
    assert_eq!(store.record(&RecordId::from("g1")).unwrap().details, Some(body));

    drop(session);
    worker.join().unwrap();
}

#[test]
fn test_view_follows_the_query() {
    let (signal_tx, _signal_rx) = mpsc::channel();
    let (request_tx, _request_rx) = mpsc::channel();
    let mut session = SearchSession::open(
        snippet_store(),
        ChannelFetcher::new(request_tx),
        signal_tx,
        SearchConfig::default(),
    )
    .unwrap();

    assert!(matches!(session.navigation().view(), ResultsView::NoQuery));

    session.handle(query("zzzznomatch")).unwrap();
    assert!(matches!(
        session.navigation().view(),
        ResultsView::NoResults { query } if query == "zzzznomatch"
    ));

    session.handle(query("post")).unwrap();
    session.handle(Command::MoveDown).unwrap();
    match session.navigation().view() {
        ResultsView::Matches { matches, selected } => {
            assert_eq!(matches.len(), 2);
            assert_eq!(selected, 1);
        }
        other => panic!("expected matches, got {:?}", other),
    }

    // Refining the query starts the cursor over
    session.handle(query("postgres pool")).unwrap();
    assert_eq!(session.navigation().cursor(), 0);

    session.handle(query("")).unwrap();
    assert!(matches!(session.navigation().view(), ResultsView::NoQuery));
}

#[test]
fn test_escape_hides_window_without_activating() {
    let (signal_tx, signal_rx) = mpsc::channel();
    let (request_tx, request_rx) = mpsc::channel();
    let mut session = SearchSession::open(
        snippet_store(),
        ChannelFetcher::new(request_tx),
        signal_tx,
        SearchConfig::default(),
    )
    .unwrap();

    session.handle(query("cache")).unwrap();
    assert_eq!(
        session.handle(Command::SessionClosed).unwrap(),
        SessionStatus::Closed
    );

    assert_eq!(
        signal_rx.try_iter().collect::<Vec<_>>(),
        vec![Signal::SearchWindowVisibility(Visibility::Off)]
    );
    assert!(request_rx.try_recv().is_err());
}

#[test]
fn test_telemetry_sees_only_the_commit() {
    let telemetry = RecordingTelemetry::default();
    let (signal_tx, _signal_rx) = mpsc::channel();
    let (request_tx, _request_rx) = mpsc::channel();
    let mut session = SearchSession::open(
        snippet_store(),
        ChannelFetcher::new(request_tx),
        signal_tx,
        SearchConfig::default(),
    )
    .unwrap()
    .with_telemetry(&telemetry);

    session.handle(query("dockr")).unwrap();
    session.handle(Command::MoveDown).unwrap();
    session.handle(Command::MoveUp).unwrap();
    assert!(telemetry.events().is_empty());

    session.handle(Command::Commit).unwrap();
    assert_eq!(telemetry.events(), vec!["fetch g4", "activate g4"]);
}

#[test]
fn test_commands_from_a_channel() {
    let (command_tx, command_rx) = mpsc::channel();
    let (signal_tx, signal_rx) = mpsc::channel();
    let (request_tx, request_rx) = mpsc::channel();
    let mut session = SearchSession::open(
        snippet_store(),
        ChannelFetcher::new(request_tx),
        signal_tx,
        SearchConfig::default(),
    )
    .unwrap();

    let producer = std::thread::spawn(move || {
        for command in [query("w"), query("wri"), query("write"), Command::Commit] {
            command_tx.send(command).unwrap();
        }
    });

    assert_eq!(session.run(&command_rx).unwrap(), SessionStatus::Closed);
    producer.join().unwrap();

    assert_eq!(
        signal_rx.try_recv().unwrap(),
        Signal::RecordActivated(RecordId::from("g2"))
    );
    assert_eq!(request_rx.try_recv().unwrap().id, RecordId::from("g2"));
}
