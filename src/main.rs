// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use anyhow::Context;
use clap::Parser;
use env_logger::Env;
use std::collections::HashMap;
use std::fs;
use std::io::{self, BufRead};
use std::num::NonZeroUsize;
use std::path::Path;
use std::sync::mpsc;

use gistpick::{
    spawn_detail_worker, ChannelFetcher, MemoryStore, RecordDetails, RecordId, RecordStore,
    SearchConfig, SearchIndex, SearchSession, SessionStatus, Signal, StaticLoader,
};

mod cli;
use cli::display::{print_ranked, print_signal, print_view};
use cli::{parse_command, Cli, Commands};

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Query {
            records,
            config,
            limit,
            json,
            query,
        } => run_query(&records, config.as_deref(), limit, json, &query),
        Commands::Session {
            records,
            config,
            details,
        } => run_session(&records, config.as_deref(), details.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

fn load_config(path: Option<&Path>) -> anyhow::Result<SearchConfig> {
    match path {
        Some(path) => SearchConfig::from_json_file(path)
            .with_context(|| format!("loading config {}", path.display())),
        None => Ok(SearchConfig::default()),
    }
}

fn load_store(path: &Path) -> anyhow::Result<MemoryStore> {
    MemoryStore::from_json_file(path)
        .with_context(|| format!("loading records {}", path.display()))
}

fn run_query(
    records: &Path,
    config: Option<&Path>,
    limit: Option<NonZeroUsize>,
    json: bool,
    query: &str,
) -> anyhow::Result<()> {
    let mut config = load_config(config)?;
    if let Some(limit) = limit {
        config.max_results = Some(limit.get());
    }
    let store = load_store(records)?;
    let index = SearchIndex::build(&store.snapshot(), config)?;
    let result = index.query(query);

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_ranked(&result, &store);
    }
    Ok(())
}

fn run_session(
    records: &Path,
    config: Option<&Path>,
    details: Option<&Path>,
) -> anyhow::Result<()> {
    let config = load_config(config)?;
    let store = load_store(records)?;

    let details: HashMap<RecordId, RecordDetails> = match details {
        Some(path) => {
            let content = fs::read_to_string(path)
                .with_context(|| format!("reading details {}", path.display()))?;
            serde_json::from_str(&content)
                .with_context(|| format!("parsing details {}", path.display()))?
        }
        None => HashMap::new(),
    };

    let (request_tx, request_rx) = mpsc::channel();
    let worker = spawn_detail_worker(
        request_rx,
        store.clone(),
        StaticLoader::new(details),
        None,
    );

    let (signal_tx, signal_rx) = mpsc::channel::<Signal>();
    let mut session = SearchSession::open(
        store.clone(),
        ChannelFetcher::new(request_tx),
        signal_tx,
        config,
    )?;
    print_view(session.navigation().view(), &store);

    for line in io::stdin().lock().lines() {
        let line = line.context("reading stdin")?;
        let status = match session.handle(parse_command(&line)) {
            Ok(status) => status,
            Err(e) => {
                eprintln!("❌ {}", e);
                continue;
            }
        };

        for signal in signal_rx.try_iter() {
            print_signal(&signal);
        }
        if status == SessionStatus::Closed {
            break;
        }
        print_view(session.navigation().view(), &store);
    }

    // Dropping the session drops the last request sender, which stops the worker
    // once any in-flight fetch is done.
    drop(session);
    if worker.join().is_err() {
        log::warn!("detail worker panicked");
    }
    Ok(())
}
