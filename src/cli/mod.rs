// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the gistpick command-line interface.
//!
//! Two subcommands: `query` ranks a records file against one query and
//! exits; `session` drives a full search session from stdin, one command per
//! line, so the picker can be exercised without a GUI.

pub mod display;

use clap::{Parser, Subcommand};
use gistpick::Command;
use std::num::NonZeroUsize;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "gistpick",
    about = "Fuzzy search-as-you-type record picker",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank records against a query and print the matches
    Query {
        /// JSON array of records ({ id, description, language?, details? })
        #[arg(short, long)]
        records: PathBuf,

        /// Search config (JSON, camelCase keys)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Maximum number of results to print (at least 1)
        #[arg(short, long)]
        limit: Option<NonZeroUsize>,

        /// Print results as JSON instead of a table
        #[arg(long)]
        json: bool,

        /// Search query
        query: String,
    },

    /// Interactive session: read commands from stdin
    ///
    /// Each line is a new query, except `:up`, `:down`, `:enter` and `:quit`.
    Session {
        /// JSON array of records
        #[arg(short, long)]
        records: PathBuf,

        /// Search config (JSON, camelCase keys)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// JSON object mapping record id to details, served by the detail worker
        #[arg(short, long)]
        details: Option<PathBuf>,
    },
}

/// Map one stdin line to a session command.
pub fn parse_command(line: &str) -> Command {
    match line.trim_end_matches(['\r', '\n']) {
        ":up" | ":k" => Command::MoveUp,
        ":down" | ":j" => Command::MoveDown,
        ":enter" | ":e" => Command::Commit,
        ":quit" | ":q" => Command::SessionClosed,
        text => Command::QueryChanged(text.to_string()),
    }
}
