// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display for the gistpick CLI.
//!
//! Colors only when stdout is a TTY and `NO_COLOR` is unset. Everything here
//! is presentation: the raw description is printed as-is and language tags
//! are split for badges, never fed back into search.

use gistpick::{MatchTier, QueryResult, RecordId, RecordStore, ResultsView, SearchMatch, Signal};

pub mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const GREEN: &str = "\x1b[38;2;152;195;121m"; // #98c379
    pub const YELLOW: &str = "\x1b[38;2;229;192;123m"; // #e5c07b
    pub const CYAN: &str = "\x1b[38;2;86;182;194m"; // #56b6c2
    pub const MAGENTA: &str = "\x1b[38;2;198;120;221m"; // #c678dd
    pub const GRAY: &str = "\x1b[38;2;92;99;112m"; // #5c6370
}

use colors::*;

/// Check if colors should be used (TTY detection)
pub fn use_colors() -> bool {
    // Respect NO_COLOR standard
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Apply styles if TTY, otherwise return plain text
pub fn styled(styles: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}", styles.join(""), text, RESET)
    } else {
        text.to_string()
    }
}

fn tier_badge(tier: MatchTier) -> String {
    match tier {
        MatchTier::Exact => styled(&[GREEN], "exact "),
        MatchTier::Prefix => styled(&[YELLOW], "prefix"),
        MatchTier::Fuzzy => styled(&[MAGENTA], "fuzzy "),
    }
}

/// `#Rust #Shell` badges from the record's language list.
fn tag_badges(store: &impl RecordStore, id: &RecordId) -> String {
    let Some(record) = store.record(id) else {
        return String::new();
    };
    record
        .languages()
        .map(|lang| styled(&[CYAN], &format!("#{}", lang)))
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_row(m: &SearchMatch, selected: bool, tags: &str) -> String {
    let marker = if selected {
        styled(&[BOLD, GREEN], "▶")
    } else {
        " ".to_string()
    };
    let description = if selected {
        styled(&[BOLD], &m.text)
    } else {
        m.text.to_string()
    };
    format!(
        "{} {} {} {}  {}",
        marker,
        tier_badge(m.tier),
        styled(&[GRAY], &format!("{:>7.2}", m.score)),
        description,
        tags
    )
}

/// Print a ranked result list (the `query` subcommand).
pub fn print_ranked(result: &QueryResult, store: &impl RecordStore) {
    if result.is_empty() {
        println!("{}", styled(&[DIM], "No result found..."));
        return;
    }
    for m in result {
        println!("{}", format_row(m, false, &tag_badges(store, &m.id)));
    }
    println!(
        "{}",
        styled(&[DIM], &format!("{} match{}", result.len(), if result.len() == 1 { "" } else { "es" }))
    );
}

/// Print the navigation view after a session command.
pub fn print_view(view: ResultsView<'_>, store: &impl RecordStore) {
    match view {
        ResultsView::NoQuery => {
            println!(
                "{}",
                styled(&[DIM], "Navigation: :up/:down | Select: :enter | Quit: :quit")
            );
        }
        ResultsView::NoResults { .. } => {
            println!("{}", styled(&[DIM], "No result found..."));
        }
        ResultsView::Matches { matches, selected } => {
            for (position, m) in matches.iter().enumerate() {
                let tags = tag_badges(store, &m.id);
                println!("{}", format_row(m, position == selected, &tags));
            }
        }
    }
}

pub fn print_signal(signal: &Signal) {
    let text = match signal {
        Signal::RecordActivated(id) => format!("activated {}", id),
        Signal::TagFilterReset(tag) => format!("tag filter → {}", tag),
        Signal::SearchWindowVisibility(visibility) => format!("search window {:?}", visibility),
    };
    println!("{} {}", styled(&[MAGENTA], "⇢"), text);
}
