// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Stacked deck CLI.
//!
//! Finds the two cards that should come after the flop to make a player win.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::{Context, Result};
use clap::Parser;
use log::error;
use std::{path::PathBuf, process::ExitCode};

use stacked_eval::{
    Card,
    search::{self, SearchConfig, Status, Table},
};

mod report;
mod roster;

#[derive(Debug, Parser)]
struct Cli {
    /// The three community cards, i.e. "S10,DA,CJ".
    #[clap(long, short)]
    community: String,
    /// The player that should win.
    #[clap(long, short)]
    player: String,
    /// The players roster file.
    #[clap(long, short, default_value = "players.csv")]
    roster: PathBuf,
    /// Print the search report.
    #[clap(long, short)]
    debug: bool,
    /// The maximum number of candidate cards to try.
    #[clap(
        long,
        default_value_t = search::DEFAULT_MAX_ITERATIONS as u32,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    max_iterations: u32,
    /// Shuffle the candidate cards with this seed.
    #[clap(long)]
    seed: Option<u64>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.debug {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::builder()
        .filter_level(level)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    match run(cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

/// Runs the search, returns true if the winning cards have been found.
fn run(cli: Cli) -> Result<bool> {
    let community = parse_cards(&cli.community)?;
    let players = roster::load(&cli.roster)?;
    let table = Table::new(players, &community)?;

    let config = SearchConfig {
        max_iterations: cli.max_iterations as usize,
        seed: cli.seed,
    };

    let outcome = search::find_winning_cards(&table, &cli.player, &config)?;

    if cli.debug {
        print!("{}", report::render(&table, &cli.player, &outcome));
    }

    match (outcome.status, outcome.winning_cards()) {
        (Status::Found, Some([c1, c2])) => {
            println!("Required cards: {c1} {c2}");
            Ok(true)
        }
        (Status::CapReached, _) => {
            println!(
                "Unable to find a win for {}, max iterations reached",
                cli.player
            );
            Ok(false)
        }
        _ => {
            println!("Unable to find a win for {}", cli.player);
            Ok(false)
        }
    }
}

/// Parses cards separated by commas or spaces, quotes around cards are ignored.
fn parse_cards(text: &str) -> Result<Vec<Card>> {
    text.split(|c: char| c == ',' || c.is_whitespace())
        .map(|s| s.trim_matches(|c: char| c == '\'' || c == '"'))
        .filter(|s| !s.is_empty())
        .map(|s| s.parse::<Card>())
        .collect::<Result<Vec<_>, _>>()
        .with_context(|| format!("Invalid community cards {text:?}"))
}
