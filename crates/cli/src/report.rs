// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Search debug report.
use std::fmt::Write;

use stacked_eval::search::{Outcome, Status, Table};

const RULE_WIDTH: usize = 100;

/// Renders the search outcome with each player best hand for the last round.
pub fn render(table: &Table, winner: &str, outcome: &Outcome) -> String {
    let mut out = String::new();
    let rule = "_".repeat(RULE_WIDTH);

    let header = match outcome.status {
        Status::Found => format!(
            "It took {} iterations to find the required cards",
            outcome.iterations
        ),
        Status::Exhausted => format!(
            "Tried all {} candidates without a win",
            outcome.iterations
        ),
        Status::CapReached => format!(
            "Stopped after {} iterations without a win",
            outcome.iterations
        ),
    };

    let _ = writeln!(out, "{header}");
    let _ = writeln!(out, "Winner: {winner}");

    let community = table
        .community()
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" ");

    let Some(round) = &outcome.round else {
        let _ = writeln!(out, "Community cards: {community}");
        return out;
    };

    let [c1, c2] = round.cards;
    let _ = writeln!(out, "All community cards: {community} {c1} {c2}");
    let _ = writeln!(out, "{rule}");
    let _ = writeln!(
        out,
        "{:10}|{:20}|{:30}|{:20}|{:10}",
        "Player", "Cards in hand", "Hand", "Hand type", "Score"
    );
    let _ = writeln!(out, "{rule}");

    for (player, hand) in table.players().iter().zip(&round.hands) {
        let [h1, h2] = player.cards();
        let _ = writeln!(
            out,
            "{:10}|{:20}|{:30}|{:20}|{:10}",
            player.name(),
            format!("{h1} {h2}"),
            hand.to_string(),
            hand.category().name(),
            hand.score()
        );
    }

    let _ = writeln!(out, "{rule}");

    if outcome.status == Status::Found {
        let _ = writeln!(out, "Required cards: {c1} {c2}");
    }

    out
}
