// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Players roster file.
//!
//! The roster is a comma separated file with a header line followed by one
//! line per player with the player name and its two hole cards:
//!
//! ```text
//! name,card1,card2
//! alice,SA,HA
//! bob,C3,D7
//! ```
use anyhow::{Context, Result, bail};
use std::{fs, path::Path};

use stacked_eval::{Card, search::Player};

/// Loads the players from a roster file.
pub fn load(path: &Path) -> Result<Vec<Player>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Cannot read roster file {}", path.display()))?;
    parse(&text).with_context(|| format!("Invalid roster file {}", path.display()))
}

/// Parses the players from the roster text.
///
/// Lines with less than three fields are skipped.
pub fn parse(text: &str) -> Result<Vec<Player>> {
    let mut players = Vec::new();

    for (idx, line) in text.lines().enumerate().skip(1) {
        let fields = line.split(',').map(str::trim).collect::<Vec<_>>();
        if fields.len() < 3 {
            continue;
        }

        let lineno = idx + 1;
        let name = fields[0];
        let cards = fields[1..]
            .iter()
            .filter(|f| !f.is_empty())
            .map(|f| f.parse::<Card>())
            .collect::<Result<Vec<_>, _>>()
            .with_context(|| format!("Line {lineno}: invalid card for player {name}"))?;

        let cards: [Card; 2] = match cards.try_into() {
            Ok(cards) => cards,
            Err(cards) => bail!(
                "Line {lineno}: player {name} has {} cards, expected 2",
                cards.len()
            ),
        };

        players.push(Player::new(name, cards));
    }

    Ok(players)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_roster() {
        let text = "name,card1,card2\n\
                    alice,SA,HA\n\
                    \n\
                    bob , c3 , D10\n\
                    carol,S2\n\
                    dave,H5,H6,\n";

        let players = parse(text).unwrap();
        assert_eq!(players.len(), 3);

        assert_eq!(players[0].name(), "alice");
        assert_eq!(players[0].cards()[0], "SA".parse::<Card>().unwrap());
        assert_eq!(players[0].cards()[1], "HA".parse::<Card>().unwrap());

        assert_eq!(players[1].name(), "bob");
        assert_eq!(players[1].cards()[0], "C3".parse::<Card>().unwrap());
        assert_eq!(players[1].cards()[1], "D10".parse::<Card>().unwrap());

        assert_eq!(players[2].name(), "dave");
    }

    #[test]
    fn header_only() {
        assert!(parse("name,card1,card2\n").unwrap().is_empty());
        assert!(parse("").unwrap().is_empty());
    }

    #[test]
    fn invalid_roster() {
        let err = parse("name,cards\nalice,SA,HA,HK\n").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Line 2: player alice has 3 cards, expected 2"
        );

        let err = parse("name,cards\nalice,SA,HA\nbob,X3,D7\n").unwrap_err();
        assert_eq!(err.to_string(), "Line 3: invalid card for player bob");
        assert_eq!(err.root_cause().to_string(), "invalid suit symbol \"X\"");
    }

    #[test]
    fn missing_file() {
        let err = load(Path::new("does/not/exist.csv")).unwrap_err();
        assert!(err.to_string().starts_with("Cannot read roster file"));
    }
}
