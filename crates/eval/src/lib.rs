// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Stacked deck hand evaluator.
//!
//! Five cards poker hand evaluator and a brute force search for the two cards
//! that make a player win.
//!
//! To evaluate a hand create a [Hand] from five cards, hands are ordered by
//! category and then by their highest card:
//!
//! ```
//! # use stacked_eval::*;
//! let royal = ["S10", "SJ", "SQ", "SK", "SA"]
//!     .iter()
//!     .map(|c| c.parse::<Card>())
//!     .collect::<Result<Vec<_>, _>>()
//!     .unwrap();
//! let royal = Hand::new(&royal).unwrap();
//! assert_eq!(royal.category(), HandCategory::RoyalFlush);
//! assert_eq!(royal.score(), 1060);
//!
//! // 2C, 3C, .., 6C
//! let cards = Deck::default().into_iter().skip(1).take(5).collect::<Vec<_>>();
//! let low = Hand::new(&cards).unwrap();
//! assert_eq!(low.category(), HandCategory::StraightFlush);
//! assert!(royal > low);
//! ```
//!
//! The [search] module finds the cards for a designated winner:
//!
//! ```
//! # use stacked_eval::{*, search::*};
//! let card = |s: &str| s.parse::<Card>().unwrap();
//! let players = vec![
//!     Player::new("alice", [card("SA"), card("HA")]),
//!     Player::new("bob", [card("C3"), card("D7")]),
//! ];
//! let table = Table::new(players, &[card("S9"), card("H10"), card("DJ")]).unwrap();
//!
//! let outcome = find_winning_cards(&table, "bob", &SearchConfig::default()).unwrap();
//! assert_eq!(outcome.status, Status::Found);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod error;
pub use error::{HandError, SearchError};

pub mod hand;
pub use hand::{Hand, HandCategory};

pub mod search;

// Reexport cards types.
pub use stacked_cards::{Card, CardError, Deck, Rank, Suit};
