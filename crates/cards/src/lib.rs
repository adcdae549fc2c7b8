// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Stacked deck playing cards types.
//!
//! This crate define types to create cards from their rank and suit:
//!
//! ```
//! # use stacked_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let td = Card::new(Rank::Ten, Suit::Diamonds);
//! assert!(td < ah);
//! ```
//!
//! or from the suit and rank symbols used in players files and on the command
//! line:
//!
//! ```
//! # use stacked_cards::{Card, Rank, Suit};
//! let ts = Card::try_new("S", "10").unwrap();
//! assert_eq!(ts, Card::new(Rank::Ten, Suit::Spades));
//!
//! let ac = "CA".parse::<Card>().unwrap();
//! assert_eq!(ac.rank().value(), 14);
//! assert_eq!(ac.to_string(), "CA");
//! ```
//!
//! and a [Deck] type for dealing, removing, and pairing the remaining cards:
//!
//! ```
//! # use stacked_cards::{Card, Deck, Rank, Suit};
//! let mut deck = Deck::default();
//! deck.remove(Card::new(Rank::Ace, Suit::Spades)).unwrap();
//! assert_eq!(deck.count(), 51);
//! assert_eq!(deck.pairs().len(), 1_275);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod deck;
pub use deck::{Card, Deck, Rank, Suit};

mod error;
pub use error::CardError;
