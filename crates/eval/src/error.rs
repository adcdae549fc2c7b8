// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Evaluation and search errors.
use thiserror::Error;

use stacked_cards::CardError;

/// Errors returned when creating a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HandError {
    /// A hand must have exactly five cards.
    #[error("a hand needs 5 cards, got {0}")]
    InvalidHandSize(usize),
}

/// Errors returned by the winning cards search.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// A card is invalid or has been dealt twice.
    #[error(transparent)]
    Card(#[from] CardError),
    /// A hand could not be created.
    #[error(transparent)]
    Hand(#[from] HandError),
    /// The designated winner is not at the table.
    #[error("unknown player {0:?}")]
    UnknownPlayer(String),
    /// Two players have the same name.
    #[error("duplicate player {0:?}")]
    DuplicatePlayer(String),
    /// The table needs three community cards.
    #[error("expected 3 community cards, got {0}")]
    CommunityCount(usize),
    /// The table has no players.
    #[error("no players at the table")]
    NoPlayers,
}
