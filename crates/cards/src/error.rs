// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Cards errors.
use thiserror::Error;

use crate::Card;

/// Errors returned when creating cards or removing them from a deck.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CardError {
    /// The suit symbol is not one of C, D, H, S.
    #[error("invalid suit symbol {0:?}")]
    InvalidSuit(String),
    /// The rank symbol is not one of 2..10, J, Q, K, A.
    #[error("invalid rank symbol {0:?}")]
    InvalidRank(String),
    /// The card text is not a suit symbol followed by a rank symbol.
    #[error("invalid card {0:?}")]
    InvalidCard(String),
    /// The card has already been removed from the deck.
    #[error("{0} not in card deck")]
    NotInDeck(Card),
}
