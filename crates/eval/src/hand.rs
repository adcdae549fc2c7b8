// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Five cards hand evaluation.
//!
//! A [Hand] is classified in one of ten [HandCategory] when it is created and
//! gets a score computed as:
//!
//! ```text
//!   score = category * 100 + sum of the cards ranks
//! ```
//!
//! the sum of five ranks is at most 70 so a higher category always has a higher
//! score, for hands in the same category the higher ranks sum wins. This is a
//! coarser ordering than the usual kickers rules, two hands with different
//! pairs may have the same score.
use std::{cmp::Ordering, fmt};

use stacked_cards::{Card, Rank};

use crate::HandError;

/// The hand category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HandCategory {
    /// No other category matches.
    HighCard = 1,
    /// Two cards with the same rank.
    Pair,
    /// Two pairs with different ranks.
    TwoPair,
    /// Three cards with the same rank.
    ThreeOfAKind,
    /// Five consecutive ranks, including A-2-3-4-5.
    Straight,
    /// Five cards with the same suit.
    Flush,
    /// Three of a kind and a pair.
    FullHouse,
    /// Four cards with the same rank.
    FourOfAKind,
    /// A straight with all cards of the same suit.
    StraightFlush,
    /// A straight flush from Ten to Ace.
    RoyalFlush,
}

impl HandCategory {
    /// Returns all categories from the lowest to the highest.
    pub fn categories() -> impl DoubleEndedIterator<Item = HandCategory> {
        use HandCategory::*;
        [
            HighCard,
            Pair,
            TwoPair,
            ThreeOfAKind,
            Straight,
            Flush,
            FullHouse,
            FourOfAKind,
            StraightFlush,
            RoyalFlush,
        ]
        .into_iter()
    }

    /// The category value, 1 for a high card up to 10 for a royal flush.
    pub fn value(&self) -> u32 {
        *self as u32
    }

    /// The category name.
    pub fn name(&self) -> &'static str {
        match self {
            HandCategory::HighCard => "High Card",
            HandCategory::Pair => "Pair",
            HandCategory::TwoPair => "Two Pair",
            HandCategory::ThreeOfAKind => "Three of a Kind",
            HandCategory::Straight => "Straight",
            HandCategory::Flush => "Flush",
            HandCategory::FullHouse => "Full House",
            HandCategory::FourOfAKind => "Four of a Kind",
            HandCategory::StraightFlush => "Straight Flush",
            HandCategory::RoyalFlush => "Royal Flush",
        }
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A five cards hand.
///
/// Hands compare by category first and then by their highest card, two hands
/// are equal if they have the same category and the same highest card.
#[derive(Debug, Clone, Copy)]
pub struct Hand {
    cards: [Card; 5],
    category: HandCategory,
    score: u32,
}

impl Hand {
    /// The number of cards in a hand.
    pub const SIZE: usize = 5;

    /// Creates and evaluates a hand.
    ///
    /// Returns an error if the number of cards is not [Hand::SIZE].
    pub fn new(cards: &[Card]) -> Result<Hand, HandError> {
        let mut cards: [Card; Hand::SIZE] = cards
            .try_into()
            .map_err(|_| HandError::InvalidHandSize(cards.len()))?;
        cards.sort();

        let category = classify(&cards);
        let ranks_sum = cards.iter().map(|c| c.rank().value() as u32).sum::<u32>();
        let score = category.value() * 100 + ranks_sum;

        Ok(Hand {
            cards,
            category,
            score,
        })
    }

    /// The hand cards sorted by rank.
    pub fn cards(&self) -> &[Card; Hand::SIZE] {
        &self.cards
    }

    /// The hand category.
    pub fn category(&self) -> HandCategory {
        self.category
    }

    /// The hand score.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// The highest card in this hand.
    pub fn high_card(&self) -> Card {
        self.cards[Hand::SIZE - 1]
    }
}

impl PartialEq for Hand {
    fn eq(&self, other: &Self) -> bool {
        self.category == other.category && self.high_card() == other.high_card()
    }
}

impl Eq for Hand {}

impl PartialOrd for Hand {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Hand {
    fn cmp(&self, other: &Self) -> Ordering {
        self.category
            .cmp(&other.category)
            .then_with(|| self.high_card().cmp(&other.high_card()))
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [c1, c2, c3, c4, c5] = &self.cards;
        write!(f, "{c1} {c2} {c3} {c4} {c5}")
    }
}

/// Classifies five cards sorted by rank.
fn classify(cards: &[Card; Hand::SIZE]) -> HandCategory {
    let flush = cards.windows(2).all(|w| w[0].is_same_suit(&w[1]));
    let straight = is_straight(cards);

    if flush && straight {
        return if cards[0].rank() == Rank::Ten {
            HandCategory::RoyalFlush
        } else {
            HandCategory::StraightFlush
        };
    }

    // Count cards per rank, index is the rank value.
    let mut counts = [0u8; 15];
    for card in cards {
        counts[card.rank().value() as usize] += 1;
    }

    let most = counts.iter().copied().max().unwrap_or_default();
    // Number of same rank 2-cards subsets.
    let pairs = counts.iter().map(|&n| n * n.saturating_sub(1) / 2).sum::<u8>();

    if most >= 4 {
        HandCategory::FourOfAKind
    } else if counts.contains(&3) && counts.contains(&2) {
        HandCategory::FullHouse
    } else if flush {
        HandCategory::Flush
    } else if straight {
        HandCategory::Straight
    } else if most == 3 {
        HandCategory::ThreeOfAKind
    } else if pairs == 2 {
        HandCategory::TwoPair
    } else if pairs == 1 {
        HandCategory::Pair
    } else {
        HandCategory::HighCard
    }
}

fn is_straight(cards: &[Card; Hand::SIZE]) -> bool {
    use Rank::*;
    const ACE_LOW: [Rank; Hand::SIZE] = [Deuce, Trey, Four, Five, Ace];

    cards.windows(2).all(|w| w[0].is_consecutive(&w[1]))
        || cards.iter().map(|c| c.rank()).eq(ACE_LOW)
}
