// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Winning cards search.
//!
//! Given the players hole cards and three community cards this module tries
//! the 2-cards combinations left in the deck until it finds the two cards that
//! make a designated player the winner.
//!
//! For each candidate pair every player plays the best hand made from three
//! of the five community cards and the two hole cards, the player with the
//! highest [Hand::score] wins the round with ties going to the player that
//! comes first at the table.
use ahash::AHashSet;
use log::{debug, info, trace};
use rand::{SeedableRng, rngs::StdRng, seq::SliceRandom};

use stacked_cards::{Card, Deck};

use crate::{Hand, HandError, SearchError};

/// The number of community cards on the table before the search.
pub const COMMUNITY_CARDS: usize = 3;

/// Default number of candidate pairs to try.
pub const DEFAULT_MAX_ITERATIONS: usize = 10_000;

/// A player with its hole cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    name: String,
    cards: [Card; 2],
}

impl Player {
    /// Creates a new player.
    pub fn new(name: impl Into<String>, cards: [Card; 2]) -> Self {
        Self {
            name: name.into(),
            cards,
        }
    }

    /// The player name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The player hole cards.
    pub fn cards(&self) -> &[Card; 2] {
        &self.cards
    }
}

/// The players and the community cards.
#[derive(Debug, Clone)]
pub struct Table {
    players: Vec<Player>,
    community: [Card; COMMUNITY_CARDS],
}

impl Table {
    /// Creates a new table.
    ///
    /// Players keep their order, that is used to break ties between hands with
    /// the same score.
    pub fn new(players: Vec<Player>, community: &[Card]) -> Result<Self, SearchError> {
        if players.is_empty() {
            return Err(SearchError::NoPlayers);
        }

        let community: [Card; COMMUNITY_CARDS] = community
            .try_into()
            .map_err(|_| SearchError::CommunityCount(community.len()))?;

        let mut names = AHashSet::with_capacity(players.len());
        for player in &players {
            if !names.insert(player.name()) {
                return Err(SearchError::DuplicatePlayer(player.name().to_string()));
            }
        }

        Ok(Self { players, community })
    }

    /// The players at this table.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// The community cards.
    pub fn community(&self) -> &[Card; COMMUNITY_CARDS] {
        &self.community
    }

    /// Returns a deck without the players and community cards.
    pub fn remaining_deck(&self) -> Result<Deck, SearchError> {
        let mut deck = Deck::default();

        let hole_cards = self.players.iter().flat_map(|p| p.cards.iter());
        for card in hole_cards.chain(self.community.iter()) {
            deck.remove(*card)?;
        }

        Ok(deck)
    }

    /// Plays a round with the given two extra community cards.
    pub fn play(&self, cards: [Card; 2]) -> Result<Round, HandError> {
        let [c1, c2, c3] = self.community;
        let pool = [c1, c2, c3, cards[0], cards[1]];

        let hands = self
            .players
            .iter()
            .map(|p| best_hand(&pool, &p.cards))
            .collect::<Result<Vec<_>, _>>()?;

        let mut leader = 0;
        for (idx, hand) in hands.iter().enumerate().skip(1) {
            if hand.score() > hands[leader].score() {
                leader = idx;
            }
        }

        Ok(Round {
            cards,
            hands,
            leader,
        })
    }
}

/// Returns the highest scoring hand made from three pool cards and the two
/// hole cards.
///
/// Subsets are tried in lexicographic order and the first one wins on ties.
pub fn best_hand(pool: &[Card; 5], hole: &[Card; 2]) -> Result<Hand, HandError> {
    let mut best: Option<Hand> = None;

    for i in 0..pool.len() {
        for j in (i + 1)..pool.len() {
            for k in (j + 1)..pool.len() {
                let hand = Hand::new(&[pool[i], pool[j], pool[k], hole[0], hole[1]])?;
                if best.is_none_or(|b| hand.score() > b.score()) {
                    best = Some(hand);
                }
            }
        }
    }

    // A 5 cards pool always has 10 subsets.
    best.ok_or(HandError::InvalidHandSize(0))
}

/// The result of playing one candidate pair.
#[derive(Debug, Clone)]
pub struct Round {
    /// The two cards added to the community cards.
    pub cards: [Card; 2],
    /// The best hand for each player in table order.
    pub hands: Vec<Hand>,
    /// The index of the player with the best hand.
    pub leader: usize,
}

impl Round {
    /// The leader best hand.
    pub fn leader_hand(&self) -> &Hand {
        &self.hands[self.leader]
    }
}

/// Search configuration.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// The maximum number of candidate pairs to try.
    pub max_iterations: usize,
    /// Shuffle candidates with this seed, if none the candidates are tried
    /// from the last to the first deck pair.
    pub seed: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
            seed: None,
        }
    }
}

/// How a search ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The designated player wins the last round.
    Found,
    /// All candidate pairs have been tried.
    Exhausted,
    /// The maximum number of iterations has been reached.
    CapReached,
}

/// The search outcome.
#[derive(Debug, Clone)]
pub struct Outcome {
    /// How the search ended.
    pub status: Status,
    /// The number of candidate pairs tried.
    pub iterations: usize,
    /// The last round played, none if no candidate was tried.
    pub round: Option<Round>,
}

impl Outcome {
    /// The winning cards if the search succeeded.
    pub fn winning_cards(&self) -> Option<[Card; 2]> {
        match (&self.status, &self.round) {
            (Status::Found, Some(round)) => Some(round.cards),
            _ => None,
        }
    }
}

/// Searches the two cards that make `winner` win the round.
pub fn find_winning_cards(
    table: &Table,
    winner: &str,
    config: &SearchConfig,
) -> Result<Outcome, SearchError> {
    let winner_idx = table
        .players
        .iter()
        .position(|p| p.name() == winner)
        .ok_or_else(|| SearchError::UnknownPlayer(winner.to_string()))?;

    let deck = table.remaining_deck()?;
    let mut candidates = deck.pairs();
    if let Some(seed) = config.seed {
        candidates.shuffle(&mut StdRng::seed_from_u64(seed));
    }

    debug!(
        "Searching {} candidates for {winner} with {} players",
        candidates.len(),
        table.players.len()
    );

    let mut iterations = 0;
    let mut last = None;

    let status = loop {
        let Some(cards) = candidates.pop() else {
            break Status::Exhausted;
        };

        if iterations >= config.max_iterations {
            break Status::CapReached;
        }

        iterations += 1;

        let round = table.play(cards)?;
        trace!(
            "Candidate {} {} leader {} with {}",
            cards[0],
            cards[1],
            table.players[round.leader].name(),
            round.leader_hand().category()
        );

        let found = round.leader == winner_idx;
        last = Some(round);

        if found {
            break Status::Found;
        }
    };

    match status {
        Status::Found => info!("Found winning cards for {winner} in {iterations} iterations"),
        Status::Exhausted => info!("No winning cards for {winner} in {iterations} candidates"),
        Status::CapReached => info!("No winning cards for {winner} after {iterations} iterations"),
    }

    Ok(Outcome {
        status,
        iterations,
        round: last,
    })
}
