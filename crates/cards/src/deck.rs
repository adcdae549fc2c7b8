// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Playing cards definitions.
use ahash::AHashMap;
use rand::prelude::*;
use std::{fmt, str::FromStr, sync::LazyLock};

use crate::CardError;

/// Rank symbols to ranks.
static RANK_SYMBOLS: LazyLock<AHashMap<&'static str, Rank>> =
    LazyLock::new(|| Rank::ranks().map(|r| (r.symbol(), r)).collect());

/// Suit symbols to suits.
static SUIT_SYMBOLS: LazyLock<AHashMap<char, Suit>> =
    LazyLock::new(|| Suit::suits().map(|s| (s.symbol(), s)).collect());

/// A playing card.
///
/// Cards are ordered by rank and then by suit, see [Suit] for the suits order.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    /// Create a card given a rank and a suit.
    pub const fn new(rank: Rank, suit: Suit) -> Card {
        Card { rank, suit }
    }

    /// Create a card from a suit symbol (C, D, H, S) and a rank symbol
    /// (2..10, J, Q, K, A), symbols are case insensitive.
    pub fn try_new(suit: &str, rank: &str) -> Result<Card, CardError> {
        Ok(Card::new(Rank::from_symbol(rank)?, Suit::from_symbol(suit)?))
    }

    /// Returns the card rank.
    pub fn rank(&self) -> Rank {
        self.rank
    }

    /// Returns the card suit.
    pub fn suit(&self) -> Suit {
        self.suit
    }

    /// Checks if the other card rank follows or precedes this card rank.
    ///
    /// An Ace is also consecutive to a Deuce but not the other way around, so
    /// callers walking a run must check cards in a consistent direction.
    pub fn is_consecutive(&self, other: &Card) -> bool {
        let (r1, r2) = (self.rank.value() as i8, other.rank.value() as i8);
        (r1 - r2).abs() == 1 || (self.rank == Rank::Ace && other.rank == Rank::Deuce)
    }

    /// Checks if the other card has the same suit.
    pub fn is_same_suit(&self, other: &Card) -> bool {
        self.suit == other.suit
    }
}

impl FromStr for Card {
    type Err = CardError;

    /// Parses a card from a suit symbol followed by a rank symbol, i.e. `S10`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        let mut chars = text.chars();
        let suit = chars
            .next()
            .ok_or_else(|| CardError::InvalidCard(s.to_string()))?;

        let rank = chars.as_str();
        if rank.is_empty() {
            return Err(CardError::InvalidCard(s.to_string()));
        }

        Ok(Card::new(Rank::from_symbol(rank)?, Suit::from_char(suit)?))
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.suit, self.rank)
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({}{})", self.suit, self.rank)
    }
}

/// Card rank, the discriminant is the rank value with the Ace high.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    /// Deuce
    Deuce = 2,
    /// Trey
    Trey,
    /// Four
    Four,
    /// Five
    Five,
    /// Six
    Six,
    /// Seven
    Seven,
    /// Eight
    Eight,
    /// Nine
    Nine,
    /// Ten
    Ten,
    /// Jack
    Jack,
    /// Queen
    Queen,
    /// King
    King,
    /// Ace
    Ace,
}

impl Rank {
    /// Returns all ranks from Deuce to Ace.
    pub fn ranks() -> impl DoubleEndedIterator<Item = Rank> {
        use Rank::*;
        [
            Deuce, Trey, Four, Five, Six, Seven, Eight, Nine, Ten, Jack, Queen, King, Ace,
        ]
        .into_iter()
    }

    /// The rank value, 2 for a Deuce up to 14 for an Ace.
    pub fn value(&self) -> u8 {
        *self as u8
    }

    /// The rank symbol.
    pub fn symbol(&self) -> &'static str {
        match self {
            Rank::Deuce => "2",
            Rank::Trey => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
        }
    }

    /// Looks up a rank from its symbol.
    pub fn from_symbol(symbol: &str) -> Result<Rank, CardError> {
        RANK_SYMBOLS
            .get(symbol.trim().to_ascii_uppercase().as_str())
            .copied()
            .ok_or_else(|| CardError::InvalidRank(symbol.to_string()))
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Card suit.
///
/// Suits are ordered as their display glyphs code points, Spades first and
/// Diamonds last.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    /// Spades suit.
    Spades,
    /// Clubs suit.
    Clubs,
    /// Hearts suit.
    Hearts,
    /// Diamonds suit.
    Diamonds,
}

impl Suit {
    /// Returns all suits in new deck order.
    pub fn suits() -> impl DoubleEndedIterator<Item = Suit> {
        [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades].into_iter()
    }

    /// The suit symbol.
    pub fn symbol(&self) -> char {
        match self {
            Suit::Clubs => 'C',
            Suit::Diamonds => 'D',
            Suit::Hearts => 'H',
            Suit::Spades => 'S',
        }
    }

    /// The suit display glyph.
    pub fn glyph(&self) -> char {
        match self {
            Suit::Clubs => '\u{2663}',
            Suit::Diamonds => '\u{2666}',
            Suit::Hearts => '\u{2665}',
            Suit::Spades => '\u{2660}',
        }
    }

    /// Looks up a suit from its one letter symbol.
    pub fn from_symbol(symbol: &str) -> Result<Suit, CardError> {
        let mut chars = symbol.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Suit::from_char(c),
            _ => Err(CardError::InvalidSuit(symbol.to_string())),
        }
    }

    fn from_char(c: char) -> Result<Suit, CardError> {
        SUIT_SYMBOLS
            .get(&c.to_ascii_uppercase())
            .copied()
            .ok_or_else(|| CardError::InvalidSuit(c.to_string()))
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A cards Deck
#[derive(Debug)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// The number of cards in the deck.
    pub const SIZE: usize = 52;

    /// Creates a new shuffled deck.
    pub fn new_and_shuffled<R: Rng>(rng: &mut R) -> Self {
        let mut deck = Self::default();
        deck.cards.shuffle(rng);
        deck
    }

    /// Deals a card from the deck.
    pub fn deal(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Checks if the deck is empty.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of cards in the deck.
    pub fn count(&self) -> usize {
        self.cards.len()
    }

    /// Checks if a card is in the deck.
    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    /// Removes a card from the deck.
    ///
    /// Returns an error if the card is not in the deck, this happens when the
    /// same card is dealt twice.
    pub fn remove(&mut self, card: Card) -> Result<(), CardError> {
        let pos = self
            .cards
            .iter()
            .position(|c| c == &card)
            .ok_or(CardError::NotInDeck(card))?;
        self.cards.remove(pos);
        Ok(())
    }

    /// Returns all the 2-cards combinations of the cards in the deck.
    ///
    /// Pairs are returned in lexicographic order of the cards positions in
    /// the deck.
    pub fn pairs(&self) -> Vec<[Card; 2]> {
        let n = self.cards.len();
        let mut pairs = Vec::with_capacity(n * n.saturating_sub(1) / 2);

        for c1 in 0..n {
            for c2 in (c1 + 1)..n {
                pairs.push([self.cards[c1], self.cards[c2]]);
            }
        }

        pairs
    }
}

impl Default for Deck {
    /// A deck in new deck order, for each suit the Ace comes first followed by
    /// the Deuce up to the King.
    fn default() -> Self {
        let ace_first = || std::iter::once(Rank::Ace).chain(Rank::ranks().take(12));
        let cards = Suit::suits()
            .flat_map(|s| ace_first().map(move |r| Card::new(r, s)))
            .collect::<Vec<_>>();
        Self { cards }
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::HashSet;

    #[test]
    fn card_symbols() {
        for suit in ["C", "D", "H", "S"] {
            for (rank, value) in [
                ("2", 2),
                ("3", 3),
                ("4", 4),
                ("5", 5),
                ("6", 6),
                ("7", 7),
                ("8", 8),
                ("9", 9),
                ("10", 10),
                ("J", 11),
                ("Q", 12),
                ("K", 13),
                ("A", 14),
            ] {
                let card = Card::try_new(suit, rank).unwrap();
                assert_eq!(card.rank().value(), value);
                assert_eq!(card.suit().symbol().to_string(), suit);
            }
        }

        // Symbols are case insensitive.
        let qh = Card::try_new("h", "q").unwrap();
        assert_eq!(qh, Card::new(Rank::Queen, Suit::Hearts));
    }

    #[test]
    fn card_invalid_symbols() {
        assert_eq!(
            Card::try_new("X", "A"),
            Err(CardError::InvalidSuit("X".to_string()))
        );
        assert_eq!(
            Card::try_new("CD", "A"),
            Err(CardError::InvalidSuit("CD".to_string()))
        );
        assert_eq!(
            Card::try_new("C", "1"),
            Err(CardError::InvalidRank("1".to_string()))
        );
        assert_eq!(
            Card::try_new("C", "11"),
            Err(CardError::InvalidRank("11".to_string()))
        );
        assert!(matches!(
            Card::try_new("", ""),
            Err(CardError::InvalidRank(_))
        ));
    }

    #[test]
    fn card_parse() {
        let ts = "S10".parse::<Card>().unwrap();
        assert_eq!(ts, Card::new(Rank::Ten, Suit::Spades));

        let ad = " da ".parse::<Card>().unwrap();
        assert_eq!(ad, Card::new(Rank::Ace, Suit::Diamonds));

        assert_eq!(
            "".parse::<Card>(),
            Err(CardError::InvalidCard("".to_string()))
        );
        assert_eq!(
            "S".parse::<Card>(),
            Err(CardError::InvalidCard("S".to_string()))
        );
        assert_eq!(
            "Z5".parse::<Card>(),
            Err(CardError::InvalidSuit("Z".to_string()))
        );
        assert_eq!(
            "H1".parse::<Card>(),
            Err(CardError::InvalidRank("1".to_string()))
        );
    }

    #[test]
    fn card_to_string() {
        let c = Card::new(Rank::King, Suit::Diamonds);
        assert_eq!(c.to_string(), "DK");

        let c = Card::new(Rank::Five, Suit::Spades);
        assert_eq!(c.to_string(), "S5");

        let c = Card::new(Rank::Ten, Suit::Hearts);
        assert_eq!(c.to_string(), "H10");
        assert_eq!(format!("{c:?}"), "Card(H10)");

        for card in Deck::default() {
            assert_eq!(card.to_string().parse::<Card>(), Ok(card));
        }
    }

    #[test]
    fn card_ordering() {
        let c2 = Card::new(Rank::Deuce, Suit::Diamonds);
        let s3 = Card::new(Rank::Trey, Suit::Spades);
        assert!(c2 < s3);

        // Same rank, ordered by suit.
        let s9 = Card::new(Rank::Nine, Suit::Spades);
        let c9 = Card::new(Rank::Nine, Suit::Clubs);
        let h9 = Card::new(Rank::Nine, Suit::Hearts);
        let d9 = Card::new(Rank::Nine, Suit::Diamonds);
        assert!(s9 < c9 && c9 < h9 && h9 < d9);

        assert_eq!(c9, Card::new(Rank::Nine, Suit::Clubs));
        assert_ne!(c9, h9);

        let mut cards = vec![d9, s3, c9, c2];
        cards.sort();
        assert_eq!(cards, vec![c2, s3, c9, d9]);
    }

    #[test]
    fn card_consecutive() {
        let ace = Card::new(Rank::Ace, Suit::Clubs);
        let deuce = Card::new(Rank::Deuce, Suit::Hearts);
        let trey = Card::new(Rank::Trey, Suit::Hearts);
        let king = Card::new(Rank::King, Suit::Spades);

        assert!(deuce.is_consecutive(&trey));
        assert!(trey.is_consecutive(&deuce));
        assert!(king.is_consecutive(&ace));
        assert!(ace.is_consecutive(&king));

        // The wraparound only goes from the Ace to the Deuce.
        assert!(ace.is_consecutive(&deuce));
        assert!(!deuce.is_consecutive(&ace));

        assert!(!deuce.is_consecutive(&deuce));
        assert!(!deuce.is_consecutive(&king));
    }

    #[test]
    fn card_same_suit() {
        let ah = Card::new(Rank::Ace, Suit::Hearts);
        let th = Card::new(Rank::Ten, Suit::Hearts);
        let ts = Card::new(Rank::Ten, Suit::Spades);
        assert!(ah.is_same_suit(&th));
        assert!(!th.is_same_suit(&ts));
    }

    #[test]
    fn suit_glyphs() {
        assert_eq!(Suit::Clubs.glyph(), '♣');
        assert_eq!(Suit::Diamonds.glyph(), '♦');
        assert_eq!(Suit::Hearts.glyph(), '♥');
        assert_eq!(Suit::Spades.glyph(), '♠');

        let mut suits = Suit::suits().collect::<Vec<_>>();
        suits.sort();
        let glyphs = suits.iter().map(|s| s.glyph()).collect::<Vec<_>>();
        let mut sorted = glyphs.clone();
        sorted.sort();
        assert_eq!(glyphs, sorted);
    }

    #[test]
    fn deck_default() {
        let deck = Deck::default();
        assert_eq!(deck.count(), Deck::SIZE);

        let cards = deck.into_iter().collect::<Vec<_>>();
        assert_eq!(cards[0], Card::new(Rank::Ace, Suit::Clubs));
        assert_eq!(cards[1], Card::new(Rank::Deuce, Suit::Clubs));
        assert_eq!(cards[12], Card::new(Rank::King, Suit::Clubs));
        assert_eq!(cards[51], Card::new(Rank::King, Suit::Spades));

        // Check uniquness.
        let unique = cards.iter().collect::<HashSet<_>>();
        assert_eq!(unique.len(), Deck::SIZE);
    }

    #[test]
    fn deck_shuffled() {
        let mut deck = Deck::new_and_shuffled(&mut rand::rng());
        let mut cards = HashSet::default();

        while let Some(card) = deck.deal() {
            cards.insert(card);
        }

        assert!(deck.is_empty());
        assert_eq!(cards.len(), Deck::SIZE);
    }

    #[test]
    fn deck_remove() {
        let mut deck = Deck::default();
        let ad = Card::new(Rank::Ace, Suit::Diamonds);

        assert!(deck.contains(ad));
        assert_eq!(deck.remove(ad), Ok(()));
        assert!(!deck.contains(ad));
        assert_eq!(deck.count(), 51);

        assert_eq!(deck.remove(ad), Err(CardError::NotInDeck(ad)));
        assert_eq!(deck.count(), 51);
    }

    #[test]
    fn deck_pairs() {
        let mut deck = Deck::default();

        let pairs = deck.pairs();
        assert_eq!(pairs.len(), 1_326);

        let unique = pairs.iter().collect::<HashSet<_>>();
        assert_eq!(unique.len(), 1_326);

        assert_eq!(
            pairs[0],
            [
                Card::new(Rank::Ace, Suit::Clubs),
                Card::new(Rank::Deuce, Suit::Clubs)
            ]
        );
        assert_eq!(
            pairs[pairs.len() - 1],
            [
                Card::new(Rank::Queen, Suit::Spades),
                Card::new(Rank::King, Suit::Spades)
            ]
        );

        deck.remove(Card::new(Rank::King, Suit::Spades)).unwrap();
        assert_eq!(deck.pairs().len(), 1_275);

        while deck.count() > 1 {
            deck.deal();
        }
        assert!(deck.pairs().is_empty());
    }
}
