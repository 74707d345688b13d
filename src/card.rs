//! Card, suit, and rank types.

use core::cmp::Ordering;
use core::fmt;
use core::str::FromStr;

use crate::error::{ParseCardError, RankError};

/// Number of standard (non-joker) cards per deck.
pub const DECK_SIZE: usize = 52;

/// Suggested capacity for a single deck including two jokers.
pub const TYPICAL_DECK_SIZE: usize = 54;

/// Highest rank value (King).
pub const MAX_RANK: u8 = 13;

/// Card suit.
///
/// [`Suit::Joker`] is a sentinel suit for jokers and is not part of the
/// four-suit rotation in [`Suit::STANDARD`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Spades.
    Spade,
    /// Diamonds.
    Diamond,
    /// Clubs.
    Club,
    /// Hearts.
    Heart,
    /// Joker sentinel.
    Joker,
}

impl Suit {
    /// The four playable suits in construction order.
    pub const STANDARD: [Self; 4] = [Self::Spade, Self::Diamond, Self::Club, Self::Heart];

    /// Every suit, including the joker sentinel.
    pub const ALL: [Self; 5] = [
        Self::Spade,
        Self::Diamond,
        Self::Club,
        Self::Heart,
        Self::Joker,
    ];

    /// Returns the singular display name of the suit.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Spade => "Spade",
            Self::Diamond => "Diamond",
            Self::Club => "Club",
            Self::Heart => "Heart",
            Self::Joker => "Joker",
        }
    }

    /// Position of the suit in the ordering key. Jokers come after Hearts.
    pub(crate) const fn index(self) -> u16 {
        match self {
            Self::Spade => 0,
            Self::Diamond => 1,
            Self::Club => 2,
            Self::Heart => 3,
            Self::Joker => 4,
        }
    }

    /// Returns `true` for Diamonds and Hearts.
    #[must_use]
    pub const fn is_red(self) -> bool {
        matches!(self, Self::Diamond | Self::Heart)
    }

    /// Returns `true` for Spades and Clubs.
    #[must_use]
    pub const fn is_black(self) -> bool {
        matches!(self, Self::Spade | Self::Club)
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Suit {
    type Err = ParseCardError;

    /// Parses a singular or plural suit name, e.g. `"Spade"` or `"Spades"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.strip_suffix('s').unwrap_or(s);
        Self::ALL
            .into_iter()
            .find(|suit| suit.name() == name)
            .ok_or(ParseCardError::UnknownSuit)
    }
}

/// Card rank, numbered so that `Ace = 1` and `King = 13`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    /// Ace.
    Ace = 1,
    /// Two.
    Two,
    /// Three.
    Three,
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Ten.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
}

impl Rank {
    /// All ranks in ascending order.
    pub const ALL: [Self; 13] = [
        Self::Ace,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
    ];

    /// Returns the numeric value of the rank (1..=13).
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Returns the display name of the rank.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ace => "Ace",
            Self::Two => "Two",
            Self::Three => "Three",
            Self::Four => "Four",
            Self::Five => "Five",
            Self::Six => "Six",
            Self::Seven => "Seven",
            Self::Eight => "Eight",
            Self::Nine => "Nine",
            Self::Ten => "Ten",
            Self::Jack => "Jack",
            Self::Queen => "Queen",
            Self::King => "King",
        }
    }
}

impl TryFrom<u8> for Rank {
    type Error = RankError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1..=MAX_RANK => Ok(Self::ALL[value as usize - 1]),
            _ => Err(RankError::OutOfRange(value)),
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Rank {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|rank| rank.name() == s)
            .ok_or(ParseCardError::UnknownRank)
    }
}

/// A playing card.
///
/// For jokers the rank slot holds a joker index instead of a [`Rank`], which
/// keeps multiple jokers in one deck distinguishable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    suit: Suit,
    rank: u8,
}

impl Card {
    /// Creates a new card.
    ///
    /// Passing [`Suit::Joker`] yields a joker whose index is the rank value.
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self {
            suit,
            rank: rank.value(),
        }
    }

    /// Creates a joker with the given index.
    #[must_use]
    pub const fn joker(index: u8) -> Self {
        Self {
            suit: Suit::Joker,
            rank: index,
        }
    }

    /// Returns the suit of the card.
    #[must_use]
    pub const fn suit(&self) -> Suit {
        self.suit
    }

    /// Returns the rank of the card, or `None` for jokers.
    #[must_use]
    pub const fn rank(&self) -> Option<Rank> {
        if self.is_joker() {
            return None;
        }
        match self.rank {
            1..=MAX_RANK => Some(Rank::ALL[self.rank as usize - 1]),
            _ => None,
        }
    }

    /// Returns the joker index, or `None` for standard cards.
    #[must_use]
    pub const fn joker_index(&self) -> Option<u8> {
        if self.is_joker() {
            Some(self.rank)
        } else {
            None
        }
    }

    /// Returns `true` if the card is a joker.
    #[must_use]
    pub const fn is_joker(&self) -> bool {
        matches!(self.suit, Suit::Joker)
    }

    /// Raw value of the rank slot: `1..=13` for standard cards, the index for
    /// jokers.
    pub(crate) const fn rank_value(&self) -> u8 {
        self.rank
    }

    /// Ordering key combining suit and rank.
    ///
    /// Standard cards map to `1..=52` (Spade Ace lowest, Heart King highest).
    /// Jokers map past every standard card, ordered by index.
    pub(crate) const fn absolute_rank(&self) -> u16 {
        let base = self.suit.index() * MAX_RANK as u16 + self.rank as u16;
        if self.is_joker() { base + 1 } else { base }
    }
}

impl Ord for Card {
    fn cmp(&self, other: &Self) -> Ordering {
        self.absolute_rank().cmp(&other.absolute_rank())
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.rank() {
            Some(rank) => write!(f, "{rank} of {}s", self.suit),
            None => f.write_str(Suit::Joker.name()),
        }
    }
}

impl FromStr for Card {
    type Err = ParseCardError;

    /// Parses the [`Display`](fmt::Display) form of a card.
    ///
    /// Suit names must be plural, as displayed. `"Joker"` parses to the joker
    /// with index 0.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParseCardError::Empty);
        }
        if s == Suit::Joker.name() {
            return Ok(Self::joker(0));
        }

        let (rank, suit) = s.split_once(" of ").ok_or(ParseCardError::MissingOf)?;
        let rank: Rank = rank.trim().parse()?;
        let plural = suit.trim();
        let suit = Suit::STANDARD
            .into_iter()
            .find(|suit| plural.strip_suffix('s') == Some(suit.name()))
            .ok_or(ParseCardError::UnknownSuit)?;

        Ok(Self::new(suit, rank))
    }
}
