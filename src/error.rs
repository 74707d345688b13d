//! Error types for card conversions.

use thiserror::Error;

/// Errors that can occur when converting a number into a [`Rank`](crate::Rank).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RankError {
    /// Value is outside `1..=13`.
    #[error("rank value {0} is outside 1..=13")]
    OutOfRange(u8),
}

/// Errors that can occur when parsing a card, suit, or rank from text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseCardError {
    /// Input is empty.
    #[error("empty card name")]
    Empty,
    /// Rank name is not recognized.
    #[error("unknown rank name")]
    UnknownRank,
    /// Suit name is not recognized.
    #[error("unknown suit name")]
    UnknownSuit,
    /// Input is neither `"Joker"` nor of the form `"<Rank> of <Suit>s"`.
    #[error("expected \"<Rank> of <Suit>s\" or \"Joker\"")]
    MissingOf,
}
