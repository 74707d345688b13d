//! Playing-card decks with optional `no_std` support.
//!
//! The crate provides [`Card`] and [`Deck`] types: build one or more standard
//! 52-card decks with jokers, then sort, shuffle, or filter them.
//!
//! # Example
//!
//! ```
//! use cardeck::{Card, Deck, Rank, Suit};
//!
//! let mut deck = Deck::new(1, 2);
//! deck.shuffle_seeded(42);
//! deck.sort();
//! assert_eq!(deck[0], Card::new(Suit::Spade, Rank::Ace));
//!
//! let no_jokers = deck.filter(&[Suit::Joker], &[]);
//! assert_eq!(no_jokers.len(), 52);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod options;

// Re-export main types
pub use card::{Card, DECK_SIZE, MAX_RANK, Rank, Suit, TYPICAL_DECK_SIZE};
pub use deck::{Deck, ascending, descending};
pub use error::{ParseCardError, RankError};
pub use options::DeckOptions;
