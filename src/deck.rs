//! Deck construction, ordering, shuffling, and filtering.

use core::cmp::Ordering;
use core::fmt;
use core::ops::Index;
use core::slice;

use alloc::vec::{self, Vec};
#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashSet;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
#[cfg(feature = "std")]
use std::collections::HashSet;
use tracing::{debug, trace};

use crate::card::{Card, Rank, Suit, TYPICAL_DECK_SIZE};
use crate::options::DeckOptions;

/// Orders cards from the Ace of Spades up to the King of Hearts, then jokers.
///
/// This is the order used by [`Deck::sort`].
#[must_use]
pub fn ascending(a: &Card, b: &Card) -> Ordering {
    a.absolute_rank().cmp(&b.absolute_rank())
}

/// Reverse of [`ascending`]: jokers first, Ace of Spades last.
#[must_use]
pub fn descending(a: &Card, b: &Card) -> Ordering {
    b.absolute_rank().cmp(&a.absolute_rank())
}

/// An ordered collection of cards.
///
/// Duplicates are allowed, so a deck built from several standard decks holds
/// several copies of each card.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Builds `decks` standard decks, each followed by `jokers_per_deck` jokers.
    ///
    /// Within each deck the cards run Ace to King for Spades, Diamonds, Clubs,
    /// and Hearts in that order, then jokers indexed from 0.
    ///
    /// # Example
    ///
    /// ```
    /// use cardeck::Deck;
    ///
    /// let deck = Deck::new(2, 2);
    /// assert_eq!(deck.len(), 2 * 54);
    /// ```
    #[must_use]
    pub fn new(decks: usize, jokers_per_deck: u8) -> Self {
        Self::with_options(
            DeckOptions::default()
                .with_decks(decks)
                .with_jokers_per_deck(jokers_per_deck),
        )
    }

    /// Builds a deck from [`DeckOptions`].
    #[must_use]
    pub fn with_options(options: DeckOptions) -> Self {
        let mut cards = Vec::with_capacity(options.card_count());

        for _ in 0..options.decks {
            for suit in Suit::STANDARD {
                for rank in Rank::ALL {
                    cards.push(Card::new(suit, rank));
                }
            }
            for index in 0..options.jokers_per_deck {
                cards.push(Card::joker(index));
            }
        }

        debug!(
            decks = options.decks,
            jokers_per_deck = options.jokers_per_deck,
            cards = cards.len(),
            "built deck"
        );

        Self { cards }
    }

    /// Creates a deck with no cards.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            cards: Vec::with_capacity(TYPICAL_DECK_SIZE),
        }
    }

    /// Removes every card, keeping the allocation.
    pub fn clear(&mut self) {
        self.cards.clear();
    }

    /// Returns the number of cards in the deck.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns `true` if the deck holds no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the cards in order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns an iterator over the cards in order.
    pub fn iter(&self) -> slice::Iter<'_, Card> {
        self.cards.iter()
    }

    /// Returns the card at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    /// Appends a card to the end of the deck.
    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns `true` if the deck holds at least one copy of `card`.
    #[must_use]
    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }

    /// Returns how many copies of `card` the deck holds.
    #[must_use]
    pub fn count(&self, card: &Card) -> usize {
        self.cards.iter().filter(|c| *c == card).count()
    }

    /// Sorts the deck in place in [`ascending`] order.
    ///
    /// The sort is not stable; identical cards from different source decks may
    /// end up in any relative order.
    pub fn sort(&mut self) {
        self.sort_by(ascending);
    }

    /// Sorts the deck in place with a caller-supplied comparator.
    ///
    /// # Example
    ///
    /// ```
    /// use cardeck::{Card, Deck, descending};
    ///
    /// let mut deck = Deck::new(1, 2);
    /// deck.sort_by(descending);
    /// assert_eq!(deck[0], Card::joker(1));
    /// ```
    pub fn sort_by<F>(&mut self, compare: F)
    where
        F: FnMut(&Card, &Card) -> Ordering,
    {
        trace!(cards = self.cards.len(), "sorting deck");
        self.cards.sort_unstable_by(compare);
    }

    /// Shuffles the deck in place using the thread-local random generator.
    #[cfg(feature = "std")]
    #[cfg_attr(docsrs, doc(cfg(feature = "std")))]
    pub fn shuffle(&mut self) {
        self.shuffle_with(&mut rand::rng());
    }

    /// Shuffles the deck in place using the given random generator.
    pub fn shuffle_with<R>(&mut self, rng: &mut R)
    where
        R: Rng + ?Sized,
    {
        debug!(cards = self.cards.len(), "shuffling deck");
        self.cards.shuffle(rng);
    }

    /// Shuffles the deck in place with a deterministic generator seeded by `seed`.
    ///
    /// The same seed always produces the same order for the same starting deck.
    pub fn shuffle_seeded(&mut self, seed: u64) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.shuffle_with(&mut rng);
    }

    /// Returns a new deck without the cards of the excluded suits or ranks.
    ///
    /// A card is dropped if its suit is in `excluded_suits` or its rank is in
    /// `excluded_ranks`. A joker's index is matched against the excluded rank
    /// values too, so excluding [`Rank::Ace`] drops joker 1. The relative order
    /// of kept cards is preserved and `self` is left untouched.
    ///
    /// # Example
    ///
    /// ```
    /// use cardeck::{Deck, Rank, Suit};
    ///
    /// let deck = Deck::new(1, 2);
    /// let filtered = deck.filter(&[Suit::Joker], &[Rank::Two, Rank::Three]);
    /// assert_eq!(filtered.len(), 44);
    /// ```
    #[must_use]
    pub fn filter(&self, excluded_suits: &[Suit], excluded_ranks: &[Rank]) -> Self {
        let suits: HashSet<Suit> = excluded_suits.iter().copied().collect();
        let ranks: HashSet<u8> = excluded_ranks.iter().map(|rank| rank.value()).collect();

        let filtered = self.filter_by(|card| {
            !suits.contains(&card.suit()) && !ranks.contains(&card.rank_value())
        });

        debug!(
            kept = filtered.len(),
            dropped = self.len() - filtered.len(),
            "filtered deck"
        );

        filtered
    }

    /// Returns a new deck holding, in order, the cards for which `keep` is `true`.
    #[must_use]
    pub fn filter_by<F>(&self, mut keep: F) -> Self
    where
        F: FnMut(&Card) -> bool,
    {
        let mut cards = Vec::with_capacity(self.cards.len());
        cards.extend(self.cards.iter().copied().filter(|card| keep(card)));
        Self { cards }
    }
}

impl Default for Deck {
    /// A single standard deck without jokers.
    fn default() -> Self {
        Self::with_options(DeckOptions::default())
    }
}

impl Index<usize> for Deck {
    type Output = Card;

    fn index(&self, index: usize) -> &Self::Output {
        &self.cards[index]
    }
}

impl FromIterator<Card> for Deck {
    fn from_iter<T: IntoIterator<Item = Card>>(iter: T) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

impl Extend<Card> for Deck {
    fn extend<T: IntoIterator<Item = Card>>(&mut self, iter: T) {
        self.cards.extend(iter);
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

impl<'a> IntoIterator for &'a Deck {
    type Item = &'a Card;
    type IntoIter = slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}

impl From<Vec<Card>> for Deck {
    fn from(cards: Vec<Card>) -> Self {
        Self { cards }
    }
}

impl fmt::Display for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}
