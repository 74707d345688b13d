//! Deck construction options.

use crate::card::DECK_SIZE;

/// Configuration for building a [`Deck`](crate::Deck).
///
/// Use the builder pattern to customize options:
///
/// ```
/// use cardeck::DeckOptions;
///
/// let options = DeckOptions::default()
///     .with_decks(6)
///     .with_jokers_per_deck(2);
/// assert_eq!(options.card_count(), 6 * 54);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DeckOptions {
    /// Number of standard decks.
    pub decks: usize,
    /// Jokers appended after each standard deck.
    pub jokers_per_deck: u8,
}

impl Default for DeckOptions {
    fn default() -> Self {
        Self {
            decks: 1,
            jokers_per_deck: 0,
        }
    }
}

impl DeckOptions {
    /// Sets the number of decks.
    ///
    /// # Example
    ///
    /// ```
    /// use cardeck::DeckOptions;
    ///
    /// let options = DeckOptions::default().with_decks(4);
    /// assert_eq!(options.decks, 4);
    /// ```
    #[must_use]
    pub const fn with_decks(mut self, decks: usize) -> Self {
        self.decks = decks;
        self
    }

    /// Sets the number of jokers per deck.
    ///
    /// # Example
    ///
    /// ```
    /// use cardeck::DeckOptions;
    ///
    /// let options = DeckOptions::default().with_jokers_per_deck(2);
    /// assert_eq!(options.jokers_per_deck, 2);
    /// ```
    #[must_use]
    pub const fn with_jokers_per_deck(mut self, jokers: u8) -> Self {
        self.jokers_per_deck = jokers;
        self
    }

    /// Total number of cards a deck built from these options holds.
    #[must_use]
    pub const fn card_count(&self) -> usize {
        self.decks * (DECK_SIZE + self.jokers_per_deck as usize)
    }
}
