//! The 52-card deck a round is dealt from.

use alloc::vec::Vec;

use log::debug;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::DealError;

/// A single deck of cards.
///
/// Cards are dealt from the end of the internal sequence and never put back,
/// so `remaining() + dealt()` stays equal to the size the deck was built with.
#[derive(Debug, Clone)]
pub struct Deck {
    /// Cards not yet dealt. The next card dealt is the last element.
    cards: Vec<Card>,
    /// Number of cards the deck was built with.
    size: usize,
}

impl Deck {
    /// Builds all 52 cards and shuffles them with the given generator.
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut cards = Self::fresh_cards();
        cards.shuffle(rng);
        debug!("deck shuffled ({} cards)", cards.len());

        Self {
            size: cards.len(),
            cards,
        }
    }

    /// Builds a shuffled deck from a seed. The same seed always yields the
    /// same order.
    ///
    /// ```
    /// use bjcli::Deck;
    ///
    /// let mut a = Deck::from_seed(7);
    /// let mut b = Deck::from_seed(7);
    /// assert_eq!(a.deal(), b.deal());
    /// ```
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        Self::new(&mut rng)
    }

    /// Builds a deck whose successive [`deal`](Self::deal) calls return
    /// `draws` in order.
    #[must_use]
    pub fn stacked(draws: &[Card]) -> Self {
        let mut cards = draws.to_vec();
        cards.reverse();

        Self {
            size: cards.len(),
            cards,
        }
    }

    /// Creates the 52 cards in rank-major order.
    fn fresh_cards() -> Vec<Card> {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for rank in Rank::ALL {
            for suit in Suit::ALL {
                cards.push(Card::new(rank, suit));
            }
        }

        cards
    }

    /// Removes and returns the top card.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::EmptyDeck`] if every card has been dealt.
    pub fn deal(&mut self) -> Result<Card, DealError> {
        self.cards.pop().ok_or(DealError::EmptyDeck)
    }

    /// Returns the number of cards left to deal.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    /// Returns the number of cards dealt so far.
    #[must_use]
    pub fn dealt(&self) -> usize {
        self.size - self.cards.len()
    }

    /// Returns whether the deck has run out.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
