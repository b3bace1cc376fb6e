//! Round participants.

use alloc::string::String;

use log::debug;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::DealError;
use crate::hand::Hand;

/// Name the dealer always plays under.
pub const DEALER_NAME: &str = "Dealer";

/// Who is behind a [`Player`]. Selects the decision policy used on its turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// The human at the terminal.
    Human,
    /// The house, playing a fixed policy.
    Dealer,
}

/// A named participant holding one hand.
#[derive(Debug, Clone)]
pub struct Player {
    name: String,
    role: Role,
    hand: Hand,
    stood: bool,
}

impl Player {
    /// Creates a human participant with an empty hand.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            role: Role::Human,
            hand: Hand::new(),
            stood: false,
        }
    }

    /// Creates the dealer.
    #[must_use]
    pub fn dealer() -> Self {
        Self {
            name: String::from(DEALER_NAME),
            role: Role::Dealer,
            hand: Hand::new(),
            stood: false,
        }
    }

    /// Returns the participant's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the participant's role.
    #[must_use]
    pub const fn role(&self) -> Role {
        self.role
    }

    /// Returns the participant's hand.
    #[must_use]
    pub const fn hand(&self) -> &Hand {
        &self.hand
    }

    /// Returns whether the participant has stood this round.
    #[must_use]
    pub const fn has_stood(&self) -> bool {
        self.stood
    }

    /// Draws one card from `deck` into the hand and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::EmptyDeck`] if the deck is empty; the hand is
    /// left unchanged.
    pub fn hit(&mut self, deck: &mut Deck) -> Result<Card, DealError> {
        let card = deck.deal()?;
        self.hand.add_card(card);
        debug!("{} draws {card} (total {})", self.name, self.hand.value());
        Ok(card)
    }

    /// Stops drawing for the rest of the round. Returns the standing total.
    pub fn stand(&mut self) -> u8 {
        self.stood = true;
        let value = self.hand.value();
        debug!("{} stands on {value}", self.name);
        value
    }
}
