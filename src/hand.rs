//! Hand representation and valuation.

use alloc::vec::Vec;
use core::fmt;

use crate::card::Card;

/// The value a hand must not exceed.
pub const BLACKJACK: u8 = 21;

/// An Ace may be promoted to 11 while the total is at most this.
const ACE_PROMOTION_LIMIT: u8 = BLACKJACK - 10;

fn evaluate_cards(cards: &[Card]) -> u8 {
    let mut total: u8 = 0;
    let mut aces: u8 = 0;

    for card in cards {
        if card.is_ace() {
            aces += 1;
        }
        total = total.saturating_add(card.value());
    }

    while total <= ACE_PROMOTION_LIMIT && aces > 0 {
        total += 10;
        aces -= 1;
    }

    total
}

/// The cards held by one participant during a round.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates an empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the order they were dealt.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Calculates the value of the hand.
    ///
    /// Every Ace first counts 1. Then, one Ace at a time, 10 is added while
    /// the running total is 11 or less.
    #[must_use]
    pub fn value(&self) -> u8 {
        evaluate_cards(&self.cards)
    }

    /// Value of every card except the first, i.e. what an onlooker can
    /// count while the first card is face down.
    #[must_use]
    pub fn visible_value(&self) -> u8 {
        self.cards.get(1..).map_or(0, evaluate_cards)
    }

    /// Returns whether the hand is worth exactly 21.
    #[must_use]
    pub fn is_blackjack(&self) -> bool {
        self.value() == BLACKJACK
    }

    /// Returns whether the hand is over 21.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.value() > BLACKJACK
    }

    /// Returns a displayable listing of the hand, one card per line.
    ///
    /// With `hide_first` set the first card is printed as `Hidden Card`.
    #[must_use]
    pub const fn display(&self, hide_first: bool) -> HandDisplay<'_> {
        HandDisplay {
            hand: self,
            hide_first,
        }
    }
}

/// Line-per-card rendering of a [`Hand`]. See [`Hand::display`].
#[derive(Debug, Clone, Copy)]
pub struct HandDisplay<'a> {
    hand: &'a Hand,
    hide_first: bool,
}

impl fmt::Display for HandDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, card) in self.hand.cards.iter().enumerate() {
            if index > 0 {
                f.write_str("\n")?;
            }
            if index == 0 && self.hide_first {
                f.write_str("Hidden Card")?;
            } else {
                write!(f, "{card}")?;
            }
        }
        Ok(())
    }
}
