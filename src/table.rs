//! The display capability a round reports to.

use crate::card::Card;
use crate::player::Player;
use crate::result::RoundResult;

/// Something that happened at the table, in the order it happened.
#[derive(Debug, Clone, Copy)]
pub enum Event<'a> {
    /// The initial deal is about to start.
    InitialDeal,
    /// A participant's hand, optionally with the first card face down.
    Hand {
        /// Whose hand.
        player: &'a Player,
        /// Whether the first card is concealed.
        hide_first: bool,
    },
    /// The human's turn begins.
    PlayerTurn {
        /// The player's name.
        name: &'a str,
    },
    /// A participant drew a card.
    Drew {
        /// Who drew.
        name: &'a str,
        /// The card drawn.
        card: Card,
    },
    /// A participant stopped drawing.
    Stood {
        /// Who stood.
        name: &'a str,
        /// Their total.
        value: u8,
    },
    /// A participant went over 21.
    Busted {
        /// Who busted.
        name: &'a str,
        /// Their total.
        value: u8,
    },
    /// The dealer's turn begins and the hole card is turned over.
    DealerTurn,
    /// The round is decided.
    Result(&'a RoundResult),
}

/// Presentation collaborator for a round.
///
/// The game never writes output itself; it reports [`Event`]s here.
pub trait Table {
    /// Clears the screen before a new round. Does nothing by default.
    fn clear(&mut self) {}

    /// Presents one event.
    fn show(&mut self, event: &Event<'_>);
}

/// A table that discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct Silent;

impl Table for Silent {
    fn show(&mut self, _event: &Event<'_>) {}
}
