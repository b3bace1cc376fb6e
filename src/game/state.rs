//! Game state types.

/// Where a round currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameState {
    /// Fresh deck, empty hands.
    Setup,
    /// Dealing the opening two cards each.
    InitialDeal,
    /// Opening hands dealt; checking for a 21 on either side.
    ImmediateBlackjackCheck,
    /// Waiting for the player's decisions.
    PlayerTurn,
    /// Dealer plays out their hand.
    DealerTurn,
    /// Round has ended and a result was produced.
    RoundOver,
    /// The deck ran out or input closed; the round produced no result.
    Aborted,
}

impl GameState {
    /// Returns whether the round can make no further progress.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::RoundOver | Self::Aborted)
    }
}
