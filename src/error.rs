//! Error types for round operations.

use thiserror::Error;

/// Errors that can occur while dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    EmptyDeck,
}

/// Errors that end a round early.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoundError {
    /// The deck ran out while a card was needed. The round is abandoned.
    #[error("deck exhausted: {0}")]
    DeckExhausted(#[from] DealError),
    /// A round step was called out of order.
    #[error("invalid game state for this step")]
    InvalidState,
    /// The player's input stream closed before a decision was made.
    #[error("player input closed")]
    InputClosed,
}
