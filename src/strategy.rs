//! Decision policies for a participant's turn.

use alloc::collections::VecDeque;

use crate::error::RoundError;
use crate::player::Player;

/// The dealer draws while below this total.
pub const DEALER_STANDS_ON: u8 = 17;

/// A turn decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Decision {
    /// Draw another card.
    Hit,
    /// Stop drawing.
    Stand,
}

impl Decision {
    /// Parses a typed decision. Surrounding whitespace and case are ignored;
    /// anything other than `hit` or `stand` is rejected.
    ///
    /// ```
    /// use bjcli::Decision;
    ///
    /// assert_eq!(Decision::parse("  HIT\n"), Some(Decision::Hit));
    /// assert_eq!(Decision::parse("h"), None);
    /// ```
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        if input.eq_ignore_ascii_case("hit") {
            Some(Self::Hit)
        } else if input.eq_ignore_ascii_case("stand") {
            Some(Self::Stand)
        } else {
            None
        }
    }
}

/// Chooses between hitting and standing.
pub trait Strategy {
    /// Decides the next move for `player`, whose hand is below 21.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::InputClosed`] if the decision source has gone
    /// away.
    fn decide(&mut self, player: &Player) -> Result<Decision, RoundError>;
}

/// The house rule: hit below 17, stand on anything else, bust included.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DealerPolicy;

impl DealerPolicy {
    /// The decision for a given hand total.
    #[must_use]
    pub const fn decision_for(value: u8) -> Decision {
        if value < DEALER_STANDS_ON {
            Decision::Hit
        } else {
            Decision::Stand
        }
    }
}

impl Strategy for DealerPolicy {
    fn decide(&mut self, player: &Player) -> Result<Decision, RoundError> {
        Ok(Self::decision_for(player.hand().value()))
    }
}

/// Replays a fixed list of decisions, then reports closed input.
#[derive(Debug, Clone, Default)]
pub struct Scripted {
    decisions: VecDeque<Decision>,
    asked: usize,
}

impl Scripted {
    /// Creates a strategy that answers with `decisions` in order.
    #[must_use]
    pub fn new(decisions: impl IntoIterator<Item = Decision>) -> Self {
        Self {
            decisions: decisions.into_iter().collect(),
            asked: 0,
        }
    }

    /// Returns how many times a decision was requested.
    #[must_use]
    pub const fn asked(&self) -> usize {
        self.asked
    }
}

impl Strategy for Scripted {
    fn decide(&mut self, _player: &Player) -> Result<Decision, RoundError> {
        self.asked += 1;
        self.decisions.pop_front().ok_or(RoundError::InputClosed)
    }
}
