//! Round result types and winner determination.

use alloc::string::String;

use crate::hand::BLACKJACK;

/// Who won the round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// The player wins.
    PlayerWins,
    /// The dealer wins.
    DealerWins,
    /// Tie.
    Push,
}

/// How the round reached its outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Finish {
    /// One or both hands were worth 21 straight off the deal.
    Blackjack,
    /// The player went over 21.
    PlayerBust,
    /// The dealer went over 21.
    DealerBust,
    /// Both stood at 21 or less and the totals were compared.
    Comparison,
}

/// Result of a finished round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    /// The player's name.
    pub player_name: String,
    /// Who won.
    pub outcome: Outcome,
    /// How the round ended.
    pub finish: Finish,
    /// The player's final hand value.
    pub player_value: u8,
    /// The dealer's final hand value.
    pub dealer_value: u8,
}

impl RoundResult {
    /// The announcement for this result, e.g. `Dealer Wins!`.
    #[must_use]
    pub fn message(&self) -> String {
        let name = &self.player_name;
        match (self.finish, self.outcome) {
            (Finish::Blackjack, Outcome::Push) => {
                String::from("It's a push! Both player and dealer have Blackjack!")
            }
            (Finish::Blackjack, Outcome::DealerWins) => {
                String::from("Dealer wins with a Blackjack!")
            }
            (Finish::Blackjack, Outcome::PlayerWins) => {
                alloc::format!("{name} wins with a Blackjack!")
            }
            (_, Outcome::DealerWins) => String::from("Dealer Wins!"),
            (_, Outcome::PlayerWins) => alloc::format!("{name} Wins!"),
            (_, Outcome::Push) => String::from("Game is a Draw!"),
        }
    }
}

/// Decides a round from the two final totals.
///
/// A player bust loses even if the dealer also busted; otherwise a dealer
/// bust loses, and two standing hands are compared.
///
/// ```
/// use bjcli::{Outcome, determine_winner};
///
/// assert_eq!(determine_winner(22, 20), Outcome::DealerWins);
/// assert_eq!(determine_winner(18, 18), Outcome::Push);
/// ```
#[must_use]
pub const fn determine_winner(player_value: u8, dealer_value: u8) -> Outcome {
    if player_value > BLACKJACK {
        Outcome::DealerWins
    } else if dealer_value > BLACKJACK || player_value > dealer_value {
        Outcome::PlayerWins
    } else if player_value < dealer_value {
        Outcome::DealerWins
    } else {
        Outcome::Push
    }
}
