use crate::error::RoundError;
use crate::player::Role;
use crate::result::{Finish, RoundResult};
use crate::table::{Event, Table};

use super::{Game, GameState};

impl Game {
    /// Deals two cards each, alternating player and dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in setup state, or
    /// [`RoundError::DeckExhausted`] if the deck cannot cover the deal.
    pub fn deal_initial_cards<T: Table + ?Sized>(
        &mut self,
        table: &mut T,
    ) -> Result<(), RoundError> {
        self.expect_state(GameState::Setup)?;

        table.show(&Event::InitialDeal);
        self.state = GameState::InitialDeal;

        for _ in 0..2 {
            self.draw(Role::Human)?;
            self.draw(Role::Dealer)?;
        }

        self.state = GameState::ImmediateBlackjackCheck;
        Ok(())
    }

    /// Ends the round straight away if either opening hand is worth 21.
    ///
    /// Both hands are shown face up in that case and the result is returned;
    /// otherwise play moves on to the player's turn and `None` is returned.
    ///
    /// # Errors
    ///
    /// Returns an error if the initial deal has not just happened.
    pub fn check_immediate_blackjack<T: Table + ?Sized>(
        &mut self,
        table: &mut T,
    ) -> Result<Option<RoundResult>, RoundError> {
        self.expect_state(GameState::ImmediateBlackjackCheck)?;

        if !self.player.hand().is_blackjack() && !self.dealer.hand().is_blackjack() {
            self.state = GameState::PlayerTurn;
            return Ok(None);
        }

        table.show(&Event::Hand {
            player: &self.dealer,
            hide_first: false,
        });
        table.show(&Event::Hand {
            player: &self.player,
            hide_first: false,
        });

        Ok(Some(self.finish(Finish::Blackjack, table)))
    }
}
