use crate::error::RoundError;
use crate::player::Role;
use crate::result::{Finish, RoundResult};
use crate::strategy::DealerPolicy;
use crate::table::{Event, Table};

use super::{Game, GameState};

impl Game {
    /// Dealer plays their hand according to the house rule.
    ///
    /// The dealer reveals their hole card and draws until reaching 17 or
    /// higher, then the round is settled.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in dealer turn state or the deck
    /// is empty while the dealer must draw.
    pub fn dealer_turn<T: Table + ?Sized>(
        &mut self,
        table: &mut T,
    ) -> Result<RoundResult, RoundError> {
        self.expect_state(GameState::DealerTurn)?;

        table.show(&Event::DealerTurn);
        table.show(&Event::Hand {
            player: &self.dealer,
            hide_first: false,
        });

        self.take_turn(Role::Dealer, None::<&mut DealerPolicy>, table)?;

        if self.dealer.hand().is_bust() {
            table.show(&Event::Busted {
                name: self.dealer.name(),
                value: self.dealer.hand().value(),
            });
            return Ok(self.finish(Finish::DealerBust, table));
        }

        Ok(self.finish(Finish::Comparison, table))
    }
}
