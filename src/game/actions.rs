use crate::card::Card;
use crate::error::RoundError;
use crate::hand::BLACKJACK;
use crate::player::Role;
use crate::result::{Finish, RoundResult};
use crate::strategy::{DealerPolicy, Decision, Strategy};
use crate::table::{Event, Table};

use super::{Game, GameState};

impl Game {
    /// Draws a card for `role`, aborting the round if the deck is empty.
    pub(super) fn draw(&mut self, role: Role) -> Result<Card, RoundError> {
        let (participant, deck) = match role {
            Role::Human => (&mut self.player, &mut self.deck),
            Role::Dealer => (&mut self.dealer, &mut self.deck),
        };

        match participant.hit(deck) {
            Ok(card) => Ok(card),
            Err(err) => Err(self.abort(err.into())),
        }
    }

    /// Plays `role`'s hand until it stands or reaches 21.
    ///
    /// The participant's role picks who decides: the dealer always follows
    /// [`DealerPolicy`], a human is asked through `human`. Every draw is
    /// reported and followed by the updated hand.
    pub(super) fn take_turn<S, T>(
        &mut self,
        role: Role,
        mut human: Option<&mut S>,
        table: &mut T,
    ) -> Result<(), RoundError>
    where
        S: Strategy + ?Sized,
        T: Table + ?Sized,
    {
        while self.participant(role).hand().value() < BLACKJACK {
            let participant = self.participant(role);
            let decided = match (participant.role(), &mut human) {
                (Role::Dealer, _) => DealerPolicy.decide(participant),
                (Role::Human, Some(strategy)) => strategy.decide(participant),
                (Role::Human, None) => Err(RoundError::InvalidState),
            };
            let decision = match decided {
                Ok(decision) => decision,
                Err(err) => return Err(self.abort(err)),
            };

            match decision {
                Decision::Hit => {
                    let card = self.draw(role)?;
                    let participant = self.participant(role);
                    table.show(&Event::Drew {
                        name: participant.name(),
                        card,
                    });
                    table.show(&Event::Hand {
                        player: participant,
                        hide_first: false,
                    });
                }
                Decision::Stand => {
                    let participant = match role {
                        Role::Human => &mut self.player,
                        Role::Dealer => &mut self.dealer,
                    };
                    let value = participant.stand();
                    table.show(&Event::Stood {
                        name: participant.name(),
                        value,
                    });
                    break;
                }
            }
        }

        Ok(())
    }

    /// Runs the player's turn.
    ///
    /// Shows the dealer's hand with the hole card face down and the player's
    /// hand, then lets `strategy` hit or stand while the hand is below 21.
    /// Returns the result if the player busts, or `None` once play passes
    /// to the dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn, the deck runs out,
    /// or `strategy` fails.
    pub fn player_turn<S, T>(
        &mut self,
        strategy: &mut S,
        table: &mut T,
    ) -> Result<Option<RoundResult>, RoundError>
    where
        S: Strategy + ?Sized,
        T: Table + ?Sized,
    {
        self.expect_state(GameState::PlayerTurn)?;

        table.show(&Event::Hand {
            player: &self.dealer,
            hide_first: true,
        });
        table.show(&Event::Hand {
            player: &self.player,
            hide_first: false,
        });
        table.show(&Event::PlayerTurn {
            name: self.player.name(),
        });

        self.take_turn(Role::Human, Some(strategy), table)?;

        if self.player.hand().is_bust() {
            table.show(&Event::Busted {
                name: self.player.name(),
                value: self.player.hand().value(),
            });
            return Ok(Some(self.finish(Finish::PlayerBust, table)));
        }

        self.state = GameState::DealerTurn;
        Ok(None)
    }
}
