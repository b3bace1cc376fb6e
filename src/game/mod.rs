//! Round engine and state management.

use alloc::string::String;

use log::{info, warn};
use rand::Rng;

use crate::deck::Deck;
use crate::error::RoundError;
use crate::player::{Player, Role};
use crate::result::{Finish, RoundResult, determine_winner};
use crate::strategy::Strategy;
use crate::table::{Event, Table};

mod actions;
mod deal;
mod dealer;
pub mod state;

pub use state::GameState;

/// One round of blackjack between a named player and the dealer.
///
/// The game exclusively owns the deck; participants only borrow it for the
/// length of a single draw. Build a new `Game` for every round.
#[derive(Debug, Clone)]
pub struct Game {
    /// Cards left to deal.
    deck: Deck,
    /// The human participant.
    player: Player,
    /// The house.
    dealer: Player,
    /// Current round state.
    state: GameState,
}

impl Game {
    /// Creates a round for `player_name` with a deck shuffled from `seed`.
    ///
    /// # Example
    ///
    /// ```
    /// use bjcli::{Game, GameState};
    ///
    /// let game = Game::new("Ada", 42);
    /// assert_eq!(game.state(), GameState::Setup);
    /// assert_eq!(game.cards_remaining(), 52);
    /// ```
    #[must_use]
    pub fn new(player_name: impl Into<String>, seed: u64) -> Self {
        Self::with_deck(player_name, Deck::from_seed(seed))
    }

    /// Creates a round with a deck shuffled by `rng`.
    pub fn with_rng<R: Rng + ?Sized>(player_name: impl Into<String>, rng: &mut R) -> Self {
        Self::with_deck(player_name, Deck::new(rng))
    }

    /// Creates a round that deals from the given deck.
    #[must_use]
    pub fn with_deck(player_name: impl Into<String>, deck: Deck) -> Self {
        Self {
            deck,
            player: Player::new(player_name),
            dealer: Player::dealer(),
            state: GameState::Setup,
        }
    }

    /// Returns the current round state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the human participant.
    #[must_use]
    pub const fn player(&self) -> &Player {
        &self.player
    }

    /// Returns the dealer.
    #[must_use]
    pub const fn dealer(&self) -> &Player {
        &self.dealer
    }

    /// Returns the participant playing `role`.
    #[must_use]
    pub const fn participant(&self, role: Role) -> &Player {
        match role {
            Role::Human => &self.player,
            Role::Dealer => &self.dealer,
        }
    }

    /// Returns the number of cards remaining in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.remaining()
    }

    /// Returns the number of cards dealt this round.
    #[must_use]
    pub fn cards_dealt(&self) -> usize {
        self.deck.dealt()
    }

    /// Plays the whole round: initial deal, blackjack check, the player's
    /// turn driven by `strategy`, then the dealer's turn.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::DeckExhausted`] if the deck runs out and
    /// [`RoundError::InputClosed`] if `strategy` can no longer decide. Either
    /// leaves the game in [`GameState::Aborted`].
    /// Returns [`RoundError::InvalidState`] if the round was already started.
    pub fn play<S, T>(&mut self, strategy: &mut S, table: &mut T) -> Result<RoundResult, RoundError>
    where
        S: Strategy + ?Sized,
        T: Table + ?Sized,
    {
        if self.state != GameState::Setup {
            return Err(RoundError::InvalidState);
        }

        table.clear();
        self.deal_initial_cards(table)?;

        if let Some(result) = self.check_immediate_blackjack(table)? {
            return Ok(result);
        }

        if let Some(result) = self.player_turn(strategy, table)? {
            return Ok(result);
        }

        self.dealer_turn(table)
    }

    fn expect_state(&self, expected: GameState) -> Result<(), RoundError> {
        if self.state == expected {
            Ok(())
        } else {
            Err(RoundError::InvalidState)
        }
    }

    /// Marks the round as abandoned and hands the error back.
    fn abort(&mut self, err: RoundError) -> RoundError {
        warn!(
            "round for {} aborted in {:?}: {err}",
            self.player.name(),
            self.state
        );
        self.state = GameState::Aborted;
        err
    }

    /// Settles the round from the current hands and reports the result.
    fn finish<T: Table + ?Sized>(&mut self, finish: Finish, table: &mut T) -> RoundResult {
        let player_value = self.player.hand().value();
        let dealer_value = self.dealer.hand().value();

        let result = RoundResult {
            player_name: String::from(self.player.name()),
            outcome: determine_winner(player_value, dealer_value),
            finish,
            player_value,
            dealer_value,
        };

        self.state = GameState::RoundOver;
        info!(
            "round over: {:?} via {:?} ({player_value} vs {dealer_value})",
            result.outcome, result.finish
        );
        table.show(&Event::Result(&result));

        result
    }
}
