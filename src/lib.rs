//! Single-player blackjack against an automated dealer.
//!
//! The crate provides a [`Game`] type that plays one round from a fresh
//! 52-card deck: the initial deal, the immediate blackjack check, the
//! player's turn, the dealer's turn and the showdown. Decisions come from a
//! [`Strategy`] and everything worth showing is reported to a [`Table`], so
//! the engine itself never touches a terminal. With the `std` feature the
//! [`console`] module supplies both for stdin/stdout.
//!
//! # Example
//!
//! ```
//! use bjcli::{Decision, Game, Scripted, Silent};
//!
//! let mut game = Game::new("Ada", 42);
//! let mut strategy = Scripted::new([Decision::Stand]);
//! let result = game.play(&mut strategy, &mut Silent).unwrap();
//! assert!(game.state().is_terminal());
//! let _ = result.outcome;
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
pub mod console;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod player;
pub mod result;
pub mod strategy;
pub mod table;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::{DealError, RoundError};
pub use game::{Game, GameState};
pub use hand::{BLACKJACK, Hand, HandDisplay};
pub use options::GameOptions;
pub use player::{DEALER_NAME, Player, Role};
pub use result::{Finish, Outcome, RoundResult, determine_winner};
pub use strategy::{DEALER_STANDS_ON, DealerPolicy, Decision, Scripted, Strategy};
pub use table::{Event, Silent, Table};
