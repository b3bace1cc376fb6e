//! Terminal blackjack: one player against the dealer, a fresh deck per round.

use std::io;

use bjcli::console::{self, Prompt, Screen};
use bjcli::{Game, GameOptions};
use log::debug;

fn main() -> io::Result<()> {
    env_logger::init();

    let options = GameOptions::from_env();
    debug!("starting with {options:?}");

    let mut prompt = Prompt::stdio();
    let mut screen = Screen::stdout(options.clear_screen);
    console::run(&mut prompt, &mut screen, &options, |name, seed| {
        Game::new(name, seed)
    })?;

    Ok(())
}
