//! Terminal front end: prompts on one side, table rendering on the other.
//!
//! [`Prompt`] reads the player's answers and implements [`Strategy`];
//! [`Screen`] renders round events and implements [`Table`]. Both are generic
//! over their streams so they can be driven from memory in tests.

use std::io::{self, BufRead, StdinLock, Stdout, Write};

use log::{debug, info, warn};

use crate::error::RoundError;
use crate::game::Game;
use crate::options::GameOptions;
use crate::player::Player;
use crate::strategy::{Decision, Strategy};
use crate::table::{Event, Table};

/// Asks for the player's name.
pub const NAME_PROMPT: &str = "Please enter your name (or type \"exit\" to quit): ";

/// Asks for a turn decision.
pub const DECISION_PROMPT: &str = "Would you like to hit or stand? ";

/// Shown after every round.
pub const PLAY_AGAIN_PROMPT: &str = "Press Enter to play again...";

/// Typing this at the name prompt ends the program.
pub const EXIT_COMMAND: &str = "exit";

const DIVIDER_WIDTH: usize = 43;

/// ANSI: erase display, cursor home.
const CLEAR_SEQUENCE: &str = "\u{1b}[2J\u{1b}[H";

/// Reads answers from the player.
#[derive(Debug)]
pub struct Prompt<R, W> {
    input: R,
    output: W,
}

impl Prompt<StdinLock<'static>, Stdout> {
    /// A prompt on the process's stdin and stdout.
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    /// Creates a prompt over the given streams.
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consumes the prompt, returning its streams.
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    /// Writes `text` and reads one line. `None` means the input has closed.
    fn ask(&mut self, text: &str) -> io::Result<Option<String>> {
        self.output.write_all(text.as_bytes())?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    /// Asks for the player's name.
    ///
    /// Returns `None` when the player types `exit` (any case) or input
    /// closes. Any other answer, a blank one included, is the name.
    ///
    /// # Errors
    ///
    /// Returns any I/O error from the underlying streams.
    pub fn ask_name(&mut self) -> io::Result<Option<String>> {
        let Some(line) = self.ask(NAME_PROMPT)? else {
            return Ok(None);
        };

        let name = line.trim();
        if name.eq_ignore_ascii_case(EXIT_COMMAND) {
            return Ok(None);
        }
        Ok(Some(name.to_owned()))
    }

    /// Waits for the player to press Enter. Returns `false` if input closed.
    ///
    /// # Errors
    ///
    /// Returns any I/O error from the underlying streams.
    pub fn wait_for_enter(&mut self) -> io::Result<bool> {
        let text = format!("\n{PLAY_AGAIN_PROMPT}\n");
        Ok(self.ask(&text)?.is_some())
    }
}

impl<R: BufRead, W: Write> Strategy for Prompt<R, W> {
    /// Asks until the answer is `hit` or `stand`.
    fn decide(&mut self, player: &Player) -> Result<Decision, RoundError> {
        loop {
            let line = match self.ask(DECISION_PROMPT) {
                Ok(Some(line)) => line,
                Ok(None) => return Err(RoundError::InputClosed),
                Err(err) => {
                    warn!("reading decision for {} failed: {err}", player.name());
                    return Err(RoundError::InputClosed);
                }
            };

            if let Some(decision) = Decision::parse(&line) {
                return Ok(decision);
            }

            if let Err(err) = writeln!(self.output) {
                warn!("failed to write to terminal: {err}");
            }
        }
    }
}

/// Renders round events as text.
#[derive(Debug)]
pub struct Screen<W> {
    output: W,
    clear_screen: bool,
}

impl Screen<Stdout> {
    /// A screen on the process's stdout.
    #[must_use]
    pub fn stdout(clear_screen: bool) -> Self {
        Self::new(io::stdout(), clear_screen)
    }
}

impl<W: Write> Screen<W> {
    /// Creates a screen over `output`.
    pub const fn new(output: W, clear_screen: bool) -> Self {
        Self {
            output,
            clear_screen,
        }
    }

    /// Consumes the screen, returning its stream.
    pub fn into_inner(self) -> W {
        self.output
    }

    /// Tells the player a round could not be finished.
    ///
    /// # Errors
    ///
    /// Returns any I/O error from the output stream.
    pub fn report_abort(&mut self, err: &RoundError) -> io::Result<()> {
        writeln!(self.output)?;
        self.dash_divider()?;
        writeln!(self.output, "Round abandoned: {err}")?;
        self.dash_divider()?;
        self.output.flush()
    }

    fn dash_divider(&mut self) -> io::Result<()> {
        writeln!(self.output, "{}", "-".repeat(DIVIDER_WIDTH))
    }

    fn heading(&mut self, title: &str) -> io::Result<()> {
        let stars = "*".repeat(DIVIDER_WIDTH);
        writeln!(self.output, "{stars}\n{title}\n{stars}\n")
    }

    /// Lists a hand with its total. A concealed hand reports only the value
    /// of its face-up cards, so the hole card cannot be worked out.
    fn hand(&mut self, player: &Player, hide_first: bool) -> io::Result<()> {
        let name = player.name();
        let hand = player.hand();

        self.dash_divider()?;
        writeln!(self.output, "{name} holds:")?;
        self.dash_divider()?;
        writeln!(self.output, "{}", hand.display(hide_first))?;
        self.dash_divider()?;
        if hide_first {
            writeln!(
                self.output,
                "{name}'s visible hand value is {}",
                hand.visible_value()
            )?;
        } else {
            writeln!(self.output, "{name}'s current hand value is {}", hand.value())?;
        }
        self.dash_divider()?;
        writeln!(self.output)
    }

    fn render(&mut self, event: &Event<'_>) -> io::Result<()> {
        match *event {
            Event::InitialDeal => self.heading("Initial Deal")?,
            Event::Hand { player, hide_first } => self.hand(player, hide_first)?,
            Event::PlayerTurn { name } => self.heading(&format!("{name}'s turn:"))?,
            Event::Drew { name, card } => {
                writeln!(self.output, "{name} hits and draws the {card}\n")?;
            }
            Event::Stood { name, value } => writeln!(self.output, "{name} Stands on {value}\n")?,
            Event::Busted { name, value } => writeln!(self.output, "{name} Busts on {value}\n")?,
            Event::DealerTurn => self.heading("Dealer's turn:")?,
            Event::Result(result) => {
                self.dash_divider()?;
                writeln!(self.output, "{}", result.message())?;
                self.dash_divider()?;
            }
        }
        self.output.flush()
    }
}

impl<W: Write> Table for Screen<W> {
    fn clear(&mut self) {
        if !self.clear_screen {
            return;
        }
        let cleared = self.output.write_all(CLEAR_SEQUENCE.as_bytes());
        if let Err(err) = cleared.and_then(|()| self.output.flush()) {
            warn!("failed to clear terminal: {err}");
        }
    }

    fn show(&mut self, event: &Event<'_>) {
        if let Err(err) = self.render(event) {
            warn!("failed to write to terminal: {err}");
        }
    }
}

/// Runs the session loop: ask a name, play a round, wait for Enter, repeat.
///
/// `new_game` builds each round from the player's name and the round's seed
/// (see [`GameOptions::round_seed`]). An abandoned round is reported and the
/// player is offered a new one; closed input ends the session. Returns the
/// number of rounds started.
///
/// # Errors
///
/// Returns any I/O error from the prompt or screen streams.
pub fn run<R, W, S, F>(
    prompt: &mut Prompt<R, W>,
    screen: &mut Screen<S>,
    options: &GameOptions,
    mut new_game: F,
) -> io::Result<u64>
where
    R: BufRead,
    W: Write,
    S: Write,
    F: FnMut(String, u64) -> Game,
{
    let mut rounds: u64 = 0;

    while let Some(name) = prompt.ask_name()? {
        let seed = options.round_seed(rounds);
        rounds += 1;
        debug!("round {rounds} for {name} with seed {seed}");

        let mut game = new_game(name, seed);
        match game.play(prompt, screen) {
            Ok(_) => {}
            Err(RoundError::InputClosed) => break,
            Err(err) => screen.report_abort(&err)?,
        }

        if !prompt.wait_for_enter()? {
            break;
        }
    }

    info!("session over after {rounds} round(s)");
    Ok(rounds)
}
