//! Console front end for the guessing game
//!
//! Reads guesses line by line and prints quotes, hints and outcomes. Generic
//! over its input and output so whole sessions can be scripted.

use crate::config::GameConfig;
use crate::game::{AuthorInfoSource, GameSession, GameState, Outcome};
use crate::quote::Quote;
use crate::QuoteError;
use rand::Rng;
use std::io::{BufRead, Write};

/// Line-based console
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Gives back the output sink
    pub fn into_output(self) -> W {
        self.output
    }

    /// Reads one line without its line ending; `None` at end of input
    fn read_line(&mut self) -> Result<Option<String>, QuoteError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// Plays one session to its end and returns the final state
    ///
    /// The round opens on the session's empty starting guess, so the first
    /// typed wrong guess already earns a hint. Each hint is printed before
    /// the next prompt; a wrong guess with no budget left reveals the author
    /// and ends the round. End of input counts as an empty guess.
    pub async fn play_round<S: AuthorInfoSource + ?Sized>(
        &mut self,
        session: &mut GameSession,
        source: &S,
    ) -> Result<GameState, QuoteError> {
        writeln!(
            self.output,
            "\nHere is a random quote for you:\n        {}",
            session.quote().text
        )?;

        let opening = session.last_guess().to_string();
        let outcome = session.submit(&opening, source).await?;
        self.show(&outcome)?;

        while !session.is_over() {
            // Includes the guess about to be typed
            writeln!(
                self.output,
                "\nGuess who said the quote:\nGuesses remaining: {}",
                session.remaining() + 1
            )?;
            self.output.flush()?;

            let guess = self.read_line()?.unwrap_or_default();
            let outcome = session.submit(&guess, source).await?;
            self.show(&outcome)?;
        }

        Ok(session.state())
    }

    /// Asks whether to play again; only "y" and "yes" (any case) mean yes
    pub fn ask_play_again(&mut self) -> Result<bool, QuoteError> {
        write!(self.output, "Do you want to play again? (y/n) ")?;
        self.output.flush()?;

        let answer = self.read_line()?.unwrap_or_default();
        Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
    }

    /// Plays sessions until the player declines another one
    ///
    /// Returns the number of sessions played.
    pub async fn run<S, G>(
        &mut self,
        quotes: &[Quote],
        config: &GameConfig,
        source: &S,
        rng: &mut G,
    ) -> Result<usize, QuoteError>
    where
        S: AuthorInfoSource + ?Sized,
        G: Rng + ?Sized,
    {
        let mut played = 0;

        loop {
            let mut session = GameSession::start(quotes, config.guesses, rng)?;
            let state = self.play_round(&mut session, source).await?;
            played += 1;
            tracing::debug!("Session {} ended: {}", played, state);

            if !self.ask_play_again()? {
                break;
            }
        }

        writeln!(self.output, "Bye bye :)")?;
        self.output.flush()?;
        Ok(played)
    }

    fn show(&mut self, outcome: &Outcome) -> Result<(), QuoteError> {
        match outcome {
            Outcome::Correct { author } => {
                writeln!(self.output, "Correct!! The author was: {}", author)?
            }
            Outcome::Wrong {
                hint: Some(hint), ..
            } => writeln!(self.output, "{}", hint)?,
            Outcome::Wrong { hint: None, .. } => {}
            Outcome::Revealed { author } => writeln!(self.output, "The author was: {}", author)?,
        }
        Ok(())
    }
}
