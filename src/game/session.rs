//! Guessing session state machine
//!
//! A session picks one quote, then accepts guesses until the author is named
//! or the budget runs out:
//!
//! ```text
//! AwaitingGuess(n) --correct guess--> Won
//! AwaitingGuess(n) --wrong guess---> AwaitingGuess(n - 1)   (hint keyed on n)
//! AwaitingGuess(0) --------------->  Revealed
//! ```
//!
//! Author details are fetched through an [`AuthorInfoSource`] only when a
//! wrong guess earns the birth-details hint.

use crate::game::hint::{first_name_initial, last_name_initial, Hint, HintTier};
use crate::game::state::GameState;
use crate::quote::{AuthorInfo, Quote};
use crate::{GameError, QuoteError};
use async_trait::async_trait;
use rand::seq::SliceRandom;
use rand::Rng;

/// Guess budget of a standard session
pub const DEFAULT_GUESSES: u8 = 4;

/// Capability to look up an author's birth details
#[async_trait]
pub trait AuthorInfoSource: Send + Sync {
    /// Resolves the biography page at `author_href`
    async fn author_info(&self, author_href: &str) -> Result<AuthorInfo, QuoteError>;
}

/// What a guess led to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The guess named the author
    Correct { author: String },

    /// The guess was wrong; play continues with `remaining` guesses
    Wrong { hint: Option<Hint>, remaining: u8 },

    /// No guesses are left; the author is revealed
    Revealed { author: String },
}

/// One round of "guess the author"
#[derive(Debug, Clone)]
pub struct GameSession {
    quote: Quote,
    state: GameState,
    last_guess: String,
}

impl GameSession {
    /// Starts a session on a quote chosen uniformly at random
    ///
    /// # Errors
    ///
    /// * `GameError::EmptyCollection` - there is nothing to choose from
    pub fn start<R: Rng + ?Sized>(
        quotes: &[Quote],
        guesses: u8,
        rng: &mut R,
    ) -> Result<Self, GameError> {
        let quote = quotes.choose(rng).ok_or(GameError::EmptyCollection)?;
        tracing::debug!("Chose quote by {}", quote.author);
        Ok(Self::with_quote(quote.clone(), guesses))
    }

    /// Starts a session on a given quote
    pub fn with_quote(quote: Quote, guesses: u8) -> Self {
        Self {
            quote,
            state: GameState::AwaitingGuess(guesses),
            last_guess: String::new(),
        }
    }

    pub fn quote(&self) -> &Quote {
        &self.quote
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn remaining(&self) -> u8 {
        self.state.remaining()
    }

    pub fn last_guess(&self) -> &str {
        &self.last_guess
    }

    pub fn is_over(&self) -> bool {
        self.state.is_terminal()
    }

    /// Reveals the author if the budget is spent
    ///
    /// A front end that stops prompting at zero calls this instead of
    /// submitting another guess. Returns `None` while guesses remain or after
    /// the session has ended.
    pub fn check_exhausted(&mut self) -> Option<Outcome> {
        if self.state != GameState::AwaitingGuess(0) {
            return None;
        }

        self.state = GameState::Revealed;
        Some(Outcome::Revealed {
            author: self.quote.author.clone(),
        })
    }

    /// Applies one guess
    ///
    /// A correct guess (case-insensitive) wins. With no guesses left the
    /// author is revealed without consuming anything. Otherwise one guess is
    /// used up and a hint is earned according to the guesses left before it.
    ///
    /// # Errors
    ///
    /// * `QuoteError::Game` - the session is already over
    /// * Any error from `source` while resolving the birth-details hint; the
    ///   session is left unchanged in that case
    pub async fn submit<S: AuthorInfoSource + ?Sized>(
        &mut self,
        guess: &str,
        source: &S,
    ) -> Result<Outcome, QuoteError> {
        let remaining = match self.state {
            GameState::AwaitingGuess(remaining) => remaining,
            GameState::Won | GameState::Revealed => return Err(GameError::SessionOver.into()),
        };

        if self.quote.is_author(guess) {
            self.last_guess = guess.to_string();
            self.state = GameState::Won;
            return Ok(Outcome::Correct {
                author: self.quote.author.clone(),
            });
        }

        if let Some(outcome) = self.check_exhausted() {
            return Ok(outcome);
        }

        let hint = self.hint_for(remaining, source).await?;

        self.last_guess = guess.to_string();
        self.state = GameState::AwaitingGuess(remaining - 1);
        tracing::debug!("Wrong guess {:?}, {} left", guess, remaining - 1);

        Ok(Outcome::Wrong {
            hint,
            remaining: remaining - 1,
        })
    }

    /// The hint earned by a wrong guess made with `remaining` guesses left
    async fn hint_for<S: AuthorInfoSource + ?Sized>(
        &self,
        remaining: u8,
        source: &S,
    ) -> Result<Option<Hint>, QuoteError> {
        let hint = match HintTier::for_remaining(remaining) {
            HintTier::BirthInfo => Some(Hint::BornOn(
                source.author_info(&self.quote.author_href).await?,
            )),
            HintTier::FirstName => first_name_initial(&self.quote.author).map(Hint::FirstNameInitial),
            HintTier::LastName => last_name_initial(&self.quote.author).map(Hint::LastNameInitial),
            HintTier::None => None,
        };

        Ok(hint)
    }
}
