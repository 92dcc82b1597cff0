/// Game state definitions for a guessing session
use std::fmt;

/// Represents the current state of a guessing session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameState {
    // ===== Active State =====
    /// Waiting for a guess; carries the number of guesses left
    AwaitingGuess(u8),

    // ===== Terminal States =====
    /// The author was guessed
    Won,

    /// Guesses ran out and the author was revealed
    Revealed,
}

impl GameState {
    /// Returns true if the session is over
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::AwaitingGuess(_))
    }

    /// Guesses left, zero once the session is over
    pub fn remaining(&self) -> u8 {
        match self {
            Self::AwaitingGuess(remaining) => *remaining,
            Self::Won | Self::Revealed => 0,
        }
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AwaitingGuess(remaining) => write!(f, "awaiting guess ({} left)", remaining),
            Self::Won => write!(f, "won"),
            Self::Revealed => write!(f, "revealed"),
        }
    }
}
