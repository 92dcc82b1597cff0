//! Game module for "guess the author"
//!
//! # Components
//!
//! - `GameState`: where a session stands (awaiting a guess, won, revealed)
//! - `Hint`: what a wrong guess earns, and how author names are split
//! - `GameSession`: the state machine driving one round

mod hint;
mod session;
mod state;

// Re-export main types
pub use hint::{first_name_initial, last_name_initial, Hint, HintTier};
pub use session::{AuthorInfoSource, GameSession, Outcome, DEFAULT_GUESSES};
pub use state::GameState;
