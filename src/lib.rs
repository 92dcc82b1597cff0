//! Quote-Guesser: scrape a paginated quote site and play "guess the author"
//!
//! This crate walks the listing pages of a quotes site, extracts every quote
//! together with its author's biography link, keeps a CSV backup of the
//! collection, and runs a bounded-guess game that reveals progressively
//! stronger hints, fetching the author's birth details only when needed.

pub mod config;
pub mod console;
pub mod crawler;
pub mod game;
pub mod quote;
pub mod storage;

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for Quote-Guesser operations
#[derive(Debug, Error)]
pub enum QuoteError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Transport failure, timeout or non-success response
    #[error("Failed to fetch {url}: {reason}")]
    Fetch { url: String, reason: String },

    /// An element the page must contain was not found
    #[error("Unexpected page structure at {url}: {message}")]
    Parse { url: String, message: String },

    /// A quote block on a listing page is missing one of its parts
    #[error("Incomplete quote block at {url}: {message}")]
    Extraction { url: String, message: String },

    #[error("Backup file not found: {}", path.display())]
    StorageNotFound { path: PathBuf },

    /// A restored row is not a complete quote
    #[error("Invalid record at line {line} of {}: empty {field}", path.display())]
    InvalidRecord {
        path: PathBuf,
        line: usize,
        field: &'static str,
    },

    #[error("Backup format error: {0}")]
    Csv(#[from] csv::Error),

    #[error("HTTP client error: {0}")]
    Client(#[from] reqwest::Error),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] ::url::ParseError),

    #[error("Game error: {0}")]
    Game(#[from] GameError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Errors raised by the guessing game itself
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("No quotes available to play with")]
    EmptyCollection,

    #[error("The session is already over")]
    SessionOver,
}

/// Result type alias for Quote-Guesser operations
pub type Result<T> = std::result::Result<T, QuoteError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use crawler::QuoteSite;
pub use game::{GameSession, GameState, Hint, Outcome};
pub use quote::{AuthorInfo, Quote};
pub use storage::{CsvBackup, QuoteStore};
