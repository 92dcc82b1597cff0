//! Configuration module for Quote-Guesser
//!
//! This module handles loading, parsing, and validating the optional TOML
//! configuration file. Every key has a default, so running without a file
//! behaves exactly like `Config::default()`.
//!
//! # Example
//!
//! ```no_run
//! use quote_guesser::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("quotes.toml")).unwrap();
//! println!("Scraping from: {}", config.site.base_url);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{BackupConfig, Config, CrawlerConfig, GameConfig, SiteConfig};

// Re-export parser functions
pub use parser::{load_config, load_config_or_default};
