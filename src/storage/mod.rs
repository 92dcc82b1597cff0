//! Storage module for persisting the quote collection
//!
//! This module handles backing up scraped quotes and restoring them later,
//! so a game can be played without crawling the site again.

mod csv_backup;
mod traits;

pub use csv_backup::{CsvBackup, HEADERS};
pub use traits::QuoteStore;
