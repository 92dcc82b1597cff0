//! CSV backup of the quote collection
//!
//! The file has a `text,author,author_href` header followed by one row per
//! quote. Quoting and escaping follow standard CSV rules. Rows with an empty
//! field are rejected on restore.

use crate::quote::Quote;
use crate::storage::QuoteStore;
use crate::QuoteError;
use std::fs::File;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Column names, in file order
pub const HEADERS: [&str; 3] = ["text", "author", "author_href"];

/// CSV file backend
#[derive(Debug, Clone)]
pub struct CsvBackup {
    path: PathBuf,
}

impl CsvBackup {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl QuoteStore for CsvBackup {
    fn save(&self, quotes: &[Quote]) -> Result<(), QuoteError> {
        let file = File::create(&self.path)?;
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);

        writer.write_record(HEADERS)?;
        for quote in quotes {
            writer.write_record([&quote.text, &quote.author, &quote.author_href])?;
        }
        writer.flush()?;

        tracing::info!("Backed up {} quotes to {}", quotes.len(), self.path.display());
        Ok(())
    }

    fn load(&self) -> Result<Vec<Quote>, QuoteError> {
        let file = File::open(&self.path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => QuoteError::StorageNotFound {
                path: self.path.clone(),
            },
            _ => QuoteError::Io(e),
        })?;

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(file);

        let mut quotes = Vec::new();
        for (index, row) in reader.deserialize::<Quote>().enumerate() {
            let quote = row?;
            if let Some(field) = quote.missing_field() {
                return Err(QuoteError::InvalidRecord {
                    path: self.path.clone(),
                    // Line 1 is the header
                    line: index + 2,
                    field,
                });
            }
            quotes.push(quote);
        }

        tracing::info!(
            "Restored {} quotes from {}",
            quotes.len(),
            self.path.display()
        );
        Ok(quotes)
    }
}
