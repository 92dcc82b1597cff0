//! Storage traits
//!
//! This module defines the load/save contract every backup backend meets.

use crate::quote::Quote;
use crate::QuoteError;

/// Trait for quote collection backends
///
/// A store holds exactly one flat collection. Saving replaces whatever was
/// stored before; loading returns the records in the order they were saved.
pub trait QuoteStore {
    /// Replaces the stored collection with `quotes`
    fn save(&self, quotes: &[Quote]) -> Result<(), QuoteError>;

    /// Reads the stored collection back
    ///
    /// # Errors
    ///
    /// * `QuoteError::StorageNotFound` - nothing has been stored yet
    fn load(&self) -> Result<Vec<Quote>, QuoteError>;
}
