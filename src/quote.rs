//! Quote records scraped from the listing pages

use serde::{Deserialize, Serialize};

/// One scraped quotation
///
/// The three fields are always present together. `author_href` is the
/// site-relative path of the author's biography page (e.g. `/author/Mark-Twain`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    pub text: String,
    pub author: String,
    pub author_href: String,
}

impl Quote {
    pub fn new(
        text: impl Into<String>,
        author: impl Into<String>,
        author_href: impl Into<String>,
    ) -> Self {
        Self {
            text: text.into(),
            author: author.into(),
            author_href: author_href.into(),
        }
    }

    /// Name of the first empty field, if any
    pub fn missing_field(&self) -> Option<&'static str> {
        [
            ("text", &self.text),
            ("author", &self.author),
            ("author_href", &self.author_href),
        ]
        .into_iter()
        .find(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
    }

    /// Case-insensitive comparison of a guess against the author name
    pub fn is_author(&self, guess: &str) -> bool {
        guess.to_lowercase() == self.author.to_lowercase()
    }
}

/// Birth details taken from an author's biography page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorInfo {
    pub date_of_birth: String,
    pub place_of_birth: String,
}
