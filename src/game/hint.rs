//! Hints earned by wrong guesses
//!
//! Which hint a wrong guess earns depends only on how many guesses were
//! left before it: 3 gives the author's birth details, 2 the initial of the
//! first name, 1 the initial of the last name. Other counts give nothing.

use crate::quote::AuthorInfo;
use std::fmt;

/// A hint shown after a wrong guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Hint {
    /// Birth date and place from the author's biography page
    BornOn(AuthorInfo),

    /// First letter of the author's first name
    FirstNameInitial(char),

    /// First letter of the author's last name
    LastNameInitial(char),
}

/// The hint tier a wrong guess falls into, keyed on guesses left before it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HintTier {
    None,
    BirthInfo,
    FirstName,
    LastName,
}

impl HintTier {
    pub fn for_remaining(remaining: u8) -> Self {
        match remaining {
            3 => Self::BirthInfo,
            2 => Self::FirstName,
            1 => Self::LastName,
            _ => Self::None,
        }
    }
}

/// First letter of the first whitespace-separated token of `author`
pub fn first_name_initial(author: &str) -> Option<char> {
    author.split_whitespace().next()?.chars().next()
}

/// First letter of the last whitespace-separated token of `author`
///
/// Single-word names use that word; for longer names the final token
/// counts as the last name.
pub fn last_name_initial(author: &str) -> Option<char> {
    author.split_whitespace().last()?.chars().next()
}

impl fmt::Display for Hint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BornOn(info) => write!(
                f,
                "Hint: The author was born on {} {}",
                info.date_of_birth, info.place_of_birth
            ),
            Self::FirstNameInitial(c) => write!(
                f,
                "Here's a hint: The first name of the author starts with {}",
                c
            ),
            Self::LastNameInitial(c) => write!(
                f,
                "Here's a hint: The last name of the author starts with {}",
                c
            ),
        }
    }
}
