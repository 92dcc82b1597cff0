//! HTML parser for the quote site
//!
//! This module turns fetched page bodies into owned data:
//! - Quote blocks on a listing page (`.quote`)
//! - The "next page" link inside the pager (`.pager .next a`)
//! - Birth date and place on an author page
//!
//! Documents are parsed and dropped inside each function so that no
//! `scraper::Html` is ever held across an await point.

use crate::quote::{AuthorInfo, Quote};
use crate::QuoteError;
use scraper::{ElementRef, Html, Selector};

/// Extracted information from one listing page
#[derive(Debug, Clone, Default)]
pub struct ListingPage {
    /// Quotes in the order they appear on the page
    pub quotes: Vec<Quote>,

    /// Site-relative href of the next listing page, if any
    pub next_href: Option<String>,
}

/// Parses a listing page body
///
/// When `follow_next` is false the pager is not inspected at all, which is
/// how the last page of a known-length crawl is handled.
///
/// # Errors
///
/// * `QuoteError::Extraction` - a quote block lacks its text, author or link
/// * `QuoteError::Parse` - the pager is missing or its "next" control has no link
pub fn parse_listing(html: &str, url: &str, follow_next: bool) -> Result<ListingPage, QuoteError> {
    let document = Html::parse_document(html);

    let quotes = extract_quotes(&document, url)?;
    let next_href = if follow_next {
        next_page_href(&document, url)?
    } else {
        None
    };

    Ok(ListingPage { quotes, next_href })
}

/// Finds only the "next page" href of a listing page
pub fn parse_next_href(html: &str, url: &str) -> Result<Option<String>, QuoteError> {
    let document = Html::parse_document(html);
    next_page_href(&document, url)
}

/// Parses an author biography page into its birth details
pub fn parse_author_page(html: &str, url: &str) -> Result<AuthorInfo, QuoteError> {
    let document = Html::parse_document(html);

    let date_of_birth = required_text(&document, ".author-born-date", url)?;
    let place_of_birth = required_text(&document, ".author-born-location", url)?;

    Ok(AuthorInfo {
        date_of_birth,
        place_of_birth,
    })
}

/// Extracts every quote block of a listing page
fn extract_quotes(document: &Html, url: &str) -> Result<Vec<Quote>, QuoteError> {
    let quote_selector = selector(".quote", url)?;
    let text_selector = selector(".text", url)?;
    let author_selector = selector("[itemprop=\"author\"]", url)?;
    let link_selector = selector("a", url)?;

    let mut quotes = Vec::new();

    for (index, block) in document.select(&quote_selector).enumerate() {
        let incomplete = |what: &str| QuoteError::Extraction {
            url: url.to_string(),
            message: format!("quote #{} has no {}", index + 1, what),
        };

        let text = first_text(&block, &text_selector).ok_or_else(|| incomplete("text"))?;
        let author =
            first_text(&block, &author_selector).ok_or_else(|| incomplete("author"))?;
        let author_href = block
            .select(&link_selector)
            .next()
            .and_then(|link| link.value().attr("href"))
            .map(str::trim)
            .filter(|href| !href.is_empty())
            .ok_or_else(|| incomplete("author link"))?;

        tracing::debug!("Found quote by {} ({})", author, author_href);
        quotes.push(Quote::new(text, author, author_href));
    }

    Ok(quotes)
}

/// Looks up the pager's "next" control
///
/// A page without any pager is malformed; a pager without a "next" control
/// marks the last page.
fn next_page_href(document: &Html, url: &str) -> Result<Option<String>, QuoteError> {
    let pager_selector = selector(".pager", url)?;
    let next_selector = selector(".next", url)?;
    let link_selector = selector("a", url)?;

    let pager = document
        .select(&pager_selector)
        .next()
        .ok_or_else(|| QuoteError::Parse {
            url: url.to_string(),
            message: "page has no pager".to_string(),
        })?;

    let Some(next) = pager.select(&next_selector).next() else {
        return Ok(None);
    };

    next.select(&link_selector)
        .next()
        .and_then(|link| link.value().attr("href"))
        .map(|href| Some(href.trim().to_string()))
        .ok_or_else(|| QuoteError::Parse {
            url: url.to_string(),
            message: "\"next\" control has no link".to_string(),
        })
}

/// Text of the first element matching `css`, required to exist and be non-empty
fn required_text(document: &Html, css: &str, url: &str) -> Result<String, QuoteError> {
    let sel = selector(css, url)?;

    document
        .select(&sel)
        .next()
        .map(|element| element_text(&element))
        .filter(|text| !text.is_empty())
        .ok_or_else(|| QuoteError::Parse {
            url: url.to_string(),
            message: format!("missing {}", css),
        })
}

fn first_text(block: &ElementRef<'_>, sel: &Selector) -> Option<String> {
    block
        .select(sel)
        .next()
        .map(|element| element_text(&element))
        .filter(|text| !text.is_empty())
}

/// Concatenated text nodes with surrounding whitespace trimmed; inner text is kept as rendered
fn element_text(element: &ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

fn selector(css: &str, url: &str) -> Result<Selector, QuoteError> {
    Selector::parse(css).map_err(|e| QuoteError::Parse {
        url: url.to_string(),
        message: format!("invalid selector {}: {:?}", css, e),
    })
}
