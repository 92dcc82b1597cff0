//! Crawler module for the quote site
//!
//! This module contains all network-facing logic, including:
//! - HTTP fetching with timeout and bounded retry
//! - HTML parsing of listing and author pages
//! - Page counting, quote extraction and author resolution

mod fetcher;
mod parser;
mod site;

pub use fetcher::{build_http_client, fetch_url, fetch_with_retry, FetchResult, RetryPolicy};
pub use parser::{parse_author_page, parse_listing, parse_next_href, ListingPage};
pub use site::{Crawl, QuoteSite};
