//! Quote site crawler
//!
//! `QuoteSite` drives every network operation against the remote site:
//! - Counting listing pages by following "next" links
//! - Re-walking a known number of pages to extract quotes
//! - A merged single traversal doing both at once
//! - Resolving an author's birth details on demand
//!
//! All requests are awaited one after another; nothing is fetched
//! concurrently and nothing is cached.

use crate::config::SiteConfig;
use crate::crawler::fetcher::{build_http_client, fetch_with_retry, RetryPolicy};
use crate::crawler::parser::{parse_author_page, parse_listing, parse_next_href};
use crate::game::AuthorInfoSource;
use crate::quote::{AuthorInfo, Quote};
use crate::QuoteError;
use async_trait::async_trait;
use reqwest::Client;
use std::collections::HashSet;
use url::Url;

/// Outcome of a complete crawl
#[derive(Debug, Clone, Default)]
pub struct Crawl {
    /// Number of listing pages visited
    pub pages: usize,

    /// Every quote, in page order then in-page order
    pub quotes: Vec<Quote>,
}

/// Client for one quote site
pub struct QuoteSite {
    config: SiteConfig,
    base_url: Url,
    client: Client,
    retry: RetryPolicy,
}

impl QuoteSite {
    /// Creates a new site client from its configuration
    ///
    /// # Returns
    ///
    /// * `Ok(QuoteSite)` - Ready to crawl
    /// * `Err(QuoteError)` - The base URL is invalid or the HTTP client failed to build
    pub fn new(config: SiteConfig) -> Result<Self, QuoteError> {
        let base_url = Url::parse(&config.base_url)?;
        let client = build_http_client(&config)?;
        let retry = RetryPolicy::from_config(&config);

        Ok(Self {
            config,
            base_url,
            client,
            retry,
        })
    }

    /// Absolute URL of a site-relative path
    pub fn url_for(&self, path: &str) -> Result<Url, QuoteError> {
        Ok(self.base_url.join(path)?)
    }

    /// Counts the listing pages
    ///
    /// Starts at the first listing page and follows the pager's "next" link
    /// until a page has none. Returns the number of pages visited (≥ 1).
    ///
    /// # Errors
    ///
    /// Any fetch or pager failure aborts the count; no partial count is returned.
    pub async fn count_pages(&self) -> Result<usize, QuoteError> {
        let mut page = self.config.first_page.clone();
        let mut count = 1;
        let mut visited = HashSet::new();

        loop {
            let url = self.url_for(&page)?;
            mark_visited(&mut visited, &url)?;
            let body = self.fetch(&url).await?;
            tracing::debug!("Counting page {}: {}", count, url);

            match parse_next_href(&body, url.as_str())? {
                Some(next) => {
                    page = next;
                    count += 1;
                }
                None => break,
            }
        }

        tracing::info!("Found {} listing pages", count);
        Ok(count)
    }

    /// Extracts the quotes of the first `page_count` listing pages
    ///
    /// The "next" link is resolved on every page except the last one, so the
    /// crawl never fetches past page `page_count`. A `page_count` of zero
    /// visits nothing and yields an empty collection.
    ///
    /// # Errors
    ///
    /// * `QuoteError::Fetch` - a page could not be fetched
    /// * `QuoteError::Extraction` - a quote block is incomplete
    /// * `QuoteError::Parse` - a non-final page has no usable "next" link
    pub async fn extract_quotes(&self, page_count: usize) -> Result<Vec<Quote>, QuoteError> {
        let mut quotes = Vec::new();
        let mut page = self.config.first_page.clone();

        for index in 0..page_count {
            let url = self.url_for(&page)?;
            let body = self.fetch(&url).await?;
            tracing::info!("Scraping page {}", url);

            let is_last = index + 1 == page_count;
            let listing = parse_listing(&body, url.as_str(), !is_last)?;
            quotes.extend(listing.quotes);

            if !is_last {
                page = listing.next_href.ok_or_else(|| QuoteError::Parse {
                    url: url.to_string(),
                    message: format!(
                        "expected {} pages but page {} has no next link",
                        page_count,
                        index + 1
                    ),
                })?;
            }
        }

        tracing::info!("Extracted {} quotes from {} pages", quotes.len(), page_count);
        Ok(quotes)
    }

    /// Counts pages first, then re-walks them to extract quotes
    pub async fn crawl_two_pass(&self) -> Result<Crawl, QuoteError> {
        let pages = self.count_pages().await?;
        let quotes = self.extract_quotes(pages).await?;
        Ok(Crawl { pages, quotes })
    }

    /// Extracts quotes while following "next" links, visiting each page once
    ///
    /// Produces the same quotes and page count as `crawl_two_pass` with half
    /// the requests.
    pub async fn crawl_single_pass(&self) -> Result<Crawl, QuoteError> {
        let mut crawl = Crawl::default();
        let mut page = Some(self.config.first_page.clone());
        let mut visited = HashSet::new();

        while let Some(path) = page {
            let url = self.url_for(&path)?;
            mark_visited(&mut visited, &url)?;
            let body = self.fetch(&url).await?;
            tracing::info!("Scraping page {}", url);

            let listing = parse_listing(&body, url.as_str(), true)?;
            crawl.pages += 1;
            crawl.quotes.extend(listing.quotes);
            page = listing.next_href;
        }

        tracing::info!(
            "Extracted {} quotes from {} pages",
            crawl.quotes.len(),
            crawl.pages
        );
        Ok(crawl)
    }

    /// Runs the configured crawl strategy
    pub async fn crawl(&self, single_pass: bool) -> Result<Crawl, QuoteError> {
        if single_pass {
            self.crawl_single_pass().await
        } else {
            self.crawl_two_pass().await
        }
    }

    /// Fetches an author page and extracts the birth date and place
    ///
    /// Every call performs a fresh request.
    pub async fn resolve_author_info(&self, author_href: &str) -> Result<AuthorInfo, QuoteError> {
        let url = self.url_for(author_href)?;
        let body = self.fetch(&url).await?;
        parse_author_page(&body, url.as_str())
    }

    /// Fetches a page body, then waits out the politeness delay
    async fn fetch(&self, url: &Url) -> Result<String, QuoteError> {
        tracing::debug!("GET {}", url);
        let result = fetch_with_retry(&self.client, url.as_str(), self.retry).await;

        let delay = self.config.request_delay();
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }

        result.into_body(url.as_str())
    }
}

/// Records a listing page, failing if the "next" chain has looped back to it
fn mark_visited(visited: &mut HashSet<Url>, url: &Url) -> Result<(), QuoteError> {
    if visited.insert(url.clone()) {
        return Ok(());
    }

    Err(QuoteError::Parse {
        url: url.to_string(),
        message: "\"next\" link points back to an already visited page".to_string(),
    })
}

#[async_trait]
impl AuthorInfoSource for QuoteSite {
    async fn author_info(&self, author_href: &str) -> Result<AuthorInfo, QuoteError> {
        self.resolve_author_info(author_href).await
    }
}
