//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests made against the quote site:
//! - Building the HTTP client with the configured user agent and timeout
//! - GET requests returning a `FetchResult` instead of raising
//! - Bounded retry with exponential backoff for transient failures
//! - Conversion of failures into `QuoteError::Fetch`

use crate::config::SiteConfig;
use crate::QuoteError;
use reqwest::Client;
use std::time::Duration;

/// Result of a fetch operation
#[derive(Debug)]
pub enum FetchResult {
    /// Successfully fetched the page
    Success {
        /// Final URL after redirects
        final_url: String,
        /// HTTP status code
        status_code: u16,
        /// Page body content
        body: String,
    },

    /// The server answered with a non-success status
    HttpError {
        /// The HTTP status code
        status_code: u16,
    },

    /// Network error (connection refused, timeout, etc.)
    NetworkError {
        /// Error description
        error: String,
        /// Whether trying again may succeed
        transient: bool,
    },
}

impl FetchResult {
    /// Returns true if the failure may go away on a later attempt
    ///
    /// Timeouts, connection failures and 5xx responses are transient.
    /// Everything else (including success) is not.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Success { .. } => false,
            Self::HttpError { status_code } => *status_code >= 500,
            Self::NetworkError { transient, .. } => *transient,
        }
    }

    /// Returns the page body, or a `QuoteError::Fetch` describing the failure
    pub fn into_body(self, url: &str) -> Result<String, QuoteError> {
        match self {
            Self::Success { body, .. } => Ok(body),
            Self::HttpError { status_code } => Err(QuoteError::Fetch {
                url: url.to_string(),
                reason: format!("HTTP {}", status_code),
            }),
            Self::NetworkError { error, .. } => Err(QuoteError::Fetch {
                url: url.to_string(),
                reason: error,
            }),
        }
    }
}

/// How often and how patiently transient failures are retried
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    /// Attempts after the first one
    pub max_retries: u32,
    /// Wait before the first retry; doubled for every further retry
    pub backoff: Duration,
}

impl RetryPolicy {
    pub fn from_config(config: &SiteConfig) -> Self {
        Self {
            max_retries: config.max_retries,
            backoff: config.retry_backoff(),
        }
    }

    /// Backoff to wait before retry number `attempt` (1-based)
    pub fn delay_for(&self, attempt: u32) -> Duration {
        let factor = 1u32.checked_shl(attempt.saturating_sub(1)).unwrap_or(u32::MAX);
        self.backoff.saturating_mul(factor)
    }
}

/// Builds an HTTP client with proper configuration
///
/// # Arguments
///
/// * `config` - The site configuration (user agent and timeout)
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
pub fn build_http_client(config: &SiteConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.user_agent.clone())
        .timeout(config.timeout())
        .connect_timeout(config.timeout().min(Duration::from_secs(10)))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a URL once
///
/// # Error Classification
///
/// | Condition | Result |
/// |-----------|--------|
/// | HTTP 2xx | Success |
/// | Other HTTP status | HttpError (transient when 5xx) |
/// | Timeout | NetworkError, transient |
/// | Connection refused | NetworkError, transient |
/// | Anything else | NetworkError, permanent |
pub async fn fetch_url(client: &Client, url: &str) -> FetchResult {
    match client.get(url).send().await {
        Ok(response) => {
            let status = response.status();
            let final_url = response.url().to_string();

            if !status.is_success() {
                return FetchResult::HttpError {
                    status_code: status.as_u16(),
                };
            }

            match response.text().await {
                Ok(body) => FetchResult::Success {
                    final_url,
                    status_code: status.as_u16(),
                    body,
                },
                Err(e) => FetchResult::NetworkError {
                    error: e.to_string(),
                    transient: e.is_timeout(),
                },
            }
        }
        Err(e) => {
            if e.is_timeout() {
                FetchResult::NetworkError {
                    error: "Request timeout".to_string(),
                    transient: true,
                }
            } else if e.is_connect() {
                FetchResult::NetworkError {
                    error: format!("Connection failed: {}", e),
                    transient: true,
                }
            } else {
                FetchResult::NetworkError {
                    error: e.to_string(),
                    transient: false,
                }
            }
        }
    }
}

/// Fetches a URL, retrying transient failures according to `policy`
///
/// Returns the result of the last attempt.
pub async fn fetch_with_retry(client: &Client, url: &str, policy: RetryPolicy) -> FetchResult {
    let mut attempt = 0;

    loop {
        let result = fetch_url(client, url).await;

        if !result.is_transient() || attempt >= policy.max_retries {
            return result;
        }

        attempt += 1;
        let delay = policy.delay_for(attempt);
        tracing::warn!(
            "Transient failure fetching {} ({:?}), retry {}/{} in {:?}",
            url,
            result,
            attempt,
            policy.max_retries,
            delay
        );
        tokio::time::sleep(delay).await;
    }
}
