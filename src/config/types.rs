use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

/// Main configuration structure for Quote-Guesser
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub site: SiteConfig,
    pub crawler: CrawlerConfig,
    pub backup: BackupConfig,
    pub game: GameConfig,
}

/// Remote site and HTTP behaviour
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct SiteConfig {
    /// Root URL every site-relative path is joined onto
    ///
    /// Must be the bare site root (scheme, host and optional port); a path
    /// here would be replaced by the absolute page paths.
    pub base_url: String,

    /// Path of the first listing page
    pub first_page: String,

    /// Pause after every request (milliseconds)
    pub request_delay_ms: u64,

    /// Per-request timeout (seconds)
    pub timeout_secs: u64,

    /// Extra attempts for timeouts, connection failures and 5xx responses
    pub max_retries: u32,

    /// Backoff before the first retry, doubled for each further attempt (milliseconds)
    pub retry_backoff_ms: u64,

    pub user_agent: String,
}

impl SiteConfig {
    pub fn request_delay(&self) -> Duration {
        Duration::from_millis(self.request_delay_ms)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn retry_backoff(&self) -> Duration {
        Duration::from_millis(self.retry_backoff_ms)
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: "http://quotes.toscrape.com".to_string(),
            first_page: "/page/1/".to_string(),
            request_delay_ms: 0,
            timeout_secs: 30,
            max_retries: 0,
            retry_backoff_ms: 500,
            user_agent: format!("quote-guesser/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Crawl strategy
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct CrawlerConfig {
    /// Extract quotes while following "next" links instead of counting pages first
    pub single_pass: bool,
}

/// Backup file location
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BackupConfig {
    pub path: PathBuf,
}

impl Default for BackupConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("quotes_backup.csv"),
        }
    }
}

/// Game rules
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Guess budget per session
    pub guesses: u8,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            guesses: crate::game::DEFAULT_GUESSES,
        }
    }
}
