//! Quote-Guesser main entry point
//!
//! This is the command-line interface for the quote guessing game.

use anyhow::Context;
use clap::Parser;
use quote_guesser::config::{load_config_or_default, Config};
use quote_guesser::console::Console;
use quote_guesser::crawler::QuoteSite;
use quote_guesser::storage::{CsvBackup, QuoteStore};
use quote_guesser::Quote;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Quote-Guesser: guess who said it
///
/// Scrapes every quote from the quote site, backs them up to CSV and starts
/// a game of "guess the author" with hints drawn from author biographies.
#[derive(Parser, Debug)]
#[command(name = "quote-guesser")]
#[command(version)]
#[command(about = "Guess the author of a scraped quote", long_about = None)]
struct Cli {
    /// Path to an optional TOML configuration file
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Restore quotes from the backup file instead of scraping
    #[arg(long)]
    restore: bool,

    /// Backup file to write (or read with --restore)
    #[arg(long, value_name = "FILE")]
    backup: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    if let Err(e) = run(cli).await {
        tracing::error!("{:#}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
///
/// Logs go to stderr so they never interleave with the game on stdout.
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("quote_guesser=info,warn"),
            1 => EnvFilter::new("quote_guesser=debug,info"),
            2 => EnvFilter::new("quote_guesser=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = load_config_or_default(cli.config.as_deref())
        .context("loading configuration")?;
    if let Some(path) = cli.backup {
        config.backup.path = path;
    }

    let site = QuoteSite::new(config.site.clone()).context("setting up the site client")?;
    let backup = CsvBackup::new(config.backup.path.clone());

    let quotes = if cli.restore {
        backup.load().context("restoring quotes from backup")?
    } else {
        scrape_and_backup(&site, &backup, &config).await?
    };

    let stdin = std::io::stdin();
    let mut console = Console::new(stdin.lock(), std::io::stdout());
    let mut rng = rand::thread_rng();

    console
        .run(&quotes, &config.game, &site, &mut rng)
        .await
        .context("playing")?;

    Ok(())
}

/// Crawls the whole site and writes a fresh backup
async fn scrape_and_backup(
    site: &QuoteSite,
    backup: &CsvBackup,
    config: &Config,
) -> anyhow::Result<Vec<Quote>> {
    tracing::info!("Scraping quotes from {}", config.site.base_url);

    let crawl = site
        .crawl(config.crawler.single_pass)
        .await
        .context("scraping quotes")?;

    backup
        .save(&crawl.quotes)
        .with_context(|| format!("writing backup to {}", backup.path().display()))?;

    Ok(crawl.quotes)
}
