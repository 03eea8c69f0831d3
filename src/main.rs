//! Linkwave main entry point
//!
//! Command-line surface for the breadth-first crawler: a starting URI, an
//! optional YAML/JSON options document, and a verbosity ladder.

use anyhow::Context;
use clap::Parser;
use linkwave::config::{load_config, CrawlConfig};
use linkwave::crawler::{Crawler, HttpFetcher, PageRecord, Record};
use std::path::PathBuf;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::EnvFilter;

/// Linkwave: a breadth-first web crawler
#[derive(Parser, Debug)]
#[command(name = "linkwave")]
#[command(about = "A breadth-first web crawler", long_about = None)]
struct Cli {
    /// Starting URI for the crawl
    #[arg(value_name = "URI")]
    seed: String,

    /// Path to a YAML or JSON document of crawl options
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

/// Writes every recorded attribute value to stdout, one per line.
struct StdoutRecorder;

impl Record for StdoutRecorder {
    fn record(&self, page: PageRecord) {
        for value in page.values {
            println!("{}", value);
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose, cli.quiet);

    let config = match &cli.config {
        Some(path) => load_config(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => CrawlConfig::default(),
    };
    tracing::info!("max depth: {}", config.depth);
    tracing::info!("visit same hostname only: {}", config.same_host);

    let fetcher = Arc::new(HttpFetcher::new().context("building HTTP client")?);

    let record_enabled = !config.tags.is_empty();
    let mut crawler = Crawler::new(config, fetcher);
    if record_enabled {
        crawler = crawler.with_recorder(Arc::new(StdoutRecorder));
    }

    // Ctrl-C stops new dispatches and lets in-flight work drain
    let cancel = CancellationToken::new();
    let interrupt = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("interrupt received, draining in-flight work");
            interrupt.cancel();
        }
    });

    crawler.crawl_with_cancel(&cli.seed, cancel).await;

    Ok(())
}

/// Sets up the tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("linkwave=info,warn"),
            1 => EnvFilter::new("linkwave=debug,info"),
            2 => EnvFilter::new("linkwave=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
