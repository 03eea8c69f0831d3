//! Crawler module for breadth-first page traversal
//!
//! This module contains the core crawling logic, including:
//! - The frontier engine and its live-work termination protocol
//! - The pluggable fetch capability with a reqwest-backed default
//! - Link and record extraction from fetched pages

mod coordinator;
mod counter;
mod extractor;
mod fetcher;

pub use coordinator::{Crawler, Record};
pub use extractor::{extract_links, extract_records, PageRecord};
pub use fetcher::{Fetch, HttpFetcher};

use crate::config::CrawlConfig;
use std::sync::Arc;

/// Runs a complete crawl from `seed`.
///
/// Convenience wrapper over [`Crawler`] for callers that do not need a
/// cancellation handle.
pub async fn crawl(
    seed: &str,
    config: CrawlConfig,
    fetcher: Arc<dyn Fetch>,
    recorder: Option<Arc<dyn Record>>,
) {
    let mut crawler = Crawler::new(config, fetcher);
    if let Some(recorder) = recorder {
        crawler = crawler.with_recorder(recorder);
    }
    crawler.crawl(seed).await
}
