//! Frontier engine - concurrent breadth-first traversal
//!
//! The engine owns the work queue of (URI, depth) pairs, the set of URIs
//! already claimed for visiting, and the live-work counter that decides when
//! the crawl is over. Each dispatched item is processed by its own task:
//! fetch, extract, resolve, enqueue unseen children, record. The dispatch
//! loop keeps pulling until the counter reports that no outstanding task can
//! ever produce another item.

use crate::config::CrawlConfig;
use crate::crawler::counter::{LiveWork, WorkGuard};
use crate::crawler::extractor::{extract_links, extract_records, PageRecord};
use crate::crawler::fetcher::Fetch;
use crate::url::resolve_ref;
use scraper::Html;
use std::collections::HashSet;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc::{self, UnboundedSender};
use tokio::sync::Semaphore;
use tokio_util::sync::CancellationToken;

/// One unit of pending work: a page to visit and its distance from the seed.
#[derive(Debug)]
struct WorkItem {
    uri: String,
    depth: u32,
}

/// Consumer of per-page extraction results.
///
/// Invoked at most once per successfully fetched page, from the page's own
/// dispatch task, with no ordering guarantee between pages. Failures inside
/// the callback are the implementor's responsibility; they cannot take down
/// the crawl.
pub trait Record: Send + Sync {
    fn record(&self, page: PageRecord);
}

/// Breadth-first crawler over injected fetch/record capabilities.
///
/// The crawler itself is immutable during a crawl; the visited set, queue,
/// and counter are created fresh per [`crawl`](Crawler::crawl) call, so one
/// `Crawler` can safely run any number of consecutive crawls.
pub struct Crawler {
    config: Arc<CrawlConfig>,
    fetcher: Arc<dyn Fetch>,
    recorder: Option<Arc<dyn Record>>,
}

impl Crawler {
    pub fn new(config: CrawlConfig, fetcher: Arc<dyn Fetch>) -> Self {
        Self {
            config: Arc::new(config),
            fetcher,
            recorder: None,
        }
    }

    /// Installs a recorder for per-page extraction results.
    pub fn with_recorder(mut self, recorder: Arc<dyn Record>) -> Self {
        self.recorder = Some(recorder);
        self
    }

    /// Visits every page reachable from `seed` within the configured depth.
    ///
    /// Runs to completion; per-page failures are logged and yield zero
    /// children, never an early return.
    pub async fn crawl(&self, seed: &str) {
        self.crawl_with_cancel(seed, CancellationToken::new()).await
    }

    /// Like [`crawl`](Crawler::crawl), but stops dispatching new fetches once
    /// `cancel` fires. Already-running fetches finish and their discoveries
    /// are discarded, so the engine drains cleanly instead of aborting.
    pub async fn crawl_with_cancel(&self, seed: &str, cancel: CancellationToken) {
        // the seed resolved against itself is the canonical form every
        // discovered link will be compared to
        let seed_url = match resolve_ref(seed, seed, false) {
            Ok(url) => url,
            Err(e) => {
                tracing::error!("unusable seed {}: {}", seed, e);
                return;
            }
        };

        let (tx, mut rx) = mpsc::unbounded_channel();
        let visited = Arc::new(Mutex::new(HashSet::new()));
        let live = Arc::new(LiveWork::new(1));
        let limiter = (self.config.max_concurrent > 0)
            .then(|| Arc::new(Semaphore::new(self.config.max_concurrent)));

        // claim the seed before it is enqueued, like every later item
        visited.lock().unwrap().insert(seed_url.to_string());
        let _ = tx.send(WorkItem {
            uri: seed_url.to_string(),
            depth: 0,
        });

        loop {
            let item = tokio::select! {
                biased;
                _ = live.zero() => break,
                next = rx.recv() => match next {
                    Some(item) => item,
                    // unreachable while the engine holds a sender
                    None => break,
                },
            };

            if item.depth > self.config.depth || cancel.is_cancelled() {
                // discarded without fetching; the item yields no children
                live.decrement();
                continue;
            }

            self.dispatch(item, &tx, &visited, &live, limiter.clone());
        }

        tracing::debug!("no live work remains, crawl complete");
    }

    /// Spawns the processing task for one work item.
    fn dispatch(
        &self,
        item: WorkItem,
        tx: &UnboundedSender<WorkItem>,
        visited: &Arc<Mutex<HashSet<String>>>,
        live: &Arc<LiveWork>,
        limiter: Option<Arc<Semaphore>>,
    ) {
        let config = Arc::clone(&self.config);
        let fetcher = Arc::clone(&self.fetcher);
        let recorder = self.recorder.clone();
        let tx = tx.clone();
        let visited = Arc::clone(visited);
        let live = Arc::clone(live);

        tokio::spawn(async move {
            // declared first so it drops last, releasing the item's counter
            // obligation even if a collaborator panics
            let _guard = WorkGuard::adopt(Arc::clone(&live));

            let _permit = match limiter {
                Some(semaphore) => semaphore.acquire_owned().await.ok(),
                None => None,
            };

            tracing::info!("fetching {} @ depth {}", item.uri, item.depth);
            let body = match fetcher.fetch(&item.uri).await {
                Ok(body) => body,
                Err(e) => {
                    tracing::warn!("{}", e);
                    return;
                }
            };

            // Html is not Send, so parsing and extraction happen in one
            // synchronous block that never spans an await
            let (links, values) = {
                let doc = Html::parse_document(&body);
                let links = extract_links(&doc, &config.contains_tags);
                let values = recorder
                    .is_some()
                    .then(|| extract_records(&doc, &config.tags, &config.attr));
                (links, values)
            };

            for raw in links {
                match resolve_ref(&item.uri, &raw, config.same_host) {
                    Ok(resolved) => {
                        let uri = resolved.to_string();
                        // check-and-add under one lock: exactly one discovery
                        // of a URI may enqueue it
                        let fresh = visited.lock().unwrap().insert(uri.clone());
                        if fresh {
                            live.increment();
                            let _ = tx.send(WorkItem {
                                uri,
                                depth: item.depth + 1,
                            });
                        }
                    }
                    Err(reason) => {
                        tracing::debug!("dropping link {} on {}: {}", raw, item.uri, reason);
                    }
                }
            }

            if let (Some(recorder), Some(values)) = (recorder.as_ref(), values) {
                recorder.record(PageRecord {
                    uri: item.uri,
                    values,
                });
            }
        });
    }
}
