//! Linkwave: a breadth-first web crawler
//!
//! This crate implements a concurrent breadth-first crawler: starting from a
//! seed URI it discovers, filters, and visits linked pages up to a configured
//! depth, deduplicating visits along the way. Fetching and recording are
//! pluggable collaborators; the crate ships a reqwest-backed default fetcher.

pub mod config;
pub mod crawler;
pub mod url;

use thiserror::Error;

/// Configuration-specific errors. These are the only fatal errors in the
/// system: a crawl never starts with a config that fails to load.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unrecognized config format for {0} (expected .yml, .yaml, or .json)")]
    UnknownFormat(String),
}

/// Per-page fetch errors. Non-fatal: the offending page yields zero children
/// and the crawl continues.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP {status} from {url}")]
    Status { url: String, status: u16 },

    #[error("Failed to read body of {url}: {source}")]
    Body {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Page not found: {0}")]
    NotFound(String),
}

/// Reasons a candidate link is rejected during resolution. A rejection drops
/// the link; it is never propagated as a crawl-level error.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("Invalid reference: {0}")]
    InvalidReference(String),

    #[error("No hostname in resolved uri: {0}")]
    NoHostname(String),

    #[error("External hostname {host} (base is {base})")]
    CrossHost { host: String, base: String },
}

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for link resolution
pub type ResolveResult<T> = std::result::Result<T, ResolveError>;

// Re-export commonly used types
pub use config::{load_config, CrawlConfig};
pub use crawler::{crawl, Crawler, Fetch, HttpFetcher, PageRecord, Record};
pub use url::{normalize_url, resolve_ref};
