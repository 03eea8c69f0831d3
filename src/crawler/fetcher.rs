//! Page fetching
//!
//! The engine talks to the network through the [`Fetch`] trait; anything that
//! can turn a URI into an HTML body will do. [`HttpFetcher`] is the default
//! implementation: a plain GET with a browser-like user-agent, certificate
//! verification disabled, and compressed transfer encodings enabled.

use crate::FetchError;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// Capability to fetch the page behind a URI.
///
/// Transport, headers, TLS policy, retries, and timeouts all belong to the
/// implementation; the engine only sees a body or a [`FetchError`].
#[async_trait]
pub trait Fetch: Send + Sync {
    async fn fetch(&self, uri: &str) -> Result<String, FetchError>;
}

/// Default reqwest-backed fetcher.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Builds the fetcher and its HTTP client.
    ///
    /// Certificate errors are deliberately ignored so that hosts with
    /// self-signed or expired certificates can still be walked.
    pub fn new() -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .user_agent("Mozilla/5.0")
            .danger_accept_invalid_certs(true)
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .gzip(true)
            .brotli(true)
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Fetch for HttpFetcher {
    async fn fetch(&self, uri: &str) -> Result<String, FetchError> {
        let response = self
            .client
            .get(uri)
            .send()
            .await
            .map_err(|source| FetchError::Request {
                url: uri.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: uri.to_string(),
                status: status.as_u16(),
            });
        }

        response.text().await.map_err(|source| FetchError::Body {
            url: uri.to_string(),
            source,
        })
    }
}
