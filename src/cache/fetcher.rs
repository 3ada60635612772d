//! Network fetch abstraction for the cache controller.
//!
//! The controller's state machine only needs "fetch this URL, give me a
//! status, content type, and body", so that seam is a trait: `reqwest` in
//! production, an in-memory fake in tests.

use async_trait::async_trait;

use crate::types::cache::FetchedResponse;
use crate::types::errors::CacheError;

/// Abstraction over network fetches for testability.
#[async_trait]
pub trait AssetFetcher: Send + Sync {
    /// Fetches `url` fresh from the network.
    ///
    /// A returned `FetchedResponse` may carry any status; `Err` means the
    /// network itself was unreachable.
    async fn fetch(&self, url: &str) -> Result<FetchedResponse, CacheError>;
}

/// Default fetcher backed by `reqwest`.
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AssetFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<FetchedResponse, CacheError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| CacheError::NetworkError(e.to_string()))?;

        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|s| s.to_string());
        let body = response
            .bytes()
            .await
            .map_err(|e| CacheError::NetworkError(e.to_string()))?
            .to_vec();

        Ok(FetchedResponse {
            url: url.to_string(),
            status,
            content_type,
            body,
        })
    }
}
