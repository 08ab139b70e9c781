// SPDX-License-Identifier: MIT

//! Source retrieval.

use async_trait::async_trait;
use tracing::debug;

use crate::error::FetchError;

#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Retrieve the full body at `url`. Non-success HTTP statuses are
    /// errors, not bodies.
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError>;
}

/// Fetcher backed by a shared HTTP client.
#[derive(Clone, Default)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let http = |source| FetchError::Http { url: url.to_string(), source };
        let response = self.client.get(url).send().await.map_err(http)?;
        let response = response.error_for_status().map_err(http)?;
        let body = response.bytes().await.map_err(http)?;
        debug!(url, bytes = body.len(), "fetched source");
        Ok(body.to_vec())
    }
}

/// Canned-response fetcher for tests.
#[cfg(any(test, feature = "test-support"))]
#[derive(Clone, Default)]
pub struct FakeFetcher {
    responses: std::sync::Arc<parking_lot::Mutex<std::collections::HashMap<String, Vec<u8>>>>,
}

#[cfg(any(test, feature = "test-support"))]
impl FakeFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn serve(&self, url: &str, body: impl Into<Vec<u8>>) {
        self.responses.lock().insert(url.to_string(), body.into());
    }
}

#[cfg(any(test, feature = "test-support"))]
#[async_trait]
impl Fetcher for FakeFetcher {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        self.responses
            .lock()
            .get(url)
            .cloned()
            .ok_or_else(|| FetchError::Unavailable(format!("no canned response for {url}")))
    }
}
