//! Metadata resolution for a claimed token.
//!
//! The token URI is content-addressed; fetching goes through an HTTP
//! gateway. Resolution is strictly best-effort: a claim that confirmed
//! on chain stays claimed whether or not its metadata loads.

use async_trait::async_trait;
use mintpass_core::{Gateway, Metadata, TokenUri};
use thiserror::Error;

/// A metadata fetch that did not produce a record.
#[derive(Debug, Error)]
#[error("metadata fetch failed: {0}")]
pub struct MetadataError(pub String);

/// Resolves a token URI to its metadata record.
#[async_trait]
pub trait MetadataFetcher: Send + Sync {
    async fn fetch(&self, uri: &TokenUri) -> Result<Metadata, MetadataError>;
}

/// Fetcher backed by an HTTP gateway.
pub struct HttpMetadataFetcher {
    client: reqwest::Client,
    gateway: Gateway,
}

impl HttpMetadataFetcher {
    pub fn new(gateway: Gateway) -> Self {
        Self {
            client: reqwest::Client::new(),
            gateway,
        }
    }
}

impl Default for HttpMetadataFetcher {
    fn default() -> Self {
        Self::new(Gateway::default())
    }
}

#[async_trait]
impl MetadataFetcher for HttpMetadataFetcher {
    async fn fetch(&self, uri: &TokenUri) -> Result<Metadata, MetadataError> {
        let url = self.gateway.rewrite(uri.as_str());
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|err| MetadataError(err.to_string()))?
            .error_for_status()
            .map_err(|err| MetadataError(err.to_string()))?;
        response
            .json()
            .await
            .map_err(|err| MetadataError(err.to_string()))
    }
}

/// Fetcher returning a fixed outcome, for tests.
pub struct StaticMetadataFetcher {
    outcome: Result<Metadata, String>,
}

impl StaticMetadataFetcher {
    /// Always resolve to the given record.
    pub fn resolving(metadata: Metadata) -> Self {
        Self {
            outcome: Ok(metadata),
        }
    }

    /// Always fail with the given message.
    pub fn failing(msg: &str) -> Self {
        Self {
            outcome: Err(msg.to_string()),
        }
    }
}

#[async_trait]
impl MetadataFetcher for StaticMetadataFetcher {
    async fn fetch(&self, _uri: &TokenUri) -> Result<Metadata, MetadataError> {
        self.outcome.clone().map_err(MetadataError)
    }
}
