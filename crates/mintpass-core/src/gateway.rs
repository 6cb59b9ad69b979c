//! Gateway rewriting for content-addressed URLs.
//!
//! `ipfs://` URIs are not fetchable by a plain HTTP client; a gateway
//! serves the same content over HTTPS.

/// Default public gateway base.
pub const DEFAULT_GATEWAY: &str = "https://gateway.pinata.cloud/ipfs/";

/// Rewrites `ipfs://` URLs onto an HTTP(S) gateway base.
#[derive(Debug, Clone)]
pub struct Gateway {
    base: String,
}

impl Gateway {
    /// Use a custom gateway base. The base should end with a slash.
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    /// Rewrite a URL for HTTP fetching. Non-ipfs URLs pass through
    /// unchanged.
    pub fn rewrite(&self, url: &str) -> String {
        match url.strip_prefix("ipfs://") {
            Some(rest) => format!("{}{}", self.base, rest),
            None => url.to_string(),
        }
    }
}

impl Default for Gateway {
    fn default() -> Self {
        Self::new(DEFAULT_GATEWAY)
    }
}
