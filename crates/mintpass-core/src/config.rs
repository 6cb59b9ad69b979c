//! Collection and metadata records as they travel over the wire.

use alloy_primitives::Address;
use serde::{Deserialize, Serialize};

use crate::gateway::Gateway;
use crate::types::ContentCid;

/// The currently-active collection: a deployed contract plus the
/// content identifier its metadata tree is published under.
///
/// Singleton and externally owned; a redemption session reads it once
/// and treats it as immutable for its lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionConfig {
    pub address: Address,
    pub cid: ContentCid,
}

/// The human-readable record behind a token URI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    pub name: String,
    pub description: String,
    pub image: String,
}

impl Metadata {
    /// The image URL rewritten for HTTP display.
    pub fn image_url(&self, gateway: &Gateway) -> String {
        gateway.rewrite(&self.image)
    }
}
