//! Test fixtures and helpers.
//!
//! Common setup code for integration tests.

use alloy_primitives::Address;
use mintpass_core::{
    derive_hash, derive_uri, CollectionConfig, ContentCid, ItemId, Metadata, RedeemCode,
    RedemptionHash, RedemptionRequest, TokenUri,
};

/// A test fixture: one collection and one scanned (code, id) pair.
pub struct RedemptionFixture {
    pub config: CollectionConfig,
    pub code: RedeemCode,
    pub item: ItemId,
}

impl RedemptionFixture {
    /// A fixture with deterministic sample values.
    pub fn new() -> Self {
        Self::with_item(3)
    }

    /// A fixture redeeming the given item number.
    pub fn with_item(item: u64) -> Self {
        Self {
            config: sample_config(),
            code: RedeemCode::parse("SECRET-42").unwrap(),
            item: ItemId::parse(&item.to_string()).unwrap(),
        }
    }

    /// The scanned request carrying this fixture's inputs.
    pub fn request(&self) -> RedemptionRequest {
        RedemptionRequest::new(self.code.as_str(), &self.item.get().to_string())
    }

    /// The token URI the session should derive.
    pub fn uri(&self) -> TokenUri {
        derive_uri(self.item, &self.config.cid)
    }

    /// The redemption hash the session should derive.
    pub fn hash(&self) -> RedemptionHash {
        derive_hash(&self.code, &self.uri())
    }
}

impl Default for RedemptionFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// A deterministic collection config.
pub fn sample_config() -> CollectionConfig {
    CollectionConfig {
        address: Address::repeat_byte(0x42),
        cid: ContentCid::new("bafybeigdyrzt5hjvyfwp2mf6kanxj6r5lqvxy").unwrap(),
    }
}

/// A second config whose derived values differ from [`sample_config`].
pub fn other_config() -> CollectionConfig {
    CollectionConfig {
        address: Address::repeat_byte(0x99),
        cid: ContentCid::new("bafyother7xlcqnhmstz").unwrap(),
    }
}

/// A metadata record like the ones served next to a collection.
pub fn sample_metadata() -> Metadata {
    Metadata {
        name: "Mintpass #3".to_string(),
        description: "A redeemed collectible".to_string(),
        image: "ipfs://bafyimage/3.png".to_string(),
    }
}
