//! Proptest generators for property-based testing.

use alloy_primitives::Address;
use proptest::prelude::*;

use mintpass_core::{CollectionConfig, ContentCid, ItemId, RedeemCode, RedemptionHash};

/// Generate a valid item number (positive).
pub fn item_id() -> impl Strategy<Value = ItemId> {
    (1u64..=1_000_000u64).prop_map(|n| ItemId::parse(&n.to_string()).unwrap())
}

/// Generate a CID-shaped content identifier.
pub fn content_cid() -> impl Strategy<Value = ContentCid> {
    "[a-z2-7]{16,46}".prop_map(|s| ContentCid::new(format!("bafybei{s}")).unwrap())
}

/// Generate a non-blank redemption code.
pub fn redeem_code() -> impl Strategy<Value = RedeemCode> {
    "[A-Z0-9][A-Z0-9-]{3,23}".prop_map(|s| RedeemCode::parse(&s).unwrap())
}

/// Generate a contract address.
pub fn address() -> impl Strategy<Value = Address> {
    any::<[u8; 20]>().prop_map(Address::from)
}

/// Generate a full collection config.
pub fn collection_config() -> impl Strategy<Value = CollectionConfig> {
    (address(), content_cid()).prop_map(|(address, cid)| CollectionConfig { address, cid })
}

/// Generate a random redemption hash.
pub fn redemption_hash() -> impl Strategy<Value = RedemptionHash> {
    any::<[u8; 32]>().prop_map(RedemptionHash::from_bytes)
}
