//! Redemption hash derivation.
//!
//! The contract marks a (code, uri) pair as spent under
//! `keccak256(abi.encodePacked(code, uri))`. Packed encoding of two
//! strings is their tight UTF-8 concatenation with no length prefix or
//! padding, so the digest is reproduced here byte for byte.

use alloy_primitives::keccak256;

use crate::types::{RedeemCode, RedemptionHash};
use crate::uri::TokenUri;

/// Derive the redemption hash the contract uses for duplicate detection.
///
/// Pure and deterministic: the same (code, uri) pair always yields the
/// same hash.
pub fn derive_hash(code: &RedeemCode, uri: &TokenUri) -> RedemptionHash {
    let code_bytes = code.as_str().as_bytes();
    let uri_bytes = uri.as_str().as_bytes();

    let mut packed = Vec::with_capacity(code_bytes.len() + uri_bytes.len());
    packed.extend_from_slice(code_bytes);
    packed.extend_from_slice(uri_bytes);

    RedemptionHash::from(keccak256(&packed))
}
