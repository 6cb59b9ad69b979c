//! Strong type definitions for mintpass.
//!
//! All identifiers are newtypes to prevent misuse at compile time.

use alloy_primitives::B256;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::CoreError;

/// A 32-byte redemption hash, computed as keccak256 over the packed
/// concatenation of a redeem code and a token URI.
///
/// The deployed contract derives the same digest from the same pair, so
/// two identical (code, uri) pairs always map to the same hash on both
/// sides of the wire.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RedemptionHash(pub [u8; 32]);

impl RedemptionHash {
    /// Create a new RedemptionHash from raw bytes.
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Get the raw bytes.
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Convert to hex string.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Parse from hex string.
    pub fn from_hex(s: &str) -> Result<Self, hex::FromHexError> {
        let bytes = hex::decode(s)?;
        if bytes.len() != 32 {
            return Err(hex::FromHexError::InvalidStringLength);
        }
        let mut arr = [0u8; 32];
        arr.copy_from_slice(&bytes);
        Ok(Self(arr))
    }

    /// View as the fixed-size word the contract ABI expects.
    pub fn to_b256(&self) -> B256 {
        B256::from(self.0)
    }
}

impl fmt::Debug for RedemptionHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RedemptionHash({})", &self.to_hex()[..16])
    }
}

impl fmt::Display for RedemptionHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &self.to_hex()[..16])
    }
}

impl AsRef<[u8]> for RedemptionHash {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<B256> for RedemptionHash {
    fn from(word: B256) -> Self {
        Self(word.0)
    }
}

/// A one-time redeem code printed on a physical item.
///
/// Always non-blank; surrounding whitespace is stripped at parse time.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RedeemCode(String);

impl RedeemCode {
    /// Parse from raw query text. Returns `None` when nothing remains
    /// after trimming; absence is not an error.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for RedeemCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Codes are secrets until redeemed; show length only.
        write!(f, "RedeemCode(len={})", self.0.len())
    }
}

/// A positive item number printed next to the redeem code.
///
/// Token URIs are derived from `value - 1` (metadata files are
/// zero-indexed while printed items count from one).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(u64);

impl ItemId {
    /// Parse from a decimal string. Rejects non-numeric input and zero.
    pub fn parse(raw: &str) -> Result<Self, CoreError> {
        let trimmed = raw.trim();
        let n: u64 = trimmed
            .parse()
            .map_err(|_| CoreError::InvalidItemId(trimmed.to_string()))?;
        if n == 0 {
            return Err(CoreError::InvalidItemId(trimmed.to_string()));
        }
        Ok(Self(n))
    }

    /// The printed one-based number.
    pub const fn get(&self) -> u64 {
        self.0
    }

    /// The zero-based metadata index.
    pub const fn index(&self) -> u64 {
        self.0 - 1
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A content identifier prefix under which a collection's metadata
/// tree is published.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentCid(String);

impl ContentCid {
    /// Create from raw text. Rejects blank input.
    pub fn new(raw: impl Into<String>) -> Result<Self, CoreError> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(CoreError::EmptyCid);
        }
        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ContentCid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ContentCid({})", self.0)
    }
}

impl fmt::Display for ContentCid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
