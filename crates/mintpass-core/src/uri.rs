//! Token URI derivation.
//!
//! A collection publishes its metadata tree under a content identifier;
//! item `n` resolves to `ipfs://{cid}/metadata/{n-1}.json`.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::types::{ContentCid, ItemId};

/// The content-addressed location of one item's metadata document.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenUri(String);

impl TokenUri {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[cfg(test)]
    pub(crate) fn from_raw(raw: &str) -> Self {
        Self(raw.to_string())
    }
}

impl fmt::Debug for TokenUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TokenUri({})", self.0)
    }
}

impl fmt::Display for TokenUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Derive the metadata URI for an item within a collection.
///
/// Printed items count from one; metadata files are zero-indexed.
pub fn derive_uri(item: ItemId, cid: &ContentCid) -> TokenUri {
    TokenUri(format!(
        "ipfs://{}/metadata/{}.json",
        cid.as_str(),
        item.index()
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_uri_shifts_index() {
        let cid = ContentCid::new("QmTest").unwrap();
        let uri = derive_uri(ItemId::parse("1").unwrap(), &cid);
        assert_eq!(uri.as_str(), "ipfs://QmTest/metadata/0.json");

        let uri = derive_uri(ItemId::parse("42").unwrap(), &cid);
        assert_eq!(uri.as_str(), "ipfs://QmTest/metadata/41.json");
    }

    #[test]
    fn test_derive_uri_deterministic() {
        let cid = ContentCid::new("QmTest").unwrap();
        let id = ItemId::parse("3").unwrap();
        assert_eq!(derive_uri(id, &cid), derive_uri(id, &cid));
    }
}
