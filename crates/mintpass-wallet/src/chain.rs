//! Target network parameters.
//!
//! The reconciliation protocol is network-agnostic; the redemption flow
//! targets the Base Sepolia test network.

use std::fmt;

/// A numeric EVM chain identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChainId(u64);

impl ChainId {
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    pub const fn get(&self) -> u64 {
        self.0
    }

    /// The `0x`-prefixed hex form wallets expect in switch requests.
    pub fn to_hex(&self) -> String {
        format!("{:#x}", self.0)
    }
}

impl fmt::Display for ChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The native currency a chain denominates gas in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NativeCurrency {
    pub name: &'static str,
    pub symbol: &'static str,
    pub decimals: u8,
}

/// Everything a wallet needs to register and switch to a chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainParams {
    pub chain_id: ChainId,
    pub name: &'static str,
    pub rpc_url: &'static str,
    pub explorer_url: &'static str,
    pub currency: NativeCurrency,
}

/// The chain redemptions settle on.
pub const BASE_SEPOLIA: ChainParams = ChainParams {
    chain_id: ChainId::new(84532),
    name: "Base Sepolia",
    rpc_url: "https://sepolia.base.org",
    explorer_url: "https://sepolia.basescan.org",
    currency: NativeCurrency {
        name: "Sepolia Ether",
        symbol: "ETH",
        decimals: 18,
    },
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_sepolia_hex_id() {
        assert_eq!(BASE_SEPOLIA.chain_id.to_hex(), "0x14a34");
    }

    #[test]
    fn test_chain_id_display() {
        assert_eq!(format!("{}", ChainId::new(84532)), "84532");
    }
}
