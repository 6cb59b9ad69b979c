//! Wallet capability traits.
//!
//! Two tiers of wallet expose two different surfaces. A managed wallet's
//! provider owns connectivity and accepts a single switch instruction. An
//! injected wallet exposes the raw capability set the reconciliation
//! protocol drives.

use async_trait::async_trait;

use crate::chain::{ChainId, ChainParams};
use crate::error::Result;

/// The capability set of an externally-injected wallet.
///
/// Implementations must be thread-safe (Send + Sync).
#[async_trait]
pub trait ChainControl: Send + Sync {
    /// The chain the wallet is currently connected to.
    async fn current_chain(&self) -> Result<ChainId>;

    /// Ask the wallet to move to the given chain.
    ///
    /// Must report [`WalletError::UnrecognizedChain`] when the wallet has
    /// no registration for the chain; the caller decides whether to
    /// register it.
    ///
    /// [`WalletError::UnrecognizedChain`]: crate::error::WalletError::UnrecognizedChain
    async fn switch_chain(&self, chain: ChainId) -> Result<()>;

    /// Register a chain with the wallet: RPC endpoint, display name,
    /// native currency, and explorer URL.
    async fn add_chain(&self, params: &ChainParams) -> Result<()>;
}

/// A managed wallet's single switch instruction.
///
/// The provider owns connectivity; its answer is final and no
/// registration step exists.
#[async_trait]
pub trait ProviderSwitch: Send + Sync {
    async fn switch_chain(&self, chain: ChainId) -> Result<()>;
}

/// The one question the redemption flow asks of any wallet: put
/// yourself on this network.
#[async_trait]
pub trait NetworkReconciler: Send + Sync {
    async fn ensure_network(&self, target: &ChainParams) -> Result<()>;
}
