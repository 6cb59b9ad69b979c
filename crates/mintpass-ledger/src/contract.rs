//! The redemption contract surface, as consumed.
//!
//! Only two entry points exist: `usedHashes(bytes32) view` for the
//! duplicate probe and `redeemWithCode(string,string) payable` for the
//! claim. The contract recomputes the redemption hash from the same
//! (code, uri) pair and reverts a second redemption; it is the final
//! arbiter, and any client-side duplicate check is advisory.

use alloy_primitives::TxHash;
use async_trait::async_trait;
use mintpass_core::{RedeemCode, RedemptionHash, TokenUri};

use crate::error::Result;

/// A confirmed transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TxReceipt {
    pub tx_hash: TxHash,
    pub block_number: u64,
}

/// Read-only duplicate probe.
///
/// Needs no wallet: any RPC endpoint can answer it.
#[async_trait]
pub trait UsedHashQuery: Send + Sync {
    /// Whether the hash has already been redeemed on chain.
    async fn used_hashes(&self, hash: &RedemptionHash) -> Result<bool>;
}

/// Write side of the contract, split into submit and confirm so the
/// caller can surface the transaction hash while the chain is still
/// working.
#[async_trait]
pub trait RedemptionSubmitter: Send + Sync {
    /// Submit `redeemWithCode(code, uri)`. The call is payable on chain
    /// and reverts when the derived hash is already used.
    async fn submit(&self, code: &RedeemCode, uri: &TokenUri) -> Result<TxHash>;

    /// Wait for a submitted transaction to confirm.
    async fn await_confirmation(&self, tx: TxHash) -> Result<TxReceipt>;
}
