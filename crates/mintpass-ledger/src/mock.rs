//! In-memory redemption contract for testing.
//!
//! `MockLedger` is the arbiter the real contract would be: it derives
//! the redemption hash from the submitted (code, uri) pair itself and
//! reverts the second submission for the same hash, regardless of what
//! any client-side probe said.

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use alloy_primitives::{keccak256, TxHash};
use async_trait::async_trait;
use mintpass_core::{derive_hash, RedeemCode, RedemptionHash, TokenUri};

use crate::contract::{RedemptionSubmitter, TxReceipt, UsedHashQuery};
use crate::error::{LedgerError, Result};

/// A submission the mock accepted, kept for test assertions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub code: String,
    pub uri: String,
    pub hash: RedemptionHash,
    pub tx_hash: TxHash,
}

/// In-memory contract state.
pub struct MockLedger {
    inner: Mutex<LedgerState>,
    reject_submit: Option<String>,
    fail_rpc: bool,
    lagging_probe: bool,
}

struct LedgerState {
    used: HashSet<RedemptionHash>,
    pending: HashMap<TxHash, u64>,
    submissions: Vec<Submission>,
    next_nonce: u64,
    next_block: u64,
}

impl MockLedger {
    /// An empty ledger: no hash has been redeemed.
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(LedgerState {
                used: HashSet::new(),
                pending: HashMap::new(),
                submissions: Vec::new(),
                next_nonce: 0,
                next_block: 1,
            }),
            reject_submit: None,
            fail_rpc: false,
            lagging_probe: false,
        }
    }

    /// Pre-seed a redeemed hash, as if a prior claim already landed.
    pub fn mark_used(self, hash: RedemptionHash) -> Self {
        self.inner.lock().unwrap().used.insert(hash);
        self
    }

    /// Reject every submission as if the wallet user declined to sign.
    pub fn rejecting(mut self, msg: &str) -> Self {
        self.reject_submit = Some(msg.to_string());
        self
    }

    /// Fail every call with an RPC error.
    pub fn rpc_down(mut self) -> Self {
        self.fail_rpc = true;
        self
    }

    /// Answer every duplicate probe with `false`, the way an RPC node
    /// lagging behind the chain head would. Submissions still revert.
    pub fn lagging_probe(mut self) -> Self {
        self.lagging_probe = true;
        self
    }

    /// Submissions the ledger accepted, in order.
    pub fn submissions(&self) -> Vec<Submission> {
        self.inner.lock().unwrap().submissions.clone()
    }

    /// How many submissions the ledger accepted.
    pub fn submission_count(&self) -> usize {
        self.inner.lock().unwrap().submissions.len()
    }

    fn tx_hash_for(nonce: u64, hash: &RedemptionHash) -> TxHash {
        let mut preimage = Vec::with_capacity(8 + 32);
        preimage.extend_from_slice(&nonce.to_be_bytes());
        preimage.extend_from_slice(hash.as_bytes());
        keccak256(&preimage)
    }
}

impl Default for MockLedger {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UsedHashQuery for MockLedger {
    async fn used_hashes(&self, hash: &RedemptionHash) -> Result<bool> {
        if self.fail_rpc {
            return Err(LedgerError::Rpc("rpc unavailable".to_string()));
        }
        if self.lagging_probe {
            return Ok(false);
        }
        Ok(self.inner.lock().unwrap().used.contains(hash))
    }
}

#[async_trait]
impl RedemptionSubmitter for MockLedger {
    async fn submit(&self, code: &RedeemCode, uri: &TokenUri) -> Result<TxHash> {
        if self.fail_rpc {
            return Err(LedgerError::Rpc("rpc unavailable".to_string()));
        }
        if let Some(msg) = &self.reject_submit {
            return Err(LedgerError::Rejected(msg.clone()));
        }

        let hash = derive_hash(code, uri);
        let mut state = self.inner.lock().unwrap();

        // The contract recomputes the hash and reverts a duplicate.
        if !state.used.insert(hash) {
            return Err(LedgerError::Reverted {
                reason: Some("hash already used".to_string()),
            });
        }

        let nonce = state.next_nonce;
        state.next_nonce += 1;
        let tx_hash = Self::tx_hash_for(nonce, &hash);

        let block = state.next_block;
        state.next_block += 1;
        state.pending.insert(tx_hash, block);

        state.submissions.push(Submission {
            code: code.as_str().to_string(),
            uri: uri.as_str().to_string(),
            hash,
            tx_hash,
        });
        Ok(tx_hash)
    }

    async fn await_confirmation(&self, tx: TxHash) -> Result<TxReceipt> {
        if self.fail_rpc {
            return Err(LedgerError::Rpc("rpc unavailable".to_string()));
        }
        let mut state = self.inner.lock().unwrap();
        match state.pending.remove(&tx) {
            Some(block_number) => Ok(TxReceipt {
                tx_hash: tx,
                block_number,
            }),
            None => Err(LedgerError::Rpc(format!("unknown transaction: {tx}"))),
        }
    }
}
