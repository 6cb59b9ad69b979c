//! Error types for the ledger module.

use thiserror::Error;

/// Errors that can occur while talking to the redemption contract.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// The contract reverted, possibly with a reason string.
    #[error("transaction reverted{}", .reason.as_deref().map(|r| format!(": {r}")).unwrap_or_default())]
    Reverted { reason: Option<String> },

    /// The wallet (or its user) declined to sign the transaction.
    #[error("transaction rejected: {0}")]
    Rejected(String),

    /// RPC-level failure.
    #[error("rpc error: {0}")]
    Rpc(String),
}

impl LedgerError {
    /// The text shown to the user when a claim fails. A contract revert
    /// reason is the most specific thing available; everything else gets
    /// the generic fallback.
    pub fn user_message(&self) -> String {
        match self {
            LedgerError::Reverted {
                reason: Some(reason),
            } => reason.clone(),
            _ => "Transaction failed".to_string(),
        }
    }
}

/// Result type for ledger operations.
pub type Result<T> = std::result::Result<T, LedgerError>;
