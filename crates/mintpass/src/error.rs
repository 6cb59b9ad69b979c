//! Error types for the redemption flow.

use mintpass_core::CoreError;
use mintpass_ledger::LedgerError;
use mintpass_store::StoreError;
use mintpass_wallet::WalletError;
use thiserror::Error;

use crate::metadata::MetadataError;

/// Errors that can occur during a redemption session.
#[derive(Debug, Error)]
pub enum RedeemError {
    /// Validation error on the scanned inputs.
    #[error("validation error: {0}")]
    Core(#[from] CoreError),

    /// Collection store error.
    #[error("storage error: {0}")]
    Store(#[from] StoreError),

    /// Wallet error.
    #[error("wallet error: {0}")]
    Wallet(#[from] WalletError),

    /// Contract error.
    #[error("contract error: {0}")]
    Ledger(#[from] LedgerError),

    /// Metadata resolution error.
    #[error("metadata error: {0}")]
    Metadata(#[from] MetadataError),
}

impl RedeemError {
    /// The text shown to the user when a claim step fails.
    ///
    /// Wallet failures carry their own wording; contract failures prefer
    /// a revert reason over the generic fallback.
    pub fn user_message(&self) -> String {
        match self {
            RedeemError::Wallet(err) => err.to_string(),
            RedeemError::Ledger(err) => err.user_message(),
            other => other.to_string(),
        }
    }
}

/// Result type for redemption operations.
pub type Result<T> = std::result::Result<T, RedeemError>;
