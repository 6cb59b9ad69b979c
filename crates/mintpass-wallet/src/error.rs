//! Error types for the wallet module.

use thiserror::Error;

use crate::chain::ChainId;

/// Errors that can occur while reconciling a wallet onto a chain.
#[derive(Debug, Error)]
pub enum WalletError {
    /// The wallet has never seen this chain and cannot switch to it.
    #[error("wallet does not recognize chain {0}")]
    UnrecognizedChain(ChainId),

    /// The wallet (or its user) declined a switch request.
    #[error("chain switch rejected: {0}")]
    SwitchRejected(String),

    /// The wallet (or its user) declined to register the chain.
    #[error("chain add rejected: {0}")]
    AddRejected(String),

    /// Opaque failure from the wallet provider.
    #[error("provider error: {0}")]
    Provider(String),
}

/// Result type for wallet operations.
pub type Result<T> = std::result::Result<T, WalletError>;
