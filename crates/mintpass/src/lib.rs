//! # Mintpass
//!
//! The unified API for redeeming physical collectibles as NFTs: a
//! scanned QR code carries a secret code and an item number, and this
//! crate walks that pair to a claimed token on chain.
//!
//! ## Overview
//!
//! - **Collection config**: one externally owned record naming the
//!   contract address and the content CID the token URIs hang off.
//! - **Session**: one user's walk from scanned link to claimed token,
//!   driven by a pure state machine.
//! - **Duplicate check**: advisory on the client, authoritative on the
//!   contract. The chain re-derives the redemption hash and reverts a
//!   second claim.
//! - **Wallet reconciliation**: the session asks one question of the
//!   wallet layer: put yourself on the target network.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use mintpass::{RedeemSession, SessionDeps, StartOutcome};
//! use mintpass::core::RedemptionRequest;
//! use mintpass::ledger::MockLedger;
//! use mintpass::metadata::StaticMetadataFetcher;
//! use mintpass::wallet::{InjectedWallet, MockChainControl, BASE_SEPOLIA};
//!
//! async fn example() {
//!     let ledger = Arc::new(MockLedger::new());
//!     let wallet = Arc::new(InjectedWallet::new(MockChainControl::on_chain(
//!         BASE_SEPOLIA.chain_id,
//!     )));
//!     let deps = SessionDeps {
//!         query: Arc::clone(&ledger),
//!         submitter: ledger,
//!         wallet: Some(wallet),
//!         fetcher: Arc::new(StaticMetadataFetcher::failing("offline")),
//!         target: BASE_SEPOLIA,
//!     };
//!
//!     let request = RedemptionRequest::new("SECRET-42", "3");
//!     let outcome = RedeemSession::start(request, None, deps);
//!     if let StartOutcome::Started(mut session) = outcome {
//!         session.refresh_redeemed().await;
//!         session.claim().await;
//!     }
//! }
//! ```
//!
//! ## Re-exports
//!
//! This crate re-exports the component crates for convenience:
//!
//! - `mintpass::core` - primitives (codes, ids, URIs, hashing, config)
//! - `mintpass::store` - the collection config store and its HTTP surface
//! - `mintpass::wallet` - network reconciliation
//! - `mintpass::ledger` - the contract surface

pub mod error;
pub mod metadata;
pub mod session;
pub mod state;

// Re-export component crates
pub use mintpass_core as core;
pub use mintpass_ledger as ledger;
pub use mintpass_store as store;
pub use mintpass_wallet as wallet;

// Re-export main types for convenience
pub use error::{RedeemError, Result};
pub use metadata::{HttpMetadataFetcher, MetadataError, MetadataFetcher};
pub use session::{HashProbe, RedeemSession, SessionDeps, StartOutcome};
pub use state::{transition, SessionEvent, SessionStatus};

// Re-export commonly used component types
pub use mintpass_core::{
    derive_hash, derive_uri, CollectionConfig, ContentCid, ItemId, Metadata, RedeemCode,
    RedemptionHash, RedemptionRequest, TokenUri,
};
pub use mintpass_wallet::BASE_SEPOLIA;
