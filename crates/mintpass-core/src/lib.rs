//! # Mintpass Core
//!
//! Pure primitives for mintpass: typed identifiers, URI derivation, and
//! redemption hashing.
//!
//! This crate contains no I/O, no storage, no networking. It is pure
//! computation over the values a redemption session works with.
//!
//! ## Key Types
//!
//! - [`RedemptionRequest`] - The raw (code, id) pair from a scanned link
//! - [`TokenUri`] - Content-addressed metadata location for an item
//! - [`RedemptionHash`] - keccak-256 digest the contract spends codes under
//! - [`CollectionConfig`] - The active contract address and content prefix
//!
//! ## Hashing
//!
//! The contract recomputes the redemption hash from the same inputs, so
//! [`derive_hash`] reproduces Solidity's packed-string encoding exactly.

pub mod config;
pub mod error;
pub mod gateway;
pub mod hash;
pub mod request;
pub mod types;
pub mod uri;

pub use config::{CollectionConfig, Metadata};
pub use error::CoreError;
pub use gateway::{Gateway, DEFAULT_GATEWAY};
pub use hash::derive_hash;
pub use request::RedemptionRequest;
pub use types::{ContentCid, ItemId, RedeemCode, RedemptionHash};
pub use uri::{derive_uri, TokenUri};
