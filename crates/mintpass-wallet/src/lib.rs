//! # Mintpass Wallet
//!
//! Network reconciliation: getting the user's wallet onto the chain the
//! redemption contract lives on.
//!
//! Two wallet tiers exist. A managed wallet's provider owns connectivity
//! and takes one switch instruction ([`ProviderSwitch`]). An injected
//! wallet exposes a raw capability set ([`ChainControl`]) driven by the
//! [`reconcile`] protocol: switch, and when the chain is unrecognized,
//! register it and retry the switch exactly once.
//!
//! Both tiers sit behind [`NetworkReconciler`], the one question the
//! redemption flow asks: put yourself on this network.

pub mod chain;
pub mod control;
pub mod error;
pub mod mock;
pub mod reconcile;
pub mod session;

pub use chain::{ChainId, ChainParams, NativeCurrency, BASE_SEPOLIA};
pub use control::{ChainControl, NetworkReconciler, ProviderSwitch};
pub use error::{Result, WalletError};
pub use mock::{MockChainControl, MockProvider};
pub use reconcile::reconcile;
pub use session::{InjectedWallet, ManagedWallet, WalletSession};
