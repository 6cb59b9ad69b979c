//! # Mintpass Ledger
//!
//! The contract surface redemptions consume.
//!
//! Two capabilities are split into two traits. [`UsedHashQuery`] is the
//! read-only duplicate probe any RPC endpoint can answer without a
//! wallet. [`RedemptionSubmitter`] is the write side, divided into
//! submit and confirm so the caller can surface the transaction hash
//! while the chain is still working.
//!
//! The contract, not the client, decides duplicates: it recomputes the
//! redemption hash from the submitted (code, uri) pair and reverts a
//! second redemption. [`MockLedger`] reproduces that arbitration for
//! tests.

pub mod contract;
pub mod error;
pub mod mock;

pub use contract::{RedemptionSubmitter, TxReceipt, UsedHashQuery};
pub use error::{LedgerError, Result};
pub use mock::{MockLedger, Submission};
