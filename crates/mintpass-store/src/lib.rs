//! # Mintpass Store
//!
//! Persistence and HTTP surface for the active collection record.
//!
//! The store holds exactly one externally-owned record: the contract
//! address and content prefix of the collection currently being
//! redeemed. Absence is a valid state; writes replace the whole record
//! atomically.
//!
//! ## Implementations
//!
//! - [`FileStore`] - single JSON document, atomic overwrite (primary)
//! - [`MemoryStore`] - RwLock-backed, for tests
//!
//! ## HTTP
//!
//! [`http::router`] exposes `GET /current-collection` (open) and
//! `POST /import-collection` (single trusted origin). The
//! `collection-store` binary serves it.

pub mod error;
pub mod file;
pub mod http;
pub mod memory;
pub mod traits;

pub use error::{Result, StoreError};
pub use file::FileStore;
pub use memory::MemoryStore;
pub use traits::CollectionStore;
