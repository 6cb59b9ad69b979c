//! In-memory implementation of the CollectionStore trait.
//!
//! This is primarily for testing. It has the same semantics as the file
//! store but keeps the record in memory with no persistence.

use std::sync::RwLock;

use async_trait::async_trait;
use mintpass_core::CollectionConfig;

use crate::error::Result;
use crate::traits::{validate, CollectionStore};

/// In-memory store implementation.
///
/// The record is lost when the store is dropped. Thread-safe via RwLock.
pub struct MemoryStore {
    inner: RwLock<Option<CollectionConfig>>,
}

impl MemoryStore {
    /// Create a new empty in-memory store.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(None),
        }
    }

    /// Create a store pre-loaded with a collection.
    pub fn with_config(config: CollectionConfig) -> Self {
        Self {
            inner: RwLock::new(Some(config)),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CollectionStore for MemoryStore {
    async fn current(&self) -> Result<Option<CollectionConfig>> {
        Ok(self.inner.read().unwrap().clone())
    }

    async fn import(&self, config: &CollectionConfig) -> Result<()> {
        validate(config)?;
        *self.inner.write().unwrap() = Some(config.clone());
        Ok(())
    }
}
