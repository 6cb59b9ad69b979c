//! CollectionStore trait: the abstract interface for the active collection.
//!
//! This trait keeps callers storage-agnostic. Implementations include a
//! file-backed store (primary) and an in-memory one (for tests).

use async_trait::async_trait;
use mintpass_core::CollectionConfig;

use crate::error::Result;

/// The CollectionStore trait: async interface for the single active
/// collection record.
///
/// # Design Notes
///
/// - **Absence is a state**: `current` returns `None` before the first
///   import; that is never an error.
/// - **Last write wins**: `import` replaces the whole record. There is no
///   merge, no history, and no read-modify-write protection.
#[async_trait]
pub trait CollectionStore: Send + Sync {
    /// Get the currently-active collection, if one has been imported.
    async fn current(&self) -> Result<Option<CollectionConfig>>;

    /// Replace the active collection.
    ///
    /// Rejects records with a blank content identifier. Persists
    /// atomically: readers observe either the old record or the new one,
    /// never a partial write.
    async fn import(&self, config: &CollectionConfig) -> Result<()>;
}

pub(crate) fn validate(config: &CollectionConfig) -> Result<()> {
    if config.cid.as_str().trim().is_empty() {
        return Err(crate::error::StoreError::Validation(
            "cid is blank".to_string(),
        ));
    }
    Ok(())
}
