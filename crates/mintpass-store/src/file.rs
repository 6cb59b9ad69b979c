//! File-backed implementation of the CollectionStore trait.
//!
//! The whole store is one JSON document. Imports replace it atomically:
//! the new document is written to a temp file in the same directory and
//! renamed over the old one, so a concurrent reader sees either the old
//! record or the new one.

use std::io::Write;
use std::path::PathBuf;

use async_trait::async_trait;
use mintpass_core::CollectionConfig;

use crate::error::{Result, StoreError};
use crate::traits::{validate, CollectionStore};

/// File-backed store holding a single collection record.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Create a store persisting to the given path. The file (and its
    /// parent directory) are created on first import.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The path of the stored document.
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

#[async_trait]
impl CollectionStore for FileStore {
    async fn current(&self) -> Result<Option<CollectionConfig>> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) => {
                let config = serde_json::from_slice(&bytes)
                    .map_err(|e| StoreError::Serialization(e.to_string()))?;
                Ok(Some(config))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn import(&self, config: &CollectionConfig) -> Result<()> {
        validate(config)?;

        let payload = serde_json::to_vec_pretty(config)
            .map_err(|e| StoreError::Serialization(e.to_string()))?;
        let path = self.path.clone();

        // tempfile is synchronous; keep the rename off the runtime threads.
        tokio::task::spawn_blocking(move || -> Result<()> {
            let dir = match path.parent() {
                Some(parent) if !parent.as_os_str().is_empty() => {
                    std::fs::create_dir_all(parent)?;
                    parent.to_path_buf()
                }
                _ => PathBuf::from("."),
            };

            let mut tmp = tempfile::NamedTempFile::new_in(&dir)?;
            tmp.write_all(&payload)?;
            tmp.persist(&path)
                .map_err(|e| StoreError::Persist(e.to_string()))?;
            Ok(())
        })
        .await
        .map_err(|e| StoreError::Persist(e.to_string()))?
    }
}
