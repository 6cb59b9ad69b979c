//! Error types for mintpass core primitives.

use thiserror::Error;

/// Core errors that can occur while interpreting scanned parameters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("code or id missing")]
    MissingParams,

    #[error("invalid item id: {0:?}")]
    InvalidItemId(String),

    #[error("content cid is blank")]
    EmptyCid,
}
