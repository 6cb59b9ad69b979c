//! Scanned-link parameters and their validation.

use crate::error::CoreError;
use crate::types::{ItemId, RedeemCode};

/// The raw query-parameter pair carried by a scanned link.
///
/// Both fields are trimmed at construction. A request with either field
/// blank is incomplete and the caller should abandon the flow rather
/// than report an error.
#[derive(Debug, Clone)]
pub struct RedemptionRequest {
    code: String,
    id: String,
}

impl RedemptionRequest {
    pub fn new(code: &str, id: &str) -> Self {
        Self {
            code: code.trim().to_string(),
            id: id.trim().to_string(),
        }
    }

    /// Both parameters present after trimming.
    pub fn is_complete(&self) -> bool {
        !self.code.is_empty() && !self.id.is_empty()
    }

    /// The redeem code, when present.
    pub fn code(&self) -> Option<RedeemCode> {
        RedeemCode::parse(&self.code)
    }

    /// The item id. Fails on absent, non-numeric, or non-positive input.
    pub fn item_id(&self) -> Result<ItemId, CoreError> {
        if self.id.is_empty() {
            return Err(CoreError::MissingParams);
        }
        ItemId::parse(&self.id)
    }

    /// The id parameter as scanned, for display.
    pub fn raw_id(&self) -> &str {
        &self.id
    }
}
