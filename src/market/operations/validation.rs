// Marketplace Input Validation Helpers

use crate::crypto::Address;
use crate::market::error::{MarketError, MarketResult};

/// Validate an asset id (must be non-zero; 0 is the absent sentinel).
pub fn validate_asset_id(id: u64) -> MarketResult<()> {
    if id == 0 {
        return Err(MarketError::NotFound);
    }
    Ok(())
}

/// Validate a destination address (must be non-zero).
pub fn validate_recipient(recipient: &Address) -> MarketResult<()> {
    if recipient.is_zero() {
        return Err(MarketError::InvalidRecipient);
    }
    Ok(())
}
