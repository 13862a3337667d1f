// Registry Query Operations
// Read-only queries over registry state. No authentication required.

use crate::crypto::Address;
use crate::market::error::{MarketError, MarketResult};
use crate::market::types::Asset;

use super::validation::validate_asset_id;
use super::MarketStorage;

/// Get the full record of an asset.
///
/// # Returns
/// - `Ok(Asset)`: The asset record
/// - `Err(NotFound)`: id is 0 or was never assigned
pub fn get_asset_details<S: MarketStorage + ?Sized>(storage: &S, id: u64) -> MarketResult<Asset> {
    validate_asset_id(id)?;
    storage.get_asset(id).ok_or(MarketError::NotFound)
}

/// List every asset currently for sale, in ascending id order.
pub fn list_available<S: MarketStorage + ?Sized>(storage: &S) -> MarketResult<Vec<u64>> {
    let mut ids = Vec::new();
    for id in 1..=storage.asset_count() {
        if let Some(asset) = storage.get_asset(id) {
            if asset.for_sale {
                ids.push(id);
            }
        }
    }
    Ok(ids)
}

/// Resolve the current holder of an asset.
pub fn owner_of<S: MarketStorage + ?Sized>(storage: &S, id: u64) -> MarketResult<Address> {
    validate_asset_id(id)?;
    storage.get_owner(id).ok_or(MarketError::NotFound)
}
