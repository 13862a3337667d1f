// Asset Creation Operation
// Mints a new unique asset record into the registry.

use log::debug;

use crate::market::error::MarketResult;
use crate::market::events::MarketEvent;
use crate::market::types::{Asset, AssetCategory};

use super::{check_admin, MarketStorage, RuntimeContext};

// ========================================
// Creation Parameters
// ========================================

/// Parameters for creating a single asset
#[derive(Clone, Debug)]
pub struct CreateAssetParams {
    /// Display name
    pub name: String,
    /// Display description
    pub description: String,
    /// Category
    pub category: AssetCategory,
    /// Price in the smallest currency unit
    pub price: u64,
    /// Off-chain metadata reference
    pub metadata_uri: String,
}

impl CreateAssetParams {
    /// Create new asset parameters
    pub fn new(name: impl Into<String>, category: AssetCategory, price: u64) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            category,
            price,
            metadata_uri: String::new(),
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the metadata reference
    pub fn with_metadata_uri(mut self, uri: impl Into<String>) -> Self {
        self.metadata_uri = uri.into();
        self
    }
}

// ========================================
// Create Operation
// ========================================

/// Create a new asset, listed for sale immediately.
///
/// Administrator only. Allocates the next sequential id, mints ownership
/// to the administrator and appends an `AssetCreated` audit event.
///
/// # Returns
/// - `Ok(u64)`: The new asset id
/// - `Err(MarketError)`: `Unauthorized` for non-admin callers
pub fn create_asset<S: MarketStorage + ?Sized>(
    storage: &mut S,
    ctx: &RuntimeContext,
    params: CreateAssetParams,
) -> MarketResult<u64> {
    // Step 1: Permission check
    check_admin(storage, &ctx.caller)?;

    // Step 2: Allocate id (strictly increasing, starts at 1)
    let id = storage.allocate_asset_id()?;

    // Step 3: Store the asset record, for sale from the start
    let asset = Asset {
        id,
        name: params.name.clone(),
        description: params.description,
        category: params.category,
        price: params.price,
        for_sale: true,
        metadata_uri: params.metadata_uri,
        created_at: ctx.block_height,
    };
    storage.set_asset(&asset)?;

    // Step 4: Mint ownership to the administrator
    let admin = storage.admin();
    storage.set_owner(id, &admin)?;

    // Step 5: Audit
    storage.append_event(MarketEvent::AssetCreated {
        id,
        name: params.name,
        category: params.category,
        price: params.price,
    })?;

    debug!(
        "asset {} created: category={} price={}",
        id, params.category, params.price
    );

    Ok(id)
}
