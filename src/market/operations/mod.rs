// Marketplace Operations Module
// This module contains the core business logic for the registry and the
// exchange engine.
//
// The operations are designed to be runtime-agnostic:
// - Storage operations are abstracted via the MarketStorage trait
// - Funds forwarding goes through the PaymentGateway port
// - Caller identity and logical time are passed as parameters
// - This allows testing and reuse across different runtime environments

mod create;
mod purchase;
mod query;
mod recipient;
mod sweep;
mod validation;

pub use create::*;
pub use purchase::*;
pub use query::*;
pub use recipient::*;
pub use sweep::*;
pub use validation::*;

use crate::crypto::Address;
use crate::market::error::{MarketError, MarketResult};
use crate::market::events::MarketEvent;
use crate::market::types::Asset;

// ========================================
// Storage Trait (for dependency injection)
// ========================================

/// Abstract storage interface for marketplace operations.
/// Runtime implementations provide concrete storage backends.
pub trait MarketStorage {
    /// The administrator address, fixed at storage construction.
    fn admin(&self) -> Address;

    // Asset operations
    fn get_asset(&self, id: u64) -> Option<Asset>;
    fn set_asset(&mut self, asset: &Asset) -> MarketResult<()>;
    fn asset_exists(&self, id: u64) -> bool {
        self.get_asset(id).is_some()
    }

    /// Highest assigned asset id (0 before the first creation).
    fn asset_count(&self) -> u64;

    /// Allocate the next asset id (1, 2, 3, ...), advancing the counter.
    fn allocate_asset_id(&mut self) -> MarketResult<u64>;

    // Ownership relation
    fn get_owner(&self, id: u64) -> Option<Address>;
    fn set_owner(&mut self, id: u64, owner: &Address) -> MarketResult<()>;

    // Payout recipient slot (absent until configured, never unset after)
    fn payout_recipient(&self) -> Option<Address>;
    fn set_payout_recipient(&mut self, recipient: &Address) -> MarketResult<()>;

    // Stray balance held by the engine outside the purchase flow
    fn stray_balance(&self) -> u64;
    fn set_stray_balance(&mut self, amount: u64) -> MarketResult<()>;

    // Audit log
    fn append_event(&mut self, event: MarketEvent) -> MarketResult<()>;
}

// ========================================
// Payment Gateway (settlement port)
// ========================================

/// Outcome of asking the settlement backend to move funds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ForwardResult {
    /// Destination accepted the funds
    Accepted,
    /// Destination rejected the funds
    Rejected,
}

/// Port through which the exchange engine forwards funds.
///
/// The engine only calls this after its own state mutations are committed
/// (checks-effects-interactions), so a misbehaving gateway can never
/// observe a half-updated registry.
pub trait PaymentGateway {
    /// Forward `amount` to `to`.
    fn forward(&mut self, to: &Address, amount: u64) -> ForwardResult;
}

// ========================================
// Runtime Context
// ========================================

/// Runtime context providing caller and logical-time information.
pub struct RuntimeContext {
    /// Current caller (transaction signer)
    pub caller: Address,
    /// Current block height
    pub block_height: u64,
}

impl RuntimeContext {
    /// Create a new runtime context
    pub fn new(caller: Address, block_height: u64) -> Self {
        Self {
            caller,
            block_height,
        }
    }
}

// ========================================
// Permission Checking Utilities
// ========================================

/// Check that the caller is the administrator.
pub fn check_admin<S: MarketStorage + ?Sized>(storage: &S, caller: &Address) -> MarketResult<()> {
    if storage.admin() == *caller {
        Ok(())
    } else {
        Err(MarketError::Unauthorized)
    }
}
