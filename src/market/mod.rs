//! Marketplace Module
//!
//! Asset registry and exchange engine for unique, sellable asset records.
//!
//! # Components
//!
//! - Registry: mints assets with unique sequential ids and serves queries
//! - Exchange engine: validated atomic pay-and-transfer of a listed asset
//! - Audit events for every state-changing operation
//!
//! Operations live in [`operations`] and are generic over the
//! [`MarketStorage`] backend and the [`PaymentGateway`] settlement port.

pub mod error;
pub mod events;
pub mod memory;
pub mod operations;
pub mod storage;
pub mod types;

pub use error::{MarketError, MarketResult};
pub use events::MarketEvent;
pub use memory::MemoryStorage;
pub use operations::{
    check_admin, create_asset, get_asset_details, list_available, owner_of, purchase,
    set_payout_recipient, withdraw_stray_funds, CreateAssetParams, ForwardResult, MarketStorage,
    PaymentGateway, RuntimeContext,
};
pub use types::{Asset, AssetCategory};
