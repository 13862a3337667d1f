// In-Memory Storage Backend
// Key-value implementation of MarketStorage over the storage key layout.
// Values are JSON-encoded, matching the flat persisted layout a durable
// backend would use. Suitable for tests and ephemeral embedders.

use indexmap::IndexMap;
use log::warn;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::crypto::Address;
use crate::market::error::{MarketError, MarketResult};
use crate::market::events::MarketEvent;
use crate::market::operations::MarketStorage;
use crate::market::storage::{
    asset_key, counter_key, owner_key, payout_recipient_key, stray_balance_key,
};
use crate::market::types::Asset;

/// In-memory marketplace storage.
pub struct MemoryStorage {
    admin: Address,
    kv: IndexMap<Vec<u8>, Vec<u8>>,
    events: Vec<MarketEvent>,
}

impl MemoryStorage {
    /// Create an empty storage with a fixed administrator.
    pub fn new(admin: Address) -> Self {
        Self {
            admin,
            kv: IndexMap::new(),
            events: Vec::new(),
        }
    }

    /// Audit events appended so far, oldest first.
    pub fn events(&self) -> &[MarketEvent] {
        &self.events
    }

    /// Credit the stray engine balance, simulating funds that arrived
    /// outside the normal purchase flow.
    pub fn deposit(&mut self, amount: u64) -> MarketResult<()> {
        let balance = self
            .stray_balance()
            .checked_add(amount)
            .ok_or(MarketError::Overflow)?;
        self.set_stray_balance(balance)
    }

    fn get_value<T: DeserializeOwned>(&self, key: &[u8]) -> Option<T> {
        let bytes = self.kv.get(key)?;
        match serde_json::from_slice(bytes) {
            Ok(value) => Some(value),
            Err(err) => {
                warn!(
                    "undecodable value under key {}: {}",
                    hex::encode(key),
                    err
                );
                None
            }
        }
    }

    fn put_value<T: Serialize>(&mut self, key: Vec<u8>, value: &T) -> MarketResult<()> {
        let bytes = serde_json::to_vec(value).map_err(|_| MarketError::Encoding)?;
        self.kv.insert(key, bytes);
        Ok(())
    }
}

impl MarketStorage for MemoryStorage {
    fn admin(&self) -> Address {
        self.admin
    }

    fn get_asset(&self, id: u64) -> Option<Asset> {
        self.get_value(&asset_key(id))
    }

    fn set_asset(&mut self, asset: &Asset) -> MarketResult<()> {
        self.put_value(asset_key(asset.id), asset)
    }

    fn asset_count(&self) -> u64 {
        self.get_value(&counter_key()).unwrap_or(0)
    }

    fn allocate_asset_id(&mut self) -> MarketResult<u64> {
        let next = self
            .asset_count()
            .checked_add(1)
            .ok_or(MarketError::Overflow)?;
        self.put_value(counter_key(), &next)?;
        Ok(next)
    }

    fn get_owner(&self, id: u64) -> Option<Address> {
        self.get_value(&owner_key(id))
    }

    fn set_owner(&mut self, id: u64, owner: &Address) -> MarketResult<()> {
        self.put_value(owner_key(id), owner)
    }

    fn payout_recipient(&self) -> Option<Address> {
        self.get_value(&payout_recipient_key())
    }

    fn set_payout_recipient(&mut self, recipient: &Address) -> MarketResult<()> {
        self.put_value(payout_recipient_key(), recipient)
    }

    fn stray_balance(&self) -> u64 {
        self.get_value(&stray_balance_key()).unwrap_or(0)
    }

    fn set_stray_balance(&mut self, amount: u64) -> MarketResult<()> {
        self.put_value(stray_balance_key(), &amount)
    }

    fn append_event(&mut self, event: MarketEvent) -> MarketResult<()> {
        self.events.push(event);
        Ok(())
    }
}
