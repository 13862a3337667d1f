// Marketplace Storage Layout
// This module defines storage key prefixes and key generation for the
// persisted marketplace state.
//
// Storage Key Structure:
// - Asset record:     mkt:ast:<id>
// - Owner relation:   mkt:own:<id>
// - Asset counter:    mkt:cnt   (highest assigned id, global)
// - Payout recipient: mkt:payee (single slot, absent until configured)
// - Stray balance:    mkt:bal   (funds held outside the purchase flow)

// ========================================
// Storage Key Prefixes
// ========================================

/// Storage key prefixes for marketplace data
pub mod prefixes {
    /// Asset record prefix
    pub const ASSET: &[u8] = b"mkt:ast:";

    /// Ownership relation prefix
    pub const OWNER: &[u8] = b"mkt:own:";

    /// Global asset id counter
    pub const ASSET_COUNTER: &[u8] = b"mkt:cnt";

    /// Payout recipient slot
    pub const PAYOUT_RECIPIENT: &[u8] = b"mkt:payee";

    /// Stray engine balance
    pub const STRAY_BALANCE: &[u8] = b"mkt:bal";
}

// ========================================
// Storage Key Generation Functions
// ========================================

/// Generate storage key for an asset record
pub fn asset_key(id: u64) -> Vec<u8> {
    let mut key = Vec::with_capacity(prefixes::ASSET.len() + 8);
    key.extend_from_slice(prefixes::ASSET);
    key.extend_from_slice(&id.to_be_bytes());
    key
}

/// Generate storage key for the ownership relation of an asset
pub fn owner_key(id: u64) -> Vec<u8> {
    let mut key = Vec::with_capacity(prefixes::OWNER.len() + 8);
    key.extend_from_slice(prefixes::OWNER);
    key.extend_from_slice(&id.to_be_bytes());
    key
}

/// Generate storage key for the asset counter
pub fn counter_key() -> Vec<u8> {
    prefixes::ASSET_COUNTER.to_vec()
}

/// Generate storage key for the payout recipient slot
pub fn payout_recipient_key() -> Vec<u8> {
    prefixes::PAYOUT_RECIPIENT.to_vec()
}

/// Generate storage key for the stray balance
pub fn stray_balance_key() -> Vec<u8> {
    prefixes::STRAY_BALANCE.to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_distinct_per_id() {
        assert_ne!(asset_key(1), asset_key(2));
        assert_ne!(owner_key(1), owner_key(2));
        assert_ne!(asset_key(1), owner_key(1));
    }

    #[test]
    fn test_singleton_keys_distinct() {
        let keys = [counter_key(), payout_recipient_key(), stray_balance_key()];
        let mut seen = std::collections::HashSet::new();
        for key in keys {
            assert!(seen.insert(key));
        }
    }

    #[test]
    fn test_asset_key_big_endian_orders_ids() {
        // Big-endian id encoding keeps lexicographic key order equal to
        // numeric id order, which range scans rely on.
        assert!(asset_key(1) < asset_key(2));
        assert!(asset_key(255) < asset_key(256));
    }
}
