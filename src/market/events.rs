// Marketplace Audit Events
// Every state-changing operation appends one event to the audit log on
// success. Events are serializable so collaborators (settlement backend,
// administrative front-end) can consume them as notifications.

use serde::{Deserialize, Serialize};

use crate::crypto::Address;
use crate::market::types::AssetCategory;

/// Audit event emitted by a successful marketplace operation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum MarketEvent {
    /// A new asset was minted into the registry.
    AssetCreated {
        id: u64,
        name: String,
        category: AssetCategory,
        price: u64,
    },

    /// An asset was sold and ownership transferred.
    /// `price_charged` is the full amount forwarded to the payout
    /// recipient (overpayment is forwarded, not refunded).
    AssetPurchased {
        id: u64,
        recipient: Address,
        price_charged: u64,
    },

    /// The payout recipient slot was configured or overwritten.
    PayoutRecipientUpdated {
        previous: Option<Address>,
        current: Address,
    },

    /// Stray engine balance was swept to a destination.
    StrayFundsSwept { destination: Address, amount: u64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_serde_tagged() {
        let event = MarketEvent::AssetCreated {
            id: 1,
            name: "Dragon Skin".to_string(),
            category: AssetCategory::GunSkin,
            price: 100,
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "AssetCreated");
        assert_eq!(json["id"], 1);
        assert_eq!(json["category"], "gun-skin");
    }

    #[test]
    fn test_event_roundtrip() {
        let event = MarketEvent::PayoutRecipientUpdated {
            previous: None,
            current: Address::new([9u8; 32]),
        };
        let json = serde_json::to_string(&event).unwrap();
        let back: MarketEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
    }
}
