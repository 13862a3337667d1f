// Marketplace Core Types
// This module defines the data structures for sellable asset records.

use serde::{Deserialize, Serialize};
use std::fmt;

// ========================================
// Asset Category
// ========================================

/// Closed set of asset categories the marketplace sells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AssetCategory {
    /// Weapon skin
    GunSkin,
    /// Character/avatar skin
    CharacterSkin,
}

impl fmt::Display for AssetCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetCategory::GunSkin => write!(f, "gun-skin"),
            AssetCategory::CharacterSkin => write!(f, "character-skin"),
        }
    }
}

// ========================================
// Asset Record
// ========================================

/// A unique, sellable asset record.
///
/// The current holder is not part of the record; ownership is a separate
/// `id -> Address` relation maintained by the registry. Every field except
/// `for_sale` is immutable after creation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    /// Asset ID (starts from 1, 0 is the "does not exist" sentinel)
    pub id: u64,

    /// Display name
    pub name: String,

    /// Display description
    pub description: String,

    /// Category
    pub category: AssetCategory,

    /// Price in the smallest currency unit
    pub price: u64,

    /// Whether the asset is currently listed for sale.
    /// True at creation; flips to false exactly once, on successful purchase.
    pub for_sale: bool,

    /// Off-chain metadata reference
    pub metadata_uri: String,

    /// Logical time (block height) at creation
    pub created_at: u64,
}

impl Asset {
    /// Flip the sale flag after a successful purchase.
    /// `for_sale` only ever transitions true -> false.
    pub fn mark_sold(&mut self) {
        self.for_sale = false;
    }
}
