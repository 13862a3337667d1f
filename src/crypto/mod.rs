//! Account address primitive.
//!
//! Addresses identify every actor the marketplace talks about: the
//! administrator, asset owners, purchase recipients and the payout
//! destination. The all-zero address is the "no destination" sentinel and
//! is rejected everywhere a real destination is required.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Raw length of an address in bytes.
pub const ADDRESS_LENGTH: usize = 32;

/// A 32-byte account address.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Address([u8; ADDRESS_LENGTH]);

impl Address {
    /// The zero address, used as a null sentinel.
    pub const ZERO: Self = Self([0u8; ADDRESS_LENGTH]);

    /// Create an address from raw bytes.
    pub fn new(bytes: [u8; ADDRESS_LENGTH]) -> Self {
        Self(bytes)
    }

    /// Parse an address from a hex string (64 hex chars).
    pub fn from_hex(hex_str: &str) -> Result<Self, hex::FromHexError> {
        let mut bytes = [0u8; ADDRESS_LENGTH];
        hex::decode_to_slice(hex_str, &mut bytes)?;
        Ok(Self(bytes))
    }

    /// Raw byte view.
    pub fn as_bytes(&self) -> &[u8; ADDRESS_LENGTH] {
        &self.0
    }

    /// Whether this is the zero (null) address.
    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; ADDRESS_LENGTH]
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({})", hex::encode(self.0))
    }
}

impl From<[u8; ADDRESS_LENGTH]> for Address {
    fn from(bytes: [u8; ADDRESS_LENGTH]) -> Self {
        Self(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_address() {
        assert!(Address::ZERO.is_zero());
        assert!(!Address::new([1u8; 32]).is_zero());
    }

    #[test]
    fn test_hex_roundtrip() {
        let addr = Address::new([0xab; 32]);
        let encoded = addr.to_string();
        assert_eq!(encoded.len(), 64);
        assert_eq!(Address::from_hex(&encoded), Ok(addr));
    }

    #[test]
    fn test_from_hex_rejects_bad_input() {
        assert!(Address::from_hex("zz").is_err());
        assert!(Address::from_hex("abcd").is_err()); // too short
    }

    #[test]
    fn test_serde_roundtrip() {
        let addr = Address::new([7u8; 32]);
        let json = serde_json::to_string(&addr).unwrap();
        let back: Address = serde_json::from_str(&json).unwrap();
        assert_eq!(back, addr);
    }
}
