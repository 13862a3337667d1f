// Marketplace Error Codes
// This module defines all error codes for registry and exchange operations.
//
// Error Code Ranges:
// - 0: Success
// - 100-199: Asset errors
// - 200-299: Permission errors
// - 300-399: Input validation errors
// - 500-599: Settlement errors
// - 900-999: System errors

use thiserror::Error;

/// Marketplace operation result type
pub type MarketResult<T> = Result<T, MarketError>;

/// Marketplace error type with numeric code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[repr(u64)]
pub enum MarketError {
    // ========================================
    // Asset errors (100-199)
    // ========================================
    #[error("Asset not found")]
    NotFound = 100,

    #[error("Asset is not for sale")]
    NotForSale = 101,

    // ========================================
    // Permission errors (200-299)
    // ========================================
    #[error("Unauthorized")]
    Unauthorized = 200,

    // ========================================
    // Input validation errors (300-399)
    // ========================================
    #[error("Invalid recipient address")]
    InvalidRecipient = 300,

    // ========================================
    // Settlement errors (500-599)
    // ========================================
    #[error("Payout recipient not configured")]
    PayoutNotConfigured = 500,

    #[error("Insufficient payment")]
    InsufficientPayment = 501,

    #[error("Funds transfer rejected by destination")]
    TransferFailed = 502,

    #[error("Nothing to withdraw")]
    NothingToWithdraw = 503,

    // ========================================
    // System errors (900-999)
    // ========================================
    #[error("Arithmetic overflow")]
    Overflow = 900,

    #[error("Storage error")]
    Storage = 901,

    #[error("Encoding error")]
    Encoding = 902,
}

impl MarketError {
    /// Get the numeric error code
    #[inline]
    pub fn code(&self) -> u64 {
        *self as u64
    }

    /// Create error from numeric code
    pub fn from_code(code: u64) -> Option<Self> {
        match code {
            100 => Some(Self::NotFound),
            101 => Some(Self::NotForSale),
            200 => Some(Self::Unauthorized),
            300 => Some(Self::InvalidRecipient),
            500 => Some(Self::PayoutNotConfigured),
            501 => Some(Self::InsufficientPayment),
            502 => Some(Self::TransferFailed),
            503 => Some(Self::NothingToWithdraw),
            900 => Some(Self::Overflow),
            901 => Some(Self::Storage),
            902 => Some(Self::Encoding),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_unique() {
        let codes = [
            MarketError::NotFound,
            MarketError::NotForSale,
            MarketError::Unauthorized,
            MarketError::InvalidRecipient,
            MarketError::PayoutNotConfigured,
            MarketError::InsufficientPayment,
            MarketError::TransferFailed,
            MarketError::NothingToWithdraw,
            MarketError::Overflow,
            MarketError::Storage,
            MarketError::Encoding,
        ];

        let mut seen = std::collections::HashSet::new();
        for err in codes {
            let code = err.code();
            assert!(
                seen.insert(code),
                "Duplicate error code: {} for {:?}",
                code,
                err
            );
        }
    }

    #[test]
    fn test_error_code_roundtrip() {
        let err = MarketError::NotForSale;
        let code = err.code();
        assert_eq!(MarketError::from_code(code), Some(err));
    }

    #[test]
    fn test_unknown_error_code() {
        assert_eq!(MarketError::from_code(9999), None);
    }
}
