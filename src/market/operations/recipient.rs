// Payout Recipient Management
// Administrator-only configuration of the single payout destination.

use log::debug;

use crate::crypto::Address;
use crate::market::error::MarketResult;
use crate::market::events::MarketEvent;

use super::validation::validate_recipient;
use super::{check_admin, MarketStorage, RuntimeContext};

/// Configure or overwrite the payout recipient.
///
/// Administrator only; the address must be non-zero. Once configured the
/// slot is never unset, only overwritten. Previous and new values are
/// recorded in the audit log.
pub fn set_payout_recipient<S: MarketStorage + ?Sized>(
    storage: &mut S,
    ctx: &RuntimeContext,
    recipient: &Address,
) -> MarketResult<()> {
    check_admin(storage, &ctx.caller)?;
    validate_recipient(recipient)?;

    let previous = storage.payout_recipient();
    storage.set_payout_recipient(recipient)?;
    storage.append_event(MarketEvent::PayoutRecipientUpdated {
        previous,
        current: *recipient,
    })?;

    debug!("payout recipient set to {}", recipient);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::market::error::MarketError;
    use crate::market::memory::MemoryStorage;

    fn admin() -> Address {
        Address::new([1u8; 32])
    }

    fn ctx(caller: Address) -> RuntimeContext {
        RuntimeContext::new(caller, 1)
    }

    #[test]
    fn test_set_payout_recipient() {
        let mut storage = MemoryStorage::new(admin());
        let payee = Address::new([2u8; 32]);
        assert_eq!(storage.payout_recipient(), None);

        set_payout_recipient(&mut storage, &ctx(admin()), &payee).unwrap();
        assert_eq!(storage.payout_recipient(), Some(payee));
    }

    #[test]
    fn test_set_payout_recipient_requires_admin() {
        let mut storage = MemoryStorage::new(admin());
        let outsider = Address::new([9u8; 32]);
        assert_eq!(
            set_payout_recipient(&mut storage, &ctx(outsider), &Address::new([2u8; 32])),
            Err(MarketError::Unauthorized)
        );
        assert_eq!(storage.payout_recipient(), None);
    }

    #[test]
    fn test_set_payout_recipient_rejects_zero() {
        let mut storage = MemoryStorage::new(admin());
        assert_eq!(
            set_payout_recipient(&mut storage, &ctx(admin()), &Address::ZERO),
            Err(MarketError::InvalidRecipient)
        );
    }

    #[test]
    fn test_overwrite_records_previous_value() {
        let mut storage = MemoryStorage::new(admin());
        let first = Address::new([2u8; 32]);
        let second = Address::new([3u8; 32]);

        set_payout_recipient(&mut storage, &ctx(admin()), &first).unwrap();
        set_payout_recipient(&mut storage, &ctx(admin()), &second).unwrap();

        assert_eq!(storage.payout_recipient(), Some(second));
        assert_eq!(
            storage.events(),
            &[
                MarketEvent::PayoutRecipientUpdated {
                    previous: None,
                    current: first,
                },
                MarketEvent::PayoutRecipientUpdated {
                    previous: Some(first),
                    current: second,
                },
            ]
        );
    }
}
