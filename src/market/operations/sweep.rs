// Stray Funds Recovery
// Sweeps balance that arrived outside the normal purchase flow.

use log::debug;

use crate::market::error::{MarketError, MarketResult};
use crate::market::events::MarketEvent;

use super::{check_admin, ForwardResult, MarketStorage, PaymentGateway, RuntimeContext};

/// Sweep the stray engine balance.
///
/// Administrator only. The destination is the payout recipient when
/// configured, otherwise the administrator. Fails with `NothingToWithdraw`
/// when the balance is zero and with `TransferFailed` when the destination
/// rejects the funds (the balance is left untouched in that case).
///
/// # Returns
/// - `Ok(u64)`: The amount swept
pub fn withdraw_stray_funds<S, G>(
    storage: &mut S,
    gateway: &mut G,
    ctx: &RuntimeContext,
) -> MarketResult<u64>
where
    S: MarketStorage + ?Sized,
    G: PaymentGateway + ?Sized,
{
    check_admin(storage, &ctx.caller)?;

    let amount = storage.stray_balance();
    if amount == 0 {
        return Err(MarketError::NothingToWithdraw);
    }

    let destination = storage.payout_recipient().unwrap_or_else(|| storage.admin());

    match gateway.forward(&destination, amount) {
        ForwardResult::Accepted => {
            storage.set_stray_balance(0)?;
            storage.append_event(MarketEvent::StrayFundsSwept {
                destination,
                amount,
            })?;
            debug!("swept {} stray units to {}", amount, destination);
            Ok(amount)
        }
        ForwardResult::Rejected => Err(MarketError::TransferFailed),
    }
}
