// Purchase Operation
// Atomic validated transfer of one asset from its current holder to a
// buyer-designated recipient, conditioned on sufficient payment, with the
// full received amount forwarded to the payout recipient.

use log::{debug, warn};

use crate::crypto::Address;
use crate::market::error::{MarketError, MarketResult};
use crate::market::events::MarketEvent;

use super::validation::validate_recipient;
use super::{ForwardResult, MarketStorage, PaymentGateway, RuntimeContext};

/// Purchase a listed asset.
///
/// Preconditions, checked in order (first failure aborts with no state
/// change):
/// 1. payout recipient configured — `PayoutNotConfigured`
/// 2. asset exists — `NotFound`
/// 3. asset is for sale — `NotForSale`
/// 4. `payment >= price` — `InsufficientPayment`
/// 5. `recipient` is non-zero — `InvalidRecipient`
///
/// The sale flag is flipped and ownership re-assigned BEFORE the gateway
/// is invoked, so a re-entrant call for the same asset sees
/// `for_sale == false` and fails with `NotForSale`. If the gateway rejects
/// the funds, both mutations are rolled back and the operation fails with
/// `TransferFailed` — all-or-nothing.
///
/// Overpayment is accepted and forwarded in full; no refund is issued.
pub fn purchase<S, G>(
    storage: &mut S,
    gateway: &mut G,
    ctx: &RuntimeContext,
    id: u64,
    recipient: &Address,
    payment: u64,
) -> MarketResult<()>
where
    S: MarketStorage + ?Sized,
    G: PaymentGateway + ?Sized,
{
    // Step 1: Payout destination must be configured
    let payout = storage
        .payout_recipient()
        .ok_or(MarketError::PayoutNotConfigured)?;

    // Step 2: Asset must exist (id 0 is never assigned)
    let mut asset = storage.get_asset(id).ok_or(MarketError::NotFound)?;

    // Step 3: Asset must still be listed
    if !asset.for_sale {
        return Err(MarketError::NotForSale);
    }

    // Step 4: Payment must cover the price
    if payment < asset.price {
        return Err(MarketError::InsufficientPayment);
    }

    // Step 5: Recipient must be a real destination
    validate_recipient(recipient)?;

    // Snapshot for rollback if the downstream transfer is rejected
    let previous_owner = storage.get_owner(id).ok_or(MarketError::Storage)?;
    let snapshot = asset.clone();

    // Step 6: Commit state BEFORE calling the gateway
    // (checks-effects-interactions; prevents double-sale via reentrancy)
    asset.mark_sold();
    storage.set_asset(&asset)?;
    storage.set_owner(id, recipient)?;

    // Step 7: Forward the full received amount to the payout recipient
    match gateway.forward(&payout, payment) {
        ForwardResult::Accepted => {
            storage.append_event(MarketEvent::AssetPurchased {
                id,
                recipient: *recipient,
                price_charged: payment,
            })?;
            debug!(
                "asset {} sold to {} for {} (caller {})",
                id, recipient, payment, ctx.caller
            );
            Ok(())
        }
        ForwardResult::Rejected => {
            // Destination rejected the funds: undo the flip and the
            // ownership change so the asset stays purchasable.
            storage.set_asset(&snapshot)?;
            storage.set_owner(id, &previous_owner)?;
            warn!("asset {} purchase rolled back: payout destination rejected funds", id);
            Err(MarketError::TransferFailed)
        }
    }
}
