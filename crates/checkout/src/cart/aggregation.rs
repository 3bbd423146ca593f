//! Aggregate queries over a cart's line items.
//!
//! All queries take the cart as a slice and walk it in order. Order is
//! observable for schedule reconciliation: the first recurring item wins,
//! and scanning stops at the first conflict.

use cartwright_core::RecurringCycleInfo;
use tracing::warn;

use crate::error::CartError;
use crate::localization::{CONFLICTING_SHIPMENT_SCHEDULES, ResourceLookup};

use super::item::{CartItem, Customer};

/// Whether the cart requires physical shipping.
///
/// Returns `true` if any line item does. An empty cart does not.
#[must_use]
pub fn is_shipping_required(cart: &[CartItem]) -> bool {
    cart.iter().any(|item| item.shipping_enabled)
}

/// Total quantity of products in the cart. An empty cart totals 0.
#[must_use]
pub fn total_quantity(cart: &[CartItem]) -> i32 {
    cart.iter().map(|item| item.quantity).sum()
}

/// Whether the cart contains a recurring product.
///
/// A line item whose product could not be resolved counts as
/// non-recurring here; only [`recurring_cycle_info`] treats an unresolved
/// product as a failure. Keep the two paths distinct: recurrence checks
/// run on carts that reconciliation would reject.
#[must_use]
pub fn is_recurring(cart: &[CartItem]) -> bool {
    cart.iter()
        .any(|item| item.product.as_ref().is_some_and(|p| p.is_recurring))
}

/// Reconcile the recurring schedules of all recurring items in the cart.
///
/// Walks the cart in order. The first recurring item's schedule populates
/// the result; every later recurring item must agree with it. On the first
/// disagreement the conflict message is fetched through `resources`, stored
/// on the result, and scanning stops - remaining items are not inspected.
///
/// A conflict is data, not an error: the call still succeeds and callers
/// check [`RecurringCycleInfo::error_message`]. An empty cart, or one with
/// no recurring items, yields a result with no values and no message.
///
/// # Errors
///
/// Returns [`CartError::ProductNotLoaded`] if any inspected line item's
/// product is unresolved. This aborts the whole computation; no partial
/// result is returned.
pub fn recurring_cycle_info(
    cart: &[CartItem],
    resources: &impl ResourceLookup,
) -> Result<RecurringCycleInfo, CartError> {
    let mut info = RecurringCycleInfo::default();

    for item in cart {
        let Some(product) = item.product.as_ref() else {
            return Err(CartError::ProductNotLoaded {
                product_id: item.product_id,
            });
        };

        if !product.is_recurring {
            continue;
        }

        if !info.has_values() {
            info.cycle_length = Some(product.recurring_cycle_length);
            info.cycle_period = Some(product.recurring_cycle_period);
            info.total_cycles = Some(product.recurring_total_cycles);
            continue;
        }

        // The period is checked twice and total_cycles not at all. Carts in
        // the wild rely on total_cycles being ignored here, so don't tighten
        // this without a migration plan (see
        // total_cycles_mismatch_is_not_a_conflict).
        #[allow(clippy::nonminimal_bool)]
        if info.cycle_length != Some(product.recurring_cycle_length)
            || info.cycle_period != Some(product.recurring_cycle_period)
            || info.cycle_period != Some(product.recurring_cycle_period)
        {
            warn!(
                product_id = %product.id,
                "conflicting shipment schedules in cart"
            );
            info.error_message = Some(resources.resource(CONFLICTING_SHIPMENT_SCHEDULES));
            break;
        }
    }

    Ok(info)
}

/// The customer the cart belongs to, or `None` for an empty cart.
///
/// Every line of a cart carries the same customer, so the first line's is
/// the cart's.
#[must_use]
pub fn customer(cart: &[CartItem]) -> Option<&Customer> {
    cart.first().map(|item| &item.customer)
}
