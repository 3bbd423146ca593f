//! Checkout error types.

use cartwright_core::ProductId;
use thiserror::Error;

/// Errors raised by cart aggregation.
///
/// Only contract violations surface here. Business-rule conflicts (two
/// recurring items with different shipment schedules) are reported as data
/// on [`RecurringCycleInfo`](cartwright_core::RecurringCycleInfo) instead,
/// so callers can show them to the customer rather than fail the request.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CartError {
    /// A line item references a product that was not eagerly loaded.
    ///
    /// Line items are expected to arrive with their product resolved;
    /// a missing product during schedule reconciliation means the cart
    /// was loaded wrong, so the whole computation is aborted.
    #[error("product (id={product_id}) cannot be loaded")]
    ProductNotLoaded {
        /// The product the offending line item points at.
        product_id: ProductId,
    },
}
