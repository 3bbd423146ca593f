//! Cart line-item model.
//!
//! These are read models: the checkout crate consumes them but does not own
//! their persistence. Callers are expected to load items with their product
//! and customer references already resolved.

use cartwright_core::{CartItemId, CustomerId, ProductId, RecurringCyclePeriod};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A purchasable product, as seen by the checkout logic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Product ID.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Whether the product is billed/shipped on a recurring schedule.
    pub is_recurring: bool,
    /// Length of one recurring cycle, e.g. 30.
    pub recurring_cycle_length: i32,
    /// Unit of the recurring cycle.
    pub recurring_cycle_period: RecurringCyclePeriod,
    /// Total number of cycles before the subscription ends.
    pub recurring_total_cycles: i32,
}

impl Product {
    /// A one-off (non-recurring) product.
    #[must_use]
    pub fn one_off(id: ProductId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            is_recurring: false,
            recurring_cycle_length: 0,
            recurring_cycle_period: RecurringCyclePeriod::default(),
            recurring_total_cycles: 0,
        }
    }

    /// A recurring product with the given schedule.
    #[must_use]
    pub fn recurring(
        id: ProductId,
        name: impl Into<String>,
        cycle_length: i32,
        cycle_period: RecurringCyclePeriod,
        total_cycles: i32,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            is_recurring: true,
            recurring_cycle_length: cycle_length,
            recurring_cycle_period: cycle_period,
            recurring_total_cycles: total_cycles,
        }
    }
}

/// The customer a cart belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    /// Customer ID.
    pub id: CustomerId,
    /// Email, if the customer has one on file.
    pub email: Option<String>,
}

/// One line of a shopping cart.
///
/// `product` may be `None` when the referenced product could not be
/// resolved (deleted, unpublished, or simply not eagerly loaded). Most
/// aggregate queries treat that as "not interesting"; schedule
/// reconciliation treats it as a data-integrity failure. `product_id` is
/// kept separately so the failure can still name the product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    /// Line-item ID.
    pub id: CartItemId,
    /// Units of the product in this line. Never negative.
    pub quantity: i32,
    /// Whether this line requires physical shipping.
    pub shipping_enabled: bool,
    /// The referenced product's ID.
    pub product_id: ProductId,
    /// The resolved product, when available.
    pub product: Option<Product>,
    /// Owner of the cart. The same customer for every line of a cart.
    pub customer: Customer,
    /// When the line was added to the cart.
    pub created_on: DateTime<Utc>,
}

impl CartItem {
    /// A line item holding `quantity` units of `product`.
    #[must_use]
    pub fn new(id: CartItemId, quantity: i32, product: Product, customer: Customer) -> Self {
        Self {
            id,
            quantity,
            shipping_enabled: false,
            product_id: product.id,
            product: Some(product),
            customer,
            created_on: Utc::now(),
        }
    }

    /// Mark this line as requiring physical shipping.
    #[must_use]
    pub fn with_shipping(mut self) -> Self {
        self.shipping_enabled = true;
        self
    }

    /// Drop the resolved product, keeping only the dangling reference.
    #[must_use]
    pub fn with_unresolved_product(mut self) -> Self {
        self.product = None;
        self
    }
}
