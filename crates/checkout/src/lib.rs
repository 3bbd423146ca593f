//! Cartwright Checkout - cart aggregation and gift card services.
//!
//! This crate holds the checkout-adjacent domain logic that does not touch
//! storage or the network:
//!
//! - [`cart`] - line-item model and aggregate queries over a cart
//!   (shipping requirement, total quantity, recurring-schedule
//!   reconciliation)
//! - [`giftcards`] - gift card model, validity rules and activation-code
//!   generation
//! - [`localization`] - the resource-lookup seam used for customer-facing
//!   messages
//!
//! Everything here is synchronous and stateless: functions operate on their
//! inputs and allocate fresh results, so they are safe to call from any
//! number of threads without coordination. Persistence and checkout
//! orchestration belong to the callers.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod error;
pub mod giftcards;
pub mod localization;

pub use error::CartError;
