//! Shopping cart line items and aggregate queries.

pub mod aggregation;
pub mod item;

pub use aggregation::{
    customer, is_recurring, is_shipping_required, recurring_cycle_info, total_quantity,
};
pub use item::{CartItem, Customer, Product};
