//! Shopping cart module.
//!
//! Cart operations are pure: each takes the current cart and returns a new
//! one. Pricing derives counts and totals from a cart plus the inventory.

mod cart;
mod pricing;

pub use cart::{Cart, CartLine};
pub use pricing::{cart_item_count, cart_total, CartPricing, LineItemPricing};
