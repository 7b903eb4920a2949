//! Cart aggregation: item counts, totals and the priced line breakdown.

use serde::Serialize;

use crate::cart::Cart;
use crate::catalog::Inventory;
use crate::ids::ProductId;

/// Sum of quantities across all lines.
pub fn cart_item_count(cart: &Cart) -> u64 {
    cart.lines().iter().map(|line| u64::from(line.quantity())).sum()
}

/// Sum of `quantity × price` over all lines.
///
/// Prices come from the inventory at call time. A line whose product no
/// longer exists contributes nothing.
pub fn cart_total(cart: &Cart, inventory: &Inventory) -> u64 {
    cart.lines().iter().fold(0_u64, |total, line| {
        let price = inventory.price_of(line.product_id()).unwrap_or(0);
        total.saturating_add(price.saturating_mul(u64::from(line.quantity())))
    })
}

impl Cart {
    /// Get total item count (sum of quantities).
    pub fn item_count(&self) -> u64 {
        cart_item_count(self)
    }

    /// Total price against the given inventory.
    pub fn total(&self, inventory: &Inventory) -> u64 {
        cart_total(self, inventory)
    }
}

/// Cart lines resolved against the inventory, ready for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartPricing {
    /// Resolvable lines, in cart order.
    pub line_items: Vec<LineItemPricing>,
    /// Lines whose product has been deleted and so are not priced.
    pub stale_lines: Vec<ProductId>,
    /// Sum of quantities over every line, stale ones included.
    pub item_count: u64,
    /// Sum of line totals.
    pub total: u64,
}

impl CartPricing {
    /// Price every line of `cart`.
    pub fn calculate(cart: &Cart, inventory: &Inventory) -> Self {
        let mut line_items = Vec::with_capacity(cart.unique_item_count());
        let mut stale_lines = Vec::new();

        for line in cart.lines() {
            match inventory.get(line.product_id()) {
                Some(product) => {
                    let quantity = line.quantity();
                    line_items.push(LineItemPricing {
                        product_id: line.product_id().clone(),
                        name: product.name.clone(),
                        image: product.image.clone(),
                        unit_price: product.price,
                        quantity,
                        total: product.price.saturating_mul(u64::from(quantity)),
                    });
                }
                None => stale_lines.push(line.product_id().clone()),
            }
        }

        let total = line_items
            .iter()
            .fold(0_u64, |acc, item| acc.saturating_add(item.total));

        Self {
            line_items,
            stale_lines,
            item_count: cart_item_count(cart),
            total,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.line_items.is_empty()
    }
}

/// Pricing breakdown for a single line item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineItemPricing {
    pub product_id: ProductId,
    /// Product name at pricing time.
    pub name: String,
    pub image: String,
    pub unit_price: u64,
    pub quantity: u32,
    /// `unit_price × quantity`.
    pub total: u64,
}
