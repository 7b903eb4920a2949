//! Cart and line item types.

use std::num::NonZeroU32;

use serde::Serialize;

use crate::ids::ProductId;

/// A shopping cart: ordered lines, at most one per product.
///
/// Lines are only reachable through the operations below, which never leave
/// a duplicate line or a zero quantity behind. Every operation borrows the
/// cart and returns a new one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of a product: bumps an existing line or appends a new one.
    pub fn add(&self, product_id: &ProductId) -> Cart {
        if self.contains(product_id) {
            return self.increment(product_id);
        }
        let mut lines = self.lines.clone();
        lines.push(CartLine::new(product_id.clone()));
        Cart { lines }
    }

    /// Bump the quantity of an existing line. Absent lines are left alone.
    pub fn increment(&self, product_id: &ProductId) -> Cart {
        let lines = self
            .lines
            .iter()
            .map(|line| {
                if &line.product_id == product_id {
                    line.incremented()
                } else {
                    line.clone()
                }
            })
            .collect();
        Cart { lines }
    }

    /// Drop one unit; a line that reaches zero is removed.
    pub fn decrement(&self, product_id: &ProductId) -> Cart {
        let lines = self
            .lines
            .iter()
            .filter_map(|line| {
                if &line.product_id == product_id {
                    line.decremented()
                } else {
                    Some(line.clone())
                }
            })
            .collect();
        Cart { lines }
    }

    /// Remove a line whatever its quantity.
    pub fn remove(&self, product_id: &ProductId) -> Cart {
        let lines = self
            .lines
            .iter()
            .filter(|line| &line.product_id != product_id)
            .cloned()
            .collect();
        Cart { lines }
    }

    /// Lines in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Get the line for a product.
    pub fn line(&self, product_id: &ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|line| &line.product_id == product_id)
    }

    /// Whether a line exists for `product_id`.
    pub fn contains(&self, product_id: &ProductId) -> bool {
        self.line(product_id).is_some()
    }

    /// Quantity held for a product, zero when absent.
    pub fn quantity_of(&self, product_id: &ProductId) -> u32 {
        self.line(product_id).map_or(0, CartLine::quantity)
    }

    /// Number of distinct lines.
    pub fn unique_item_count(&self) -> usize {
        self.lines.len()
    }

    /// True when the cart has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// One product and how many of it are in the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartLine {
    product_id: ProductId,
    quantity: NonZeroU32,
}

impl CartLine {
    fn new(product_id: ProductId) -> Self {
        Self {
            product_id,
            quantity: NonZeroU32::MIN,
        }
    }

    /// The product this line refers to.
    pub fn product_id(&self) -> &ProductId {
        &self.product_id
    }

    /// Units on this line, always at least one.
    pub fn quantity(&self) -> u32 {
        self.quantity.get()
    }

    fn incremented(&self) -> Self {
        Self {
            product_id: self.product_id.clone(),
            quantity: self.quantity.saturating_add(1),
        }
    }

    fn decremented(&self) -> Option<Self> {
        NonZeroU32::new(self.quantity.get() - 1).map(|quantity| Self {
            product_id: self.product_id.clone(),
            quantity,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> ProductId {
        ProductId::new(s)
    }

    fn assert_well_formed(cart: &Cart) {
        let mut seen = std::collections::HashSet::new();
        for line in cart.lines() {
            assert!(line.quantity() > 0);
            assert!(seen.insert(line.product_id().clone()), "duplicate line");
        }
    }

    #[test]
    fn test_cart_creation() {
        let cart = Cart::new();
        assert!(cart.is_empty());
        assert_eq!(cart.unique_item_count(), 0);
    }

    #[test]
    fn test_add_new_line() {
        let cart = Cart::new().add(&id("r1"));
        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.quantity_of(&id("r1")), 1);
    }

    #[test]
    fn test_add_same_item_increases_quantity() {
        let cart = Cart::new().add(&id("r1")).add(&id("r2")).add(&id("r1"));
        assert_eq!(cart.unique_item_count(), 2);
        assert_eq!(cart.quantity_of(&id("r1")), 2);
        // Line order follows first insertion.
        assert_eq!(cart.lines()[0].product_id(), &id("r1"));
    }

    #[test]
    fn test_operations_do_not_mutate_input() {
        let before = Cart::new().add(&id("r1"));
        let snapshot = before.clone();
        let _ = before.add(&id("r1"));
        let _ = before.increment(&id("r1"));
        let _ = before.decrement(&id("r1"));
        let _ = before.remove(&id("r1"));
        assert_eq!(before, snapshot);
    }

    #[test]
    fn test_increment_absent_is_noop() {
        let cart = Cart::new().add(&id("r1"));
        assert_eq!(cart.increment(&id("missing")), cart);
        assert_eq!(cart.increment(&id("r1")).quantity_of(&id("r1")), 2);
    }

    #[test]
    fn test_decrement_to_zero_removes_line() {
        let cart = Cart::new().add(&id("r1")).add(&id("r1"));
        let once = cart.decrement(&id("r1"));
        assert_eq!(once.quantity_of(&id("r1")), 1);

        let twice = once.decrement(&id("r1"));
        assert!(!twice.contains(&id("r1")));
        assert!(twice.is_empty());
    }

    #[test]
    fn test_decrement_absent_is_noop() {
        let cart = Cart::new().add(&id("r1"));
        assert_eq!(cart.decrement(&id("missing")), cart);
    }

    #[test]
    fn test_remove_is_idempotent() {
        let cart = Cart::new().add(&id("r1")).add(&id("r1")).add(&id("r2"));
        let once = cart.remove(&id("r1"));
        assert_eq!(once.remove(&id("r1")), once);
        assert_eq!(once.unique_item_count(), 1);
    }

    #[test]
    fn test_random_sequences_stay_well_formed() {
        // Small deterministic LCG so the sequence is reproducible.
        let ids = [id("a"), id("b"), id("c")];
        let mut state: u64 = 0x2545_f491_4f6c_dd1d;
        let mut cart = Cart::new();
        for _ in 0..2_000 {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            let target = &ids[(state >> 33) as usize % ids.len()];
            let before = cart.quantity_of(target);
            cart = match (state >> 40) % 4 {
                0 => {
                    let next = cart.add(target);
                    assert_eq!(next.quantity_of(target), before + 1);
                    next
                }
                1 => cart.increment(target),
                2 => {
                    let next = cart.decrement(target);
                    assert_eq!(next.quantity_of(target), before.saturating_sub(1));
                    next
                }
                _ => cart.remove(target),
            };
            assert_well_formed(&cart);
        }
    }
}
