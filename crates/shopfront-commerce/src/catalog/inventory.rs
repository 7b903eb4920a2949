//! The ordered product collection.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::catalog::{default_catalog, Product, ProductDraft};
use crate::error::CommerceError;
use crate::ids::ProductId;

/// Ordered list of products, unique by id.
///
/// Order is display-significant: it is the catalog's relevance order, and
/// newly created products go to the front.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(into = "Vec<Product>", try_from = "Vec<Product>")]
pub struct Inventory {
    products: Vec<Product>,
}

impl Inventory {
    /// Create an empty inventory.
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in default catalog.
    pub fn seeded() -> Self {
        Self {
            products: default_catalog(),
        }
    }

    /// Build an inventory, rejecting lists that repeat an id.
    pub fn from_products(products: Vec<Product>) -> Result<Self, CommerceError> {
        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            if !seen.insert(product.id()) {
                return Err(CommerceError::DuplicateProduct(product.id().clone()));
            }
        }
        Ok(Self { products })
    }

    /// Products in relevance order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Product> {
        self.products.iter()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Look up a product by id.
    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id() == id)
    }

    pub fn contains(&self, id: &ProductId) -> bool {
        self.get(id).is_some()
    }

    /// Current price of a product, if it still exists.
    pub fn price_of(&self, id: &ProductId) -> Option<u64> {
        self.get(id).map(|p| p.price)
    }

    /// Insert at the front. The caller guarantees the id is new.
    pub(crate) fn prepend(&mut self, product: Product) {
        debug_assert!(!self.contains(product.id()));
        self.products.insert(0, product);
    }

    /// Replace the product with `id` in place, keeping its position and id.
    pub(crate) fn replace(&mut self, id: &ProductId, draft: ProductDraft) -> Option<&Product> {
        let slot = self.products.iter_mut().find(|p| p.id() == id)?;
        *slot = slot.apply(draft);
        Some(&*slot)
    }

    /// Remove and return the product with `id`.
    pub(crate) fn remove(&mut self, id: &ProductId) -> Option<Product> {
        let index = self.products.iter().position(|p| p.id() == id)?;
        Some(self.products.remove(index))
    }
}

impl TryFrom<Vec<Product>> for Inventory {
    type Error = CommerceError;

    fn try_from(products: Vec<Product>) -> Result<Self, Self::Error> {
        Self::from_products(products)
    }
}

impl From<Inventory> for Vec<Product> {
    fn from(inventory: Inventory) -> Self {
        inventory.products
    }
}

impl<'a> IntoIterator for &'a Inventory {
    type Item = &'a Product;
    type IntoIter = std::slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.products.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Category;

    fn sample() -> Inventory {
        Inventory::from_products(vec![
            Product::new("a", "Alpha", Category::TopUp, 200),
            Product::new("b", "Beta", Category::GiftCard, 100),
        ])
        .unwrap()
    }

    #[test]
    fn test_lookup() {
        let inv = sample();
        assert_eq!(inv.len(), 2);
        assert_eq!(inv.price_of(&ProductId::new("b")), Some(100));
        assert_eq!(inv.price_of(&ProductId::new("zzz")), None);
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let result = Inventory::from_products(vec![
            Product::new("a", "Alpha", Category::TopUp, 200),
            Product::new("a", "Alpha again", Category::TopUp, 300),
        ]);
        assert!(matches!(result, Err(CommerceError::DuplicateProduct(id)) if id.as_str() == "a"));
    }

    #[test]
    fn test_prepend_goes_first() {
        let mut inv = sample();
        inv.prepend(Product::new("c", "Gamma", Category::Bundle, 300));
        let ids: Vec<&str> = inv.iter().map(|p| p.id().as_str()).collect();
        assert_eq!(ids, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_replace_keeps_position() {
        let mut inv = sample();
        let draft = ProductDraft::new("Alpha Prime", Category::TopUp, 250);
        let updated = inv.replace(&ProductId::new("a"), draft).unwrap();
        assert_eq!(updated.name, "Alpha Prime");
        assert_eq!(inv.products()[0].price, 250);
        assert!(inv
            .replace(&ProductId::new("zzz"), ProductDraft::default())
            .is_none());
    }

    #[test]
    fn test_remove() {
        let mut inv = sample();
        assert!(inv.remove(&ProductId::new("a")).is_some());
        assert!(inv.remove(&ProductId::new("a")).is_none());
        assert_eq!(inv.len(), 1);
    }

    #[test]
    fn test_serde_is_a_plain_array() {
        let inv = sample();
        let json = serde_json::to_string(&inv).unwrap();
        assert!(json.starts_with('['));

        let back: Inventory = serde_json::from_str(&json).unwrap();
        assert_eq!(back, inv);

        let dup = r#"[{"id":"a","name":"A","category":"Bundle","price":1,"rating":1,"image":""},
                      {"id":"a","name":"B","category":"Bundle","price":2,"rating":1,"image":""}]"#;
        assert!(serde_json::from_str::<Inventory>(dup).is_err());
    }
}
