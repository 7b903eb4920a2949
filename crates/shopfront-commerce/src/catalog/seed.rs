//! Built-in catalog used when no inventory snapshot exists.

use crate::catalog::{Category, Product};

/// Placeholder artwork shared by the built-in products.
pub const PLACEHOLDER_IMAGE: &str = "https://images.unsplash.com/photo-1550745165-9bc0b252726f?q=80&w=1200&auto=format&fit=crop";

/// The default product list, in relevance order.
pub fn default_catalog() -> Vec<Product> {
    let item = |id: &str, name: &str, category, price, rating| {
        Product::new(id, name, category, price)
            .with_rating(rating)
            .with_image(PLACEHOLDER_IMAGE)
    };

    vec![
        item("r1", "Top-Up 800 Coins", Category::TopUp, 49_000, 4.8).with_badge("Hot"),
        item("r2", "Top-Up 1,700 Coins", Category::TopUp, 99_000, 4.9).with_badge("Best seller"),
        item("r3", "Gift Card 10K", Category::GiftCard, 10_000, 4.7).with_badge("New"),
        item("r4", "Gift Card 25K", Category::GiftCard, 25_000, 4.6),
        item("r5", "Game Pass \u{2013} Builder Kit", Category::GamePass, 35_000, 4.5),
        item("r6", "Game Pass \u{2013} VIP", Category::GamePass, 69_900, 4.4),
        item("r7", "Bundle Saver A", Category::Bundle, 149_000, 4.8),
        item("r8", "Bundle Saver B", Category::Bundle, 199_000, 4.9),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Inventory;

    #[test]
    fn test_default_catalog_is_a_valid_inventory() {
        let inventory = Inventory::from_products(default_catalog()).unwrap();
        assert_eq!(inventory.len(), 8);
        assert_eq!(inventory.products()[0].id().as_str(), "r1");
    }

    #[test]
    fn test_every_category_is_stocked() {
        let catalog = default_catalog();
        for category in Category::ALL {
            assert_eq!(catalog.iter().filter(|p| p.category == category).count(), 2);
        }
    }
}
