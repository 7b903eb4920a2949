//! Catalog and cart state for a digital-goods storefront.
//!
//! This crate holds the state transitions and derived views behind the shop:
//!
//! - **Catalog**: Products, categories, the inventory and its default seed
//! - **Cart**: Pure cart operations, item counts, totals and line pricing
//! - **Search**: Filtered and sorted catalog listings
//! - **Store**: Snapshot-backed inventory and brand settings
//! - **Storefront**: One context object owning all of the above
//!
//! # Example
//!
//! ```rust
//! use shopfront_cache::MemoryStore;
//! use shopfront_commerce::prelude::*;
//! use std::sync::Arc;
//!
//! let mut shop = Storefront::open(Arc::new(MemoryStore::new()), StoreConfig::default());
//!
//! // Browse the catalog
//! let query = CatalogQuery::new()
//!     .with_query("gift")
//!     .with_sort(SortKey::PriceAsc);
//! let cheapest = shop.catalog(&query)[0].id().clone();
//!
//! // Fill the cart
//! shop.add_to_cart(&cheapest);
//! shop.add_to_cart(&cheapest);
//!
//! assert_eq!(shop.cart_item_count(), 2);
//! assert_eq!(shop.format_money(shop.cart_total()), "20.000 \u{20ab}");
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod search;
pub mod store;

mod storefront;

pub use error::CommerceError;
pub use ids::*;
pub use money::{Currency, Money, MoneyFormatter};
pub use storefront::Storefront;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money, MoneyFormatter};
    pub use crate::storefront::Storefront;

    // Catalog
    pub use crate::catalog::{Category, CategoryFilter, Inventory, Product, ProductDraft};

    // Cart
    pub use crate::cart::{cart_item_count, cart_total, Cart, CartLine, CartPricing, LineItemPricing};

    // Search
    pub use crate::search::{view, CatalogQuery, Filter, SortKey};

    // Store
    pub use crate::store::{BrandConfig, BrandStore, InventoryStore, StoreConfig};
}
