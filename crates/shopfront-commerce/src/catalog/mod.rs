//! Product catalog module.
//!
//! Contains products, categories, the inventory collection and the built-in
//! default catalog.

mod category;
mod inventory;
mod product;
mod seed;

pub use category::{Category, CategoryFilter};
pub use inventory::Inventory;
pub use product::{Product, ProductDraft};
pub use seed::{default_catalog, PLACEHOLDER_IMAGE};
