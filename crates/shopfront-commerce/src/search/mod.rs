//! Catalog view module.
//!
//! Filters and sorts the inventory into the product listing shown to
//! shoppers. Everything here is a pure projection over borrowed products.

mod filter;
mod query;
mod view;

pub use filter::Filter;
pub use query::{CatalogQuery, SortKey};
pub use view::view;
