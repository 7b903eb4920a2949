//! Listing filters.

use crate::catalog::{CategoryFilter, Product};

/// A predicate over products.
#[derive(Debug, Clone, PartialEq)]
pub enum Filter {
    /// Keep products in the given category (or all of them).
    Category(CategoryFilter),
    /// Keep products whose name contains this lowercased, trimmed text.
    Text(String),
}

impl Filter {
    /// Create a category filter.
    pub fn category(filter: impl Into<CategoryFilter>) -> Self {
        Filter::Category(filter.into())
    }

    /// Create a name search filter. Surrounding whitespace is ignored and the
    /// match is case-insensitive.
    pub fn text(query: &str) -> Self {
        Filter::Text(query.trim().to_lowercase())
    }

    /// Check whether a product passes this filter.
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            Filter::Category(filter) => filter.matches(product.category),
            Filter::Text(needle) => product.name_contains(needle),
        }
    }
}
