//! Catalog query parameters.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::catalog::{CategoryFilter, Product};
use crate::error::CommerceError;
use crate::search::Filter;

/// Sort options for the product listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    /// Inventory order, untouched.
    #[default]
    Relevance,
    /// Sort by price, low to high.
    PriceAsc,
    /// Sort by price, high to low.
    PriceDesc,
    /// Sort by highest rated.
    Rating,
}

impl SortKey {
    pub const ALL: [SortKey; 4] = [
        SortKey::Relevance,
        SortKey::PriceAsc,
        SortKey::PriceDesc,
        SortKey::Rating,
    ];

    /// Wire name, as used in query strings and config.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Relevance => "relevance",
            SortKey::PriceAsc => "priceAsc",
            SortKey::PriceDesc => "priceDesc",
            SortKey::Rating => "rating",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SortKey::Relevance => "Relevance",
            SortKey::PriceAsc => "Price: Low to High",
            SortKey::PriceDesc => "Price: High to Low",
            SortKey::Rating => "Highest Rated",
        }
    }

    /// Ordering between two products under this key. `Relevance` treats every
    /// pair as equal so a stable sort keeps inventory order.
    pub fn compare(&self, a: &Product, b: &Product) -> Ordering {
        match self {
            SortKey::Relevance => Ordering::Equal,
            SortKey::PriceAsc => a.price.cmp(&b.price),
            SortKey::PriceDesc => b.price.cmp(&a.price),
            SortKey::Rating => b.rating.partial_cmp(&a.rating).unwrap_or(Ordering::Equal),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted: String = s
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .flat_map(char::to_lowercase)
            .collect();
        SortKey::ALL
            .into_iter()
            .find(|key| key.as_str().to_lowercase() == wanted)
            .ok_or_else(|| CommerceError::InvalidSortKey(s.to_string()))
    }
}

/// Parameters of one catalog listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct CatalogQuery {
    /// Free text matched against product names.
    #[serde(default)]
    pub query: String,
    /// Category restriction.
    #[serde(default)]
    pub category: CategoryFilter,
    /// Sort option.
    #[serde(default)]
    pub sort: SortKey,
}

impl CatalogQuery {
    /// Everything, in relevance order.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the text query.
    pub fn with_query(mut self, q: impl Into<String>) -> Self {
        self.query = q.into();
        self
    }

    /// Set the category restriction.
    pub fn with_category(mut self, category: impl Into<CategoryFilter>) -> Self {
        self.category = category.into();
        self
    }

    /// Set sort option.
    pub fn with_sort(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }

    /// The filters this query applies, all of which must pass.
    pub fn filters(&self) -> [Filter; 2] {
        [Filter::category(self.category), Filter::text(&self.query)]
    }
}
