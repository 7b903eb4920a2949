//! The derived product listing.

use crate::catalog::{Inventory, Product};
use crate::search::CatalogQuery;

/// Filter and sort the inventory for display.
///
/// Keeps products passing every filter of `query`, then orders them by its
/// sort key. The sort is stable, so ties (and the whole list under
/// relevance) keep inventory order. The inventory itself is never touched.
pub fn view<'a>(inventory: &'a Inventory, query: &CatalogQuery) -> Vec<&'a Product> {
    let filters = query.filters();
    let mut listing: Vec<&Product> = inventory
        .iter()
        .filter(|product| filters.iter().all(|f| f.matches(product)))
        .collect();

    let sort = query.sort;
    listing.sort_by(|a, b| sort.compare(a, b));
    listing
}
