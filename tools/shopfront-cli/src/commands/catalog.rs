//! Catalog listing.

use anyhow::{Context as _, Result};
use shopfront_commerce::catalog::CategoryFilter;
use shopfront_commerce::search::{CatalogQuery, SortKey};

use super::CatalogArgs;
use crate::context::Context;
use crate::output::{badge, rating, truncate};

/// Run the catalog command.
pub fn run(args: CatalogArgs, ctx: &Context) -> Result<()> {
    let category: CategoryFilter = args
        .category
        .parse()
        .with_context(|| format!("Invalid --category '{}'", args.category))?;
    let sort: SortKey = args
        .sort
        .parse()
        .with_context(|| format!("Invalid --sort '{}'", args.sort))?;

    let query = CatalogQuery::new()
        .with_query(args.query)
        .with_category(category)
        .with_sort(sort);

    let shop = ctx.storefront();
    let products = shop.catalog(&query);

    if ctx.output.is_json() {
        ctx.output.json(&products);
        return Ok(());
    }

    ctx.output.header(&format!(
        "{} ({}, {})",
        shop.brand().site_name,
        category,
        sort.display_name()
    ));

    if products.is_empty() {
        ctx.output.info("No products match.");
        return Ok(());
    }

    let widths = [10, 28, 10, 14, 6];
    ctx.output
        .table_row(&["ID", "NAME", "CATEGORY", "PRICE", "RATING"], &widths);
    for product in &products {
        let name = truncate(&product.name, widths[1]);
        let price = shop.format_money(product.price);
        let stars = rating(product.rating);
        let category = product.category.to_string();
        ctx.output.table_row(
            &[product.id().as_str(), &name, &category, &price, &stars],
            &widths,
        );
        if let Some(label) = &product.badge {
            ctx.output.kv("badge", &badge(label));
        }
    }

    ctx.output.info("");
    ctx.output.info(&format!(
        "{} of {} products",
        products.len(),
        shop.inventory().len()
    ));

    Ok(())
}
