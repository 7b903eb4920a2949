//! Cart quoting.
//!
//! Carts are never persisted, so a quote builds one from scratch, prices it
//! against the stored inventory and throws it away.

use anyhow::Result;
use shopfront_commerce::ProductId;

use super::{CartArgs, CartCommand};
use crate::context::Context;

/// Run the cart command.
pub fn run(args: CartArgs, ctx: &Context) -> Result<()> {
    match args.command {
        CartCommand::Quote { add, remove_one } => quote(&add, &remove_one, ctx),
    }
}

fn quote(add: &[String], remove_one: &[String], ctx: &Context) -> Result<()> {
    let mut shop = ctx.storefront();

    for id in add {
        shop.add_to_cart(&ProductId::new(id.as_str()));
    }
    for id in remove_one {
        shop.decrement(&ProductId::new(id.as_str()));
    }

    let pricing = shop.cart_pricing();

    if ctx.output.is_json() {
        ctx.output.json(&pricing);
        return Ok(());
    }

    ctx.output.header("Cart");
    if !shop.checkout_available() {
        ctx.output.info("Cart is empty.");
        return Ok(());
    }

    let widths = [10, 28, 5, 14];
    ctx.output.table_row(&["ID", "NAME", "QTY", "TOTAL"], &widths);
    for item in &pricing.line_items {
        let quantity = item.quantity.to_string();
        let total = shop.format_money(item.total);
        ctx.output.table_row(
            &[item.product_id.as_str(), &item.name, &quantity, &total],
            &widths,
        );
    }

    for stale in &pricing.stale_lines {
        ctx.output
            .warn(&format!("Unknown product '{}' was not priced", stale));
    }

    ctx.output.info("");
    ctx.output.kv("items", &pricing.item_count.to_string());
    ctx.output.kv("total", &shop.format_money(pricing.total));
    Ok(())
}
