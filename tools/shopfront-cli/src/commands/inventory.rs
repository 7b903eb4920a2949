//! Bulk inventory export and import.

use std::fs;

use anyhow::{Context as _, Result};
use dialoguer::Confirm;

use super::{InventoryArgs, InventoryCommand};
use crate::context::Context;

/// Run the inventory command.
pub fn run(args: InventoryArgs, ctx: &Context) -> Result<()> {
    match args.command {
        InventoryCommand::Export { output } => export_inventory(&output, ctx),
        InventoryCommand::Import { file, yes } => import_inventory(&file, yes, ctx),
    }
}

fn export_inventory(output: &str, ctx: &Context) -> Result<()> {
    let shop = ctx.storefront();
    let json = shop.export_json()?;

    if output == "-" {
        println!("{}", json);
        return Ok(());
    }

    let path = ctx.resolve_path(output);
    fs::write(&path, json).with_context(|| format!("Failed to write {}", path.display()))?;

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "path": path.display().to_string(),
            "count": shop.inventory().len(),
        }));
    } else {
        ctx.output.success(&format!(
            "Exported {} products to {}",
            shop.inventory().len(),
            path.display()
        ));
    }
    Ok(())
}

fn import_inventory(file: &str, yes: bool, ctx: &Context) -> Result<()> {
    let path = ctx.resolve_path(file);
    let payload = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let mut shop = ctx.storefront();

    if !yes {
        let confirmed = Confirm::new()
            .with_prompt(format!(
                "Replace all {} products with the contents of {}?",
                shop.inventory().len(),
                path.display()
            ))
            .default(false)
            .interact()?;

        if !confirmed {
            ctx.output.warn("Import cancelled");
            return Ok(());
        }
    }

    let count = shop
        .import_json(&payload)
        .with_context(|| format!("{} was not imported", path.display()))?;

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({ "count": count }));
    } else {
        ctx.output.success(&format!("Imported {} products", count));
    }
    Ok(())
}
