//! Product create, update and delete.

use anyhow::{bail, Context as _, Result};
use dialoguer::Confirm;
use shopfront_commerce::catalog::{Category, Product, ProductDraft, PLACEHOLDER_IMAGE};
use shopfront_commerce::ProductId;

use super::{ProductArgs, ProductCommand, ProductFields};
use crate::context::Context;

/// Run the product command.
pub fn run(args: ProductArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ProductCommand::Add { fields } => add_product(fields, ctx),
        ProductCommand::Update { id, fields } => update_product(&id, fields, ctx),
        ProductCommand::Delete { id, yes } => delete_product(&id, yes, ctx),
    }
}

fn parse_category(name: Option<&str>) -> Result<Option<Category>> {
    name.map(|n| {
        n.parse()
            .with_context(|| format!("Invalid --category '{}'", n))
    })
    .transpose()
}

fn add_product(fields: ProductFields, ctx: &Context) -> Result<()> {
    let Some(name) = fields.name.as_deref().filter(|n| !n.trim().is_empty()) else {
        bail!("--name is required");
    };
    let Some(price) = fields.price else {
        bail!("--price is required");
    };
    let category = parse_category(fields.category.as_deref())?.unwrap_or_default();

    let mut draft = ProductDraft::new(name, category, price)
        .with_rating(fields.rating.unwrap_or(5.0))
        .with_image(fields.image.as_deref().unwrap_or(PLACEHOLDER_IMAGE));
    if let Some(label) = fields.badge {
        draft = draft.with_badge(label);
    }

    let mut shop = ctx.storefront();
    let id = shop.create_product(draft);

    if ctx.output.is_json() {
        ctx.output.json(&shop.inventory().get(&id));
    } else {
        ctx.output.success(&format!("Created product {}", id));
    }
    Ok(())
}

fn update_product(id: &str, fields: ProductFields, ctx: &Context) -> Result<()> {
    let id = ProductId::new(id);
    let mut shop = ctx.storefront();

    let Some(current) = shop.inventory().get(&id) else {
        bail!("No product with id '{}'", id);
    };
    let draft = merge(current, fields)?;

    let Some(updated) = shop.update_product(&id, draft) else {
        bail!("No product with id '{}'", id);
    };

    if ctx.output.is_json() {
        ctx.output.json(updated);
    } else {
        ctx.output
            .success(&format!("Updated {} ({})", updated.id(), updated.name));
    }
    Ok(())
}

/// Overlay the given flags on the product's current fields.
fn merge(current: &Product, fields: ProductFields) -> Result<ProductDraft> {
    let mut draft = ProductDraft::from(current);
    if let Some(name) = fields.name {
        draft.name = name;
    }
    if let Some(category) = parse_category(fields.category.as_deref())? {
        draft.category = category;
    }
    if let Some(price) = fields.price {
        draft.price = price;
    }
    if let Some(rating) = fields.rating {
        draft.rating = rating;
    }
    if let Some(image) = fields.image {
        draft.image = image;
    }
    if let Some(badge) = fields.badge {
        draft.badge = Some(badge);
    }
    Ok(draft)
}

fn delete_product(id: &str, yes: bool, ctx: &Context) -> Result<()> {
    let id = ProductId::new(id);
    let mut shop = ctx.storefront();

    let Some(product) = shop.inventory().get(&id) else {
        ctx.output.warn(&format!("No product with id '{}'", id));
        return Ok(());
    };

    if !yes {
        let confirmed = Confirm::new()
            .with_prompt(format!("Delete '{}'?", product.name))
            .default(false)
            .interact()?;

        if !confirmed {
            ctx.output.warn("Delete cancelled");
            return Ok(());
        }
    }

    if let Some(removed) = shop.delete_product(&id) {
        ctx.output.success(&format!("Deleted {} ({})", id, removed.name));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields() -> ProductFields {
        ProductFields {
            name: None,
            category: None,
            price: None,
            rating: None,
            image: None,
            badge: None,
        }
    }

    #[test]
    fn test_merge_keeps_unset_fields() {
        let current = Product::new("r9", "Gift Card 50K", Category::GiftCard, 50_000)
            .with_badge("Hot");
        let draft = merge(
            &current,
            ProductFields {
                price: Some(45_000),
                ..fields()
            },
        )
        .unwrap();

        assert_eq!(draft.name, "Gift Card 50K");
        assert_eq!(draft.price, 45_000);
        assert_eq!(draft.badge.as_deref(), Some("Hot"));
    }

    #[test]
    fn test_merge_rejects_unknown_category() {
        let current = Product::new("r9", "X", Category::Bundle, 1);
        let result = merge(
            &current,
            ProductFields {
                category: Some("Skins".into()),
                ..fields()
            },
        );
        assert!(result.is_err());
    }
}
