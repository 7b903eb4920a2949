//! Brand settings commands.

use anyhow::Result;
use shopfront_commerce::store::BrandConfig;

use super::{BrandArgs, BrandCommand};
use crate::context::Context;

/// Run the brand command.
pub fn run(args: BrandArgs, ctx: &Context) -> Result<()> {
    match args.command {
        Some(BrandCommand::Show) | None => show_brand(ctx),
        Some(BrandCommand::Set { name, logo, hero }) => set_brand(name, logo, hero, ctx),
        Some(BrandCommand::Reset) => reset_brand(ctx),
    }
}

fn print_brand(config: &BrandConfig, ctx: &Context) {
    if ctx.output.is_json() {
        ctx.output.json(config);
        return;
    }
    ctx.output.kv("site name", &config.site_name);
    ctx.output
        .kv("logo", config.logo_url.as_deref().unwrap_or("(none)"));
    ctx.output
        .kv("hero", config.hero_url.as_deref().unwrap_or("(none)"));
}

fn show_brand(ctx: &Context) -> Result<()> {
    let shop = ctx.storefront();
    ctx.output.header("Brand Settings");
    print_brand(shop.brand(), ctx);
    Ok(())
}

fn set_brand(
    name: Option<String>,
    logo: Option<String>,
    hero: Option<String>,
    ctx: &Context,
) -> Result<()> {
    let mut shop = ctx.storefront();

    let mut config = shop.brand().clone();
    if let Some(name) = name {
        config.site_name = name;
    }
    if let Some(logo) = logo {
        config.logo_url = Some(logo);
    }
    if let Some(hero) = hero {
        config.hero_url = Some(hero);
    }

    let saved = shop.save_brand(config);
    ctx.output.success("Saved brand settings");
    print_brand(saved, ctx);
    Ok(())
}

fn reset_brand(ctx: &Context) -> Result<()> {
    let mut shop = ctx.storefront();
    let saved = shop.reset_brand();
    ctx.output.success("Restored default brand settings");
    print_brand(saved, ctx);
    Ok(())
}
