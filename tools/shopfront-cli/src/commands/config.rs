//! Configuration management commands.

use std::fs;

use anyhow::{bail, Result};

use super::{ConfigArgs, ConfigCommand};
use crate::config::generate_default_config;
use crate::context::{Context, CONFIG_NAMES};

/// Run the config command.
pub fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Init { force } => init_config(force, ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    ctx.output.header("Current Configuration");

    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    match &ctx.root {
        Some(root) => ctx.output.kv("config dir", &root.display().to_string()),
        None => ctx.output.info("No config file found; using defaults"),
    }

    ctx.output.info("");
    ctx.output.info("[store]");
    ctx.output.kv("inventory_key", &ctx.config.store.inventory_key);
    ctx.output.kv("ids_key", &ctx.config.store.ids_key);
    ctx.output.kv("brand_key", &ctx.config.store.brand_key);
    ctx.output.kv("currency", ctx.config.store.currency.code());

    ctx.output.info("");
    ctx.output.info("[data]");
    ctx.output.kv("dir", &ctx.config.data.dir);
    ctx.output
        .kv("resolved", &ctx.data_dir().display().to_string());

    Ok(())
}

fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join(CONFIG_NAMES[0]);

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    fs::write(&config_path, generate_default_config())?;

    ctx.output
        .success(&format!("Created: {}", config_path.display()));

    Ok(())
}
