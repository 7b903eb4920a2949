//! Shopfront CLI - Command line tool for a Shopfront catalog.
//!
//! Commands:
//! - `shopfront catalog` - List products, filtered and sorted
//! - `shopfront product` - Create, update or delete a product
//! - `shopfront inventory` - Export or import the whole inventory as JSON
//! - `shopfront brand` - Show, set or reset the brand settings
//! - `shopfront cart` - Price an ad-hoc cart
//! - `shopfront config` - Manage configuration

mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use commands::{BrandArgs, CartArgs, CatalogArgs, ConfigArgs, InventoryArgs, ProductArgs};

/// Shopfront CLI - Manage a storefront's catalog, branding and carts
#[derive(Parser)]
#[command(name = "shopfront")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the catalog
    Catalog(CatalogArgs),

    /// Create, update or delete products
    Product(ProductArgs),

    /// Bulk export and import
    Inventory(InventoryArgs),

    /// Manage brand settings
    Brand(BrandArgs),

    /// Price a cart
    Cart(CartArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .init();

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load config
    let config_path = cli.config.as_deref();
    let ctx = context::Context::load(config_path, output)?;

    // Execute command
    let result = match cli.command {
        Commands::Catalog(args) => commands::catalog::run(args, &ctx),
        Commands::Product(args) => commands::product::run(args, &ctx),
        Commands::Inventory(args) => commands::inventory::run(args, &ctx),
        Commands::Brand(args) => commands::brand::run(args, &ctx),
        Commands::Cart(args) => commands::cart::run(args, &ctx),
        Commands::Config(args) => commands::config::run(args, &ctx),
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
