//! CLI command implementations.

pub mod brand;
pub mod cart;
pub mod catalog;
pub mod config;
pub mod inventory;
pub mod product;

use clap::{Args, Subcommand};

/// Arguments for the catalog command.
#[derive(Args)]
pub struct CatalogArgs {
    /// Case-insensitive name search.
    #[arg(short, long, default_value = "")]
    pub query: String,

    /// Category filter (All, "Top Up", "Gift Card", "Game Pass", Bundle).
    #[arg(long, default_value = "All")]
    pub category: String,

    /// Sort key (relevance, priceAsc, priceDesc, rating).
    #[arg(short, long, default_value = "relevance")]
    pub sort: String,
}

/// Product fields shared by add and update.
#[derive(Args)]
pub struct ProductFields {
    /// Display name.
    #[arg(short, long)]
    pub name: Option<String>,

    /// Category.
    #[arg(long)]
    pub category: Option<String>,

    /// Price in minor currency units.
    #[arg(short, long)]
    pub price: Option<u64>,

    /// Rating, conventionally 0-5.
    #[arg(short, long)]
    pub rating: Option<f64>,

    /// Image URL.
    #[arg(short, long)]
    pub image: Option<String>,

    /// Badge label. Pass an empty string to clear it.
    #[arg(short, long)]
    pub badge: Option<String>,
}

/// Arguments for the product command.
#[derive(Args)]
pub struct ProductArgs {
    #[command(subcommand)]
    pub command: ProductCommand,
}

#[derive(Subcommand)]
pub enum ProductCommand {
    /// Create a product. New products are listed first.
    Add {
        #[command(flatten)]
        fields: ProductFields,
    },
    /// Update a product in place.
    Update {
        /// Product ID.
        id: String,

        #[command(flatten)]
        fields: ProductFields,
    },
    /// Delete a product.
    Delete {
        /// Product ID.
        id: String,

        /// Skip confirmation.
        #[arg(short, long)]
        yes: bool,
    },
}

/// Arguments for the inventory command.
#[derive(Args)]
pub struct InventoryArgs {
    #[command(subcommand)]
    pub command: InventoryCommand,
}

#[derive(Subcommand)]
pub enum InventoryCommand {
    /// Export every product as a JSON array.
    Export {
        /// Output file path (default: products.json, "-" for stdout).
        #[arg(short, long, default_value = "products.json")]
        output: String,
    },
    /// Replace the inventory with a JSON array of products.
    Import {
        /// Input file path.
        file: String,

        /// Skip confirmation prompt.
        #[arg(short, long)]
        yes: bool,
    },
}

/// Arguments for the brand command.
#[derive(Args)]
pub struct BrandArgs {
    #[command(subcommand)]
    pub command: Option<BrandCommand>,
}

#[derive(Subcommand)]
pub enum BrandCommand {
    /// Show the brand settings.
    Show,
    /// Change the brand settings. Omitted fields keep their value.
    Set {
        /// Site name. Empty restores the default.
        #[arg(short, long)]
        name: Option<String>,

        /// Logo URL. Empty clears it.
        #[arg(short, long)]
        logo: Option<String>,

        /// Hero banner URL. Empty clears it.
        #[arg(long)]
        hero: Option<String>,
    },
    /// Restore the default brand settings.
    Reset,
}

/// Arguments for the cart command.
#[derive(Args)]
pub struct CartArgs {
    #[command(subcommand)]
    pub command: CartCommand,
}

#[derive(Subcommand)]
pub enum CartCommand {
    /// Price a cart built from product IDs. Repeat an ID to add it again.
    Quote {
        /// Product IDs to add, in order.
        #[arg(short, long = "add", required = true)]
        add: Vec<String>,

        /// Product IDs to take one unit off after adding.
        #[arg(short, long = "remove-one")]
        remove_one: Vec<String>,
    },
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
}
