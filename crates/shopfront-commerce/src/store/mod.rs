//! Persistent stores.
//!
//! Each store owns one snapshot key in a [`KeyValueStore`]. A store loads its
//! snapshot once when opened, falling back to a built-in default, and writes
//! the full snapshot back after every mutation. Writes are best-effort: a
//! failed write is logged and the in-memory state stays authoritative.
//!
//! [`KeyValueStore`]: shopfront_cache::KeyValueStore

mod brand;
mod config;
mod inventory;

pub use brand::{BrandConfig, BrandStore, DEFAULT_SITE_NAME};
pub use config::{StoreConfig, DEFAULT_BRAND_KEY, DEFAULT_IDS_KEY, DEFAULT_INVENTORY_KEY};
pub use inventory::InventoryStore;
