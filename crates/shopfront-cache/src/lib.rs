//! Key-Value persistence layer for Shopfront.
//!
//! Stores are plain string maps addressed by key. The storefront keeps one
//! key per snapshot (inventory, brand settings) and serializes through the
//! typed [`Cache`] wrapper.
//!
//! # Example
//!
//! ```rust
//! use shopfront_cache::{Cache, MemoryStore};
//!
//! let cache = Cache::new(MemoryStore::new());
//!
//! cache.set("brand_settings", &vec!["Shop Code"]).unwrap();
//! let names: Option<Vec<String>> = cache.get("brand_settings").unwrap();
//! assert_eq!(names, Some(vec!["Shop Code".to_string()]));
//!
//! cache.delete("brand_settings").unwrap();
//! assert!(!cache.exists("brand_settings").unwrap());
//! ```

mod error;
mod kv;
mod store;

pub use error::CacheError;
pub use kv::Cache;
#[cfg(target_arch = "wasm32")]
pub use store::SpinStore;
pub use store::{FileStore, KeyValueStore, MemoryStore};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{Cache, CacheError, FileStore, KeyValueStore, MemoryStore};
}
