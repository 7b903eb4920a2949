//! Store configuration.

use serde::{Deserialize, Serialize};

use crate::money::Currency;

/// Key holding the inventory snapshot.
pub const DEFAULT_INVENTORY_KEY: &str = "inventory";

/// Key holding every product id ever issued.
pub const DEFAULT_IDS_KEY: &str = "inventory_ids";

/// Key holding the brand settings snapshot.
pub const DEFAULT_BRAND_KEY: &str = "brand_settings";

/// Where snapshots live and how money is shown.
///
/// Every field has a default, so partial config files load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Snapshot key for the inventory.
    #[serde(default = "default_inventory_key")]
    pub inventory_key: String,

    /// Key for the issued-id history that keeps deleted ids retired.
    #[serde(default = "default_ids_key")]
    pub ids_key: String,

    /// Snapshot key for the brand settings.
    #[serde(default = "default_brand_key")]
    pub brand_key: String,

    /// Currency prices are denominated in.
    #[serde(default)]
    pub currency: Currency,
}

fn default_inventory_key() -> String {
    DEFAULT_INVENTORY_KEY.to_string()
}

fn default_ids_key() -> String {
    DEFAULT_IDS_KEY.to_string()
}

fn default_brand_key() -> String {
    DEFAULT_BRAND_KEY.to_string()
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            inventory_key: default_inventory_key(),
            ids_key: default_ids_key(),
            brand_key: default_brand_key(),
            currency: Currency::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: StoreConfig = serde_json::from_str(r#"{"currency":"USD"}"#).unwrap();
        assert_eq!(config.inventory_key, "inventory");
        assert_eq!(config.ids_key, "inventory_ids");
        assert_eq!(config.brand_key, "brand_settings");
        assert_eq!(config.currency, Currency::USD);
    }

    #[test]
    fn test_empty_config_is_default() {
        let config: StoreConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, StoreConfig::default());
        assert_eq!(config.currency, Currency::VND);
    }
}
