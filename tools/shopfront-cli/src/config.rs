//! CLI configuration.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use shopfront_commerce::store::StoreConfig;

/// CLI configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CliConfig {
    /// Snapshot keys and currency.
    #[serde(default)]
    pub store: StoreConfig,

    /// Where snapshots are kept on disk.
    #[serde(default)]
    pub data: DataConfig,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        if path.ends_with(".json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }
}

/// Data directory configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataConfig {
    /// Directory holding one JSON file per snapshot key (default: .shopfront).
    #[serde(default = "default_data_dir")]
    pub dir: String,
}

fn default_data_dir() -> String {
    ".shopfront".to_string()
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            dir: default_data_dir(),
        }
    }
}

/// Generate a default shopfront.toml config file.
pub fn generate_default_config() -> String {
    r#"# Shopfront configuration

[store]
inventory_key = "inventory"
ids_key = "inventory_ids"
brand_key = "brand_settings"
# One of VND, USD, EUR
currency = "VND"

[data]
dir = ".shopfront"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use shopfront_commerce::Currency;

    #[test]
    fn test_generated_config_parses() {
        let config: CliConfig = toml::from_str(&generate_default_config()).unwrap();
        assert_eq!(config.store, StoreConfig::default());
        assert_eq!(config.data.dir, ".shopfront");
    }

    #[test]
    fn test_partial_config() {
        let config: CliConfig = toml::from_str("[store]\ncurrency = \"USD\"\n").unwrap();
        assert_eq!(config.store.currency, Currency::USD);
        assert_eq!(config.store.inventory_key, "inventory");
        assert_eq!(config.data.dir, ".shopfront");
    }

    #[test]
    fn test_load_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shopfront.json");
        std::fs::write(&path, r#"{"data":{"dir":"state"},"store":{"currency":"EUR"}}"#).unwrap();

        let loaded = CliConfig::load(path.to_str().unwrap()).unwrap();
        assert_eq!(loaded.data.dir, "state");
        assert_eq!(loaded.store.currency, Currency::EUR);
    }
}
