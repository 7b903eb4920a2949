//! Brand settings: site name plus optional logo and hero images.

use serde::{Deserialize, Deserializer, Serialize};
use shopfront_cache::{Cache, CacheError, KeyValueStore};
use tracing::{debug, warn};

/// Site name used when none is configured.
pub const DEFAULT_SITE_NAME: &str = "Shop Code";

/// Storefront branding.
///
/// On disk the record is always fully populated: absent URLs are written as
/// empty strings, and empty strings read back as absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandConfig {
    #[serde(default = "default_site_name", deserialize_with = "site_name_or_default")]
    pub site_name: String,

    #[serde(default, with = "blank")]
    pub logo_url: Option<String>,

    #[serde(default, with = "blank")]
    pub hero_url: Option<String>,
}

impl BrandConfig {
    pub fn new(site_name: impl Into<String>) -> Self {
        Self {
            site_name: site_name.into(),
            logo_url: None,
            hero_url: None,
        }
    }

    pub fn with_logo(mut self, url: impl Into<String>) -> Self {
        self.logo_url = Some(url.into());
        self
    }

    pub fn with_hero(mut self, url: impl Into<String>) -> Self {
        self.hero_url = Some(url.into());
        self
    }

    /// Trim every field; a blank name becomes the default and blank URLs
    /// become absent.
    pub fn normalized(self) -> Self {
        let site_name = match self.site_name.trim() {
            "" => default_site_name(),
            name => name.to_string(),
        };
        Self {
            site_name,
            logo_url: non_blank(self.logo_url),
            hero_url: non_blank(self.hero_url),
        }
    }
}

impl Default for BrandConfig {
    fn default() -> Self {
        Self::new(DEFAULT_SITE_NAME)
    }
}

fn default_site_name() -> String {
    DEFAULT_SITE_NAME.to_string()
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn site_name_or_default<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let name = Option::<String>::deserialize(deserializer)?;
    Ok(match name.as_deref().map(str::trim) {
        None | Some("") => default_site_name(),
        Some(name) => name.to_string(),
    })
}

/// `Option<String>` stored as a plain string, empty meaning `None`.
mod blank {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Option<String>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(value.as_deref().unwrap_or(""))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<String>::deserialize(deserializer)?;
        Ok(super::non_blank(value))
    }
}

/// Owns the brand settings and keeps their snapshot in sync.
pub struct BrandStore<S> {
    cache: Cache<S>,
    key: String,
    config: BrandConfig,
}

impl<S: KeyValueStore> BrandStore<S> {
    /// Open the store, loading the snapshot under `key`.
    pub fn open(store: S, key: impl Into<String>) -> Self {
        let cache = Cache::new(store);
        let key = key.into();
        let config = read_snapshot(&cache, &key);
        Self { cache, key, config }
    }

    pub fn config(&self) -> &BrandConfig {
        &self.config
    }

    /// Read the persisted settings, falling back to the defaults.
    pub fn load_snapshot(&self) -> BrandConfig {
        read_snapshot(&self.cache, &self.key)
    }

    pub fn save_snapshot(&self) -> Result<(), CacheError> {
        self.cache.set(&self.key, &self.config)
    }

    /// Replace the settings and persist them.
    pub fn save(&mut self, config: BrandConfig) -> &BrandConfig {
        self.config = config.normalized();
        debug!(site_name = %self.config.site_name, "Saved brand settings");
        self.persist();
        &self.config
    }

    /// Restore the default settings and persist them.
    pub fn reset(&mut self) -> &BrandConfig {
        self.save(BrandConfig::default())
    }

    fn persist(&self) {
        if let Err(e) = self.save_snapshot() {
            warn!(key = %self.key, error = %e, "Failed to persist brand settings");
        }
    }
}

fn read_snapshot<S: KeyValueStore>(cache: &Cache<S>, key: &str) -> BrandConfig {
    match cache.get::<BrandConfig>(key) {
        Ok(Some(config)) => config,
        Ok(None) => BrandConfig::default(),
        Err(e) => {
            warn!(key, error = %e, "Unreadable brand settings; using defaults");
            BrandConfig::default()
        }
    }
}
