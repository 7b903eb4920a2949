//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use shopfront_cache::FileStore;
use shopfront_commerce::Storefront;
use tracing::debug;

use crate::config::CliConfig;
use crate::output::Output;

/// Config file names searched for, in order, in each directory.
pub const CONFIG_NAMES: [&str; 3] = ["shopfront.toml", ".shopfront.toml", "shopfront.json"];

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
    /// Directory the config was found in, if any.
    pub root: Option<PathBuf>,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, root) = if let Some(path) = config_path {
            let root = Path::new(path).parent().map(Path::to_path_buf);
            (CliConfig::load(path)?, root)
        } else {
            // Try to find config in current directory or parent directories
            match Self::find_config(&cwd) {
                Some((config, root)) => (config, Some(root)),
                None => (CliConfig::default(), None),
            }
        };

        Ok(Self {
            config,
            output,
            cwd,
            root,
        })
    }

    /// Find config file in directory tree.
    fn find_config(start: &Path) -> Option<(CliConfig, PathBuf)> {
        let mut current = start.to_path_buf();
        loop {
            for name in &CONFIG_NAMES {
                let config_path = current.join(name);
                if config_path.exists() {
                    if let Ok(config) = CliConfig::load(config_path.to_str()?) {
                        debug!(path = %config_path.display(), "Loaded config");
                        return Some((config, current));
                    }
                }
            }

            if !current.pop() {
                break;
            }
        }

        None
    }

    /// Directory holding the snapshot files.
    ///
    /// Relative paths are resolved against the directory the config came from,
    /// falling back to the working directory.
    pub fn data_dir(&self) -> PathBuf {
        let dir = Path::new(&self.config.data.dir);
        if dir.is_absolute() {
            dir.to_path_buf()
        } else {
            self.root.as_deref().unwrap_or(&self.cwd).join(dir)
        }
    }

    /// Open a storefront over the data directory.
    pub fn storefront(&self) -> Storefront<FileStore> {
        let dir = self.data_dir();
        self.output
            .debug(&format!("Using data directory {}", dir.display()));
        Storefront::open(FileStore::open(dir), self.config.store.clone())
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        if PathBuf::from(path).is_absolute() {
            PathBuf::from(path)
        } else {
            self.cwd.join(path)
        }
    }
}
