use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Optional settings read from `.rebatch/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Store key used when none is given on the command line
    #[serde(default = "default_store_id")]
    pub store_id: String,

    /// Whether to use color output by default (None = auto-detect)
    #[serde(default)]
    pub use_color: Option<bool>,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            store_id: default_store_id(),
            use_color: None,
        }
    }
}

fn default_store_id() -> String {
    crate::journal::DEFAULT_STORE_ID.to_string()
}

impl Config {
    /// Load config from .rebatch/config.toml in the current directory,
    /// falling back to defaults when the file does not exist.
    pub fn load() -> Result<Self> {
        if let Ok(cwd) = std::env::current_dir() {
            let config_path = cwd.join(".rebatch").join("config.toml");
            if config_path.exists() {
                return Self::load_from_path(&config_path);
            }
        }

        Ok(Self::default())
    }

    /// Load config from a specific path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }
}
