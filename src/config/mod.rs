// Configuration module

mod models;

pub use models::*;

use crate::error::{BridgeError, Result};
use config::{Config, Environment, File};
use std::path::{Path, PathBuf};

impl AppConfig {
    /// Load configuration from multiple sources with precedence:
    /// 1. Environment variables (highest, prefix `LANGBRIDGE_`)
    /// 2. Config file (`path`, or `~/.langbridge/config.toml` when present)
    /// 3. Defaults (lowest)
    ///
    /// CLI flags are applied on top by the caller.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let file = match path {
            Some(path) => File::from(path).required(true),
            None => File::with_name(&Self::default_config_path()).required(false),
        };

        let config = Config::builder()
            .add_source(Config::try_from(&Self::default())?)
            .add_source(file)
            .add_source(
                Environment::with_prefix("LANGBRIDGE")
                    .prefix_separator("_")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("models.directions")
                    .with_list_parse_key("access.allowed_origins")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| BridgeError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| BridgeError::Config(e.to_string()))
    }

    fn default_config_path() -> String {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".langbridge")
            .join("config.toml")
            .to_string_lossy()
            .to_string()
    }
}
