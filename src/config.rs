use std::env;
use std::path::{Path, PathBuf};

use anyhow::{bail, Result};
use serde::Deserialize;

use crate::storage::StorageConfig;

/// Top-level application configuration loaded from file + environment.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub storage: StorageSection,
    pub logging: LoggingSection,
}

impl AppConfig {
    /// Load configuration from disk and environment.
    ///
    /// Environment keys nest on a double underscore, so
    /// `STOREFRONT_STORAGE__ROOT_PATH` sets `storage.root_path`.
    pub fn load() -> Result<Self> {
        let config_path =
            env::var("STOREFRONT_CONFIG").unwrap_or_else(|_| "config.toml".to_string());

        let mut builder = config::Config::builder();

        if Path::new(&config_path).exists() {
            builder = builder.add_source(config::File::from(PathBuf::from(&config_path)));
        }

        builder = builder.add_source(
            config::Environment::with_prefix("STOREFRONT")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder.build()?;
        let mut config: Self = settings.try_deserialize()?;

        config.normalize();
        Ok(config)
    }

    fn normalize(&mut self) {
        if self.logging.level.trim().is_empty() {
            self.logging.level = "info".to_string();
        }
    }

    /// Resolve the storage backend configuration.
    pub fn storage_config(&self) -> Result<StorageConfig> {
        if self.storage.root_path.trim().is_empty() {
            bail!("storage.root_path must not be empty");
        }

        Ok(StorageConfig::Local {
            root_path: PathBuf::from(&self.storage.root_path),
            fsync: self.storage.fsync,
        })
    }

    /// `host:port` the HTTP listener binds to.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageSection {
    /// Directory holding `products.json` and `orders.json`
    pub root_path: String,
    pub fsync: bool,
}

impl Default for StorageSection {
    fn default() -> Self {
        Self {
            root_path: ".".to_string(),
            fsync: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Json,
    #[default]
    Text,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_fixed_port_and_cwd() {
        let config = AppConfig::default();
        assert_eq!(config.bind_addr(), "0.0.0.0:3000");
        assert_eq!(config.logging.format, LogFormat::Text);

        match config.storage_config().unwrap() {
            StorageConfig::Local { root_path, fsync } => {
                assert_eq!(root_path, PathBuf::from("."));
                assert!(fsync);
            }
        }
    }

    #[test]
    fn test_blank_level_normalized() {
        let mut config = AppConfig::default();
        config.logging.level = "  ".to_string();
        config.normalize();
        assert_eq!(config.logging.level, "info");
    }
}
