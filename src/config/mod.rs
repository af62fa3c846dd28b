//! Configuration loading and management

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Errors raised while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// Server configuration.
///
/// Every field has a sane local default; a YAML file and environment
/// variables can override them. The base URL is prefixed to generated
/// links and `Location` headers; leaving it empty produces relative
/// paths, which is what the bundled front-end expects.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address the HTTP listener binds to
    pub bind_addr: String,

    /// Prefix for generated links and Location headers
    pub public_base_url: String,

    /// The single origin allowed to make cross-origin calls
    pub client_origin: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:8080".to_string(),
            public_base_url: String::new(),
            client_origin: "http://localhost:4200".to_string(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    /// Load configuration for the binary.
    ///
    /// Reads the file named by `CATALOG_CONFIG` when set, otherwise
    /// starts from defaults, then applies per-field environment
    /// overrides.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = match std::env::var("CATALOG_CONFIG") {
            Ok(path) => Self::from_yaml_file(path)?,
            Err(_) => Self::default(),
        };
        config.apply_env_overrides();
        Ok(config)
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(addr) = std::env::var("CATALOG_BIND_ADDR") {
            self.bind_addr = addr;
        }
        if let Ok(base) = std::env::var("CATALOG_BASE_URL") {
            self.public_base_url = base;
        }
        if let Ok(origin) = std::env::var("CATALOG_CLIENT_ORIGIN") {
            self.client_origin = origin;
        }
    }
}
