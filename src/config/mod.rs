//! Configuration loading and management
//!
//! Configuration is a YAML document with two sections:
//!
//! ```yaml
//! server:
//!   host: 127.0.0.1
//!   port: 5000
//! seed:
//!   dishes: [...]
//!   orders: [...]
//! ```
//!
//! Every key is optional; missing keys take their defaults.

use crate::entities::{Dish, Order};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable naming the YAML file to load
pub const CONFIG_ENV: &str = "GRUBDASH_CONFIG";

/// Environment variable overriding `server.port`
pub const PORT_ENV: &str = "PORT";

/// File loaded when `GRUBDASH_CONFIG` is unset, if it exists
pub const DEFAULT_CONFIG_PATH: &str = "config/grubdash.yaml";

/// Listener settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    /// `host:port`, ready for binding
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
        }
    }
}

/// Records loaded into the store at startup
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeedConfig {
    pub dishes: Vec<Dish>,
    pub orders: Vec<Order>,
}

/// Complete application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub seed: SeedConfig,
}

impl AppConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::from_yaml_str(&content)
            .with_context(|| format!("failed to parse config file {}", path.display()))
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    /// Resolve configuration from the process environment
    ///
    /// - `GRUBDASH_CONFIG` names the file to load, which must exist
    /// - otherwise `config/grubdash.yaml` is loaded when present
    /// - otherwise defaults are used
    ///
    /// `PORT` overrides the configured port in every case.
    pub fn load() -> Result<Self> {
        let explicit = std::env::var_os(CONFIG_ENV).map(PathBuf::from);
        let port = std::env::var(PORT_ENV).ok();
        Self::resolve(explicit.as_deref(), Path::new(DEFAULT_CONFIG_PATH))?
            .with_port_override(port.as_deref())
    }

    fn resolve(explicit: Option<&Path>, fallback: &Path) -> Result<Self> {
        match explicit {
            Some(path) => {
                tracing::info!("Loading configuration from {}", path.display());
                Self::from_yaml_file(path)
            }
            None if fallback.exists() => {
                tracing::info!("Loading configuration from {}", fallback.display());
                Self::from_yaml_file(fallback)
            }
            None => {
                tracing::info!("No configuration file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Replace the port with `port`, if given
    pub fn with_port_override(mut self, port: Option<&str>) -> Result<Self> {
        if let Some(port) = port {
            self.server.port = port
                .trim()
                .parse()
                .with_context(|| format!("invalid {} value '{}'", PORT_ENV, port))?;
        }
        Ok(self)
    }
}
