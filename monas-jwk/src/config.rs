//! Configuration for the HTTP service.

use serde::{Deserialize, Serialize};
use std::net::{IpAddr, SocketAddr};
use std::path::Path;

/// Environment variable naming an optional TOML configuration file.
pub const CONFIG_PATH_ENV: &str = "MONAS_JWK_CONFIG";

/// Environment variable overriding the listen port.
pub const PORT_ENV: &str = "MONAS_JWK_PORT";

/// HTTP service configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Listen address (e.g., "127.0.0.1")
    #[serde(default = "default_host")]
    pub host: String,

    /// Listen port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Externally reachable base URL shown on the usage page
    /// (e.g., "https://keys.example.com/prod"). Derived from request headers when unset.
    #[serde(default)]
    pub public_base_url: Option<String>,

    /// Log level used when `RUST_LOG` is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            public_base_url: None,
            log_level: default_log_level(),
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    4003
}

fn default_log_level() -> String {
    "info".to_string()
}

impl ServerConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::IoError(e.to_string()))?;

        Self::from_toml_str(&content)
    }

    /// Load configuration from a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// Load configuration from `MONAS_JWK_CONFIG` (if set) and apply
    /// `MONAS_JWK_PORT` on top.
    pub fn from_env() -> Result<Self, ConfigError> {
        let config = match std::env::var(CONFIG_PATH_ENV) {
            Ok(path) => Self::from_file(path)?,
            Err(_) => Self::default(),
        };
        config.with_port_override(std::env::var(PORT_ENV).ok().as_deref())
    }

    fn with_port_override(mut self, port: Option<&str>) -> Result<Self, ConfigError> {
        if let Some(port) = port {
            self.port = port
                .parse()
                .map_err(|_| ConfigError::InvalidValue(format!("{PORT_ENV}={port}")))?;
        }
        Ok(self)
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|_| ConfigError::InvalidValue(format!("host={}", self.host)))?;
        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Invalid value: {0}")]
    InvalidValue(String),
}
