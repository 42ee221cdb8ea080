//! Server configuration.
//!
//! Values come from, lowest to highest precedence: built-in defaults, an
//! optional TOML file, environment variables and command line flags (the
//! last two are merged by [`Cli`](crate::cli::Cli)).
//!
//! ```toml
//! bind_address = "127.0.0.1"
//! port = 8080
//! catalogue_path = "dist/icons.json"
//! strict_aliases = true
//! cache_max_age = 3600
//! log_level = "debug"
//! ```

use std::net::{IpAddr, SocketAddr};
use std::path::{Path, PathBuf};

use serde::Deserialize;
use skill_icons_core::{AliasPolicy, Catalogue, IconService};

use crate::error::{Result, ServerError};
use crate::logging::{DEFAULT_LOG_LEVEL, targets};

/// Configuration for the icon server.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    /// The address to bind to.
    pub bind_address: String,
    /// The port to listen on.
    pub port: u16,
    /// Catalogue file to load. `None` uses the embedded catalogue.
    pub catalogue_path: Option<PathBuf>,
    /// Refuse to start when an alias points at a missing icon.
    pub strict_aliases: bool,
    /// `max-age` in seconds for the `Cache-Control` header.
    pub cache_max_age: u64,
    /// Default log filter when `RUST_LOG` is unset.
    pub log_level: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0".to_string(),
            port: 3000,
            catalogue_path: None,
            strict_aliases: false,
            cache_max_age: 3600,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl ServerConfig {
    /// Create a new server configuration.
    pub fn new(bind_address: impl Into<String>, port: u16) -> Self {
        Self {
            bind_address: bind_address.into(),
            port,
            ..Self::default()
        }
    }

    /// Parse a configuration from TOML text. Missing keys keep defaults.
    pub fn from_toml_str(text: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Read a configuration file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ServerError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text).map_err(|source| ServerError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(target: targets::CONFIG, path = %path.display(), "Loaded config file");
        Ok(config)
    }

    /// Set the catalogue file.
    pub fn catalogue_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.catalogue_path = Some(path.into());
        self
    }

    /// Enable or disable strict alias checking.
    pub fn strict_aliases(mut self, enabled: bool) -> Self {
        self.strict_aliases = enabled;
        self
    }

    /// Set the `Cache-Control` max-age.
    pub fn cache_max_age(mut self, seconds: u64) -> Self {
        self.cache_max_age = seconds;
        self
    }

    /// Set the default log level.
    pub fn log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    /// Get the bind address string (address:port).
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.bind_address, self.port)
    }

    /// Parse the bind address into a socket address.
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        let ip: IpAddr = self
            .bind_address
            .parse()
            .map_err(|_| ServerError::InvalidAddress(self.bind_address.clone()))?;
        Ok(SocketAddr::new(ip, self.port))
    }

    /// Alias policy implied by `strict_aliases`.
    pub fn alias_policy(&self) -> AliasPolicy {
        if self.strict_aliases {
            AliasPolicy::Strict
        } else {
            AliasPolicy::Lenient
        }
    }

    /// The `Cache-Control` header value for successful responses.
    pub fn cache_control(&self) -> String {
        format!("public, max-age={}", self.cache_max_age)
    }

    /// Load the catalogue and build the icon service.
    pub fn load_service(&self) -> Result<IconService> {
        let catalogue = match &self.catalogue_path {
            Some(path) => Catalogue::from_path(path)?,
            None => Catalogue::embedded()?,
        };
        Ok(IconService::new(catalogue, self.alias_policy())?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.bind_addr(), "0.0.0.0:3000");
        assert_eq!(config.cache_control(), "public, max-age=3600");
        assert_eq!(config.alias_policy(), AliasPolicy::Lenient);
        assert!(config.catalogue_path.is_none());
    }

    #[test]
    fn builder() {
        let config = ServerConfig::new("127.0.0.1", 8080)
            .strict_aliases(true)
            .cache_max_age(60)
            .log_level("debug")
            .catalogue_path("icons.json");

        assert_eq!(config.bind_addr(), "127.0.0.1:8080");
        assert_eq!(config.alias_policy(), AliasPolicy::Strict);
        assert_eq!(config.cache_control(), "public, max-age=60");
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.catalogue_path, Some(PathBuf::from("icons.json")));
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config = ServerConfig::from_toml_str("port = 9000\nstrict_aliases = true").unwrap();
        assert_eq!(config.port, 9000);
        assert!(config.strict_aliases);
        assert_eq!(config.bind_address, "0.0.0.0");
        assert_eq!(config.cache_max_age, 3600);
    }

    #[test]
    fn unknown_toml_keys_are_rejected() {
        assert!(ServerConfig::from_toml_str("prot = 9000").is_err());
    }

    #[test]
    fn socket_addr() {
        let addr = ServerConfig::new("::1", 4000).socket_addr().unwrap();
        assert_eq!(addr.port(), 4000);
        assert!(addr.is_ipv6());

        let err = ServerConfig::new("localhost", 4000).socket_addr().unwrap_err();
        assert!(matches!(err, ServerError::InvalidAddress(_)));
    }
}
