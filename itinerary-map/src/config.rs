//! Server configuration.

use std::net::SocketAddr;
use std::path::PathBuf;

use crate::resolver::DEFAULT_CAPACITY;

/// Errors reading configuration from the environment.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {value:?} ({reason})")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
}

/// Configuration for the HTTP server and the resolver behind it.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    /// Address to listen on.
    pub addr: SocketAddr,

    /// `stations.json` to load the gazetteer from.
    /// `None` uses the built-in Mumbai table.
    pub gazetteer_path: Option<PathBuf>,

    /// Maximum number of stop names held in the resolver cache.
    pub resolver_cache_capacity: u64,

    /// Allow any origin (the map front end is usually served elsewhere).
    pub cors_permissive: bool,
}

impl ServerConfig {
    pub const ADDR_VAR: &'static str = "ITINERARY_MAP_ADDR";
    pub const GAZETTEER_PATH_VAR: &'static str = "GAZETTEER_PATH";
    pub const CACHE_CAPACITY_VAR: &'static str = "RESOLVER_CACHE_CAPACITY";
    pub const CORS_PERMISSIVE_VAR: &'static str = "CORS_PERMISSIVE";

    /// Read configuration from the process environment.
    ///
    /// Unset variables take their defaults; set but unparseable ones are errors.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read configuration through `lookup`, which maps a variable name to
    /// its value if set.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup(Self::ADDR_VAR) {
            config.addr = value.trim().parse().map_err(|e: std::net::AddrParseError| {
                ConfigError::Invalid {
                    var: Self::ADDR_VAR,
                    value: value.clone(),
                    reason: e.to_string(),
                }
            })?;
        }

        if let Some(value) = lookup(Self::GAZETTEER_PATH_VAR)
            && !value.trim().is_empty()
        {
            config.gazetteer_path = Some(PathBuf::from(value.trim()));
        }

        if let Some(value) = lookup(Self::CACHE_CAPACITY_VAR) {
            config.resolver_cache_capacity =
                value.trim().parse().map_err(|e: std::num::ParseIntError| {
                    ConfigError::Invalid {
                        var: Self::CACHE_CAPACITY_VAR,
                        value: value.clone(),
                        reason: e.to_string(),
                    }
                })?;
        }

        if let Some(value) = lookup(Self::CORS_PERMISSIVE_VAR) {
            config.cors_permissive = parse_flag(&value).ok_or_else(|| ConfigError::Invalid {
                var: Self::CORS_PERMISSIVE_VAR,
                value: value.clone(),
                reason: "expected true/false".to_string(),
            })?;
        }

        Ok(config)
    }

    /// Set the listen address.
    pub fn with_addr(mut self, addr: SocketAddr) -> Self {
        self.addr = addr;
        self
    }

    /// Load the gazetteer from a file instead of the built-in table.
    pub fn with_gazetteer_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.gazetteer_path = Some(path.into());
        self
    }

    /// Set the resolver cache capacity.
    pub fn with_resolver_cache_capacity(mut self, capacity: u64) -> Self {
        self.resolver_cache_capacity = capacity;
        self
    }

    /// Enable or disable permissive CORS.
    pub fn with_cors_permissive(mut self, permissive: bool) -> Self {
        self.cors_permissive = permissive;
        self
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            gazetteer_path: None,
            resolver_cache_capacity: DEFAULT_CAPACITY,
            cors_permissive: true,
        }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
