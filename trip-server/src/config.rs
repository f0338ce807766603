//! Server configuration from the environment.

use std::net::{AddrParseError, SocketAddr};
use std::path::PathBuf;

use crate::data::DataFiles;
use crate::lookup::{RouteMatchMode, UnknownRouteMatchMode};

/// Directory holding the CSV tables.
pub const DATA_DIR_VAR: &str = "TRIP_DATA_DIR";

/// Address the HTTP server listens on.
pub const BIND_ADDR_VAR: &str = "TRIP_BIND_ADDR";

/// Route match mode, `structural` or `substring`.
pub const ROUTE_MATCH_VAR: &str = "TRIP_ROUTE_MATCH";

/// Error reading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid TRIP_BIND_ADDR '{value}': {source}")]
    BindAddr {
        value: String,
        source: AddrParseError,
    },

    #[error("invalid TRIP_ROUTE_MATCH: {0}")]
    RouteMatch(#[from] UnknownRouteMatchMode),
}

/// Configuration for the server binary.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub data_dir: PathBuf,
    pub bind_addr: SocketAddr,
    pub route_match: RouteMatchMode,
    pub files: DataFiles,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            route_match: RouteMatchMode::default(),
            files: DataFiles::default(),
        }
    }
}

impl ServerConfig {
    /// Read configuration from process environment variables.
    ///
    /// Unset or blank variables keep their defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`, which maps a variable name to
    /// its value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(dir) = get(DATA_DIR_VAR) {
            config.data_dir = PathBuf::from(dir);
        }

        if let Some(value) = get(BIND_ADDR_VAR) {
            config.bind_addr = value
                .trim()
                .parse()
                .map_err(|source| ConfigError::BindAddr { value, source })?;
        }

        if let Some(mode) = get(ROUTE_MATCH_VAR) {
            config.route_match = mode.parse()?;
        }

        Ok(config)
    }
}
