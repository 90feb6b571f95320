//! Server settings read from the environment (and `.env` via dotenvy in main)

use std::net::SocketAddr;
use std::path::PathBuf;

use crate::common::ConfigError;

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_STATIC_DIR: &str = "./static";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    /// JSON catalog to serve instead of the built-in placeholder data
    pub catalog_path: Option<PathBuf>,
    pub static_dir: PathBuf,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| {
            lookup(name)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let bind_addr = match var("BIND_ADDR") {
            Some(value) => value.parse().map_err(|_| ConfigError::InvalidVar {
                name: "BIND_ADDR",
                value,
            })?,
            None => default_bind_addr(),
        };

        Ok(Self {
            bind_addr,
            catalog_path: var("CATALOG_PATH").map(PathBuf::from),
            static_dir: var("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_STATIC_DIR)),
        })
    }
}

/// `0.0.0.0:8080`
pub fn default_bind_addr() -> SocketAddr {
    SocketAddr::from(([0, 0, 0, 0], DEFAULT_PORT))
}
