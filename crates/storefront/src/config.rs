//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `MOCKFRONT_HOST` - Bind address (default: 127.0.0.1)
//! - `MOCKFRONT_PORT` - Listen port (default: 4000)
//! - `MOCKFRONT_DATA_FILE` - Path of the JSON data file
//!   (default: data/index.json, created by `mf-cli seed`)

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use thiserror::Error;

/// Default listen port.
pub const DEFAULT_PORT: u16 = 4000;

/// Default data file path, relative to the working directory.
pub const DEFAULT_DATA_FILE: &str = "data/index.json";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Path of the persisted JSON document
    pub data_file: PathBuf,
}

impl StorefrontConfig {
    /// Load configuration from the environment, filling defaults.
    ///
    /// # Errors
    ///
    /// [`ConfigError::InvalidEnvVar`] when a set variable fails to parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = match std::env::var("MOCKFRONT_HOST") {
            Ok(raw) => raw.parse().map_err(|err: std::net::AddrParseError| {
                ConfigError::InvalidEnvVar("MOCKFRONT_HOST".to_string(), err.to_string())
            })?,
            Err(_) => IpAddr::V4(Ipv4Addr::LOCALHOST),
        };

        let port = match std::env::var("MOCKFRONT_PORT") {
            Ok(raw) => raw.parse().map_err(|err: std::num::ParseIntError| {
                ConfigError::InvalidEnvVar("MOCKFRONT_PORT".to_string(), err.to_string())
            })?,
            Err(_) => DEFAULT_PORT,
        };

        let data_file = std::env::var("MOCKFRONT_DATA_FILE")
            .map_or_else(|_| PathBuf::from(DEFAULT_DATA_FILE), PathBuf::from);

        Ok(Self {
            host,
            port,
            data_file,
        })
    }

    /// The socket address to bind.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
