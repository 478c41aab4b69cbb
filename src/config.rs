//! Environment configuration

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use thiserror::Error;

pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_SERVER_URL: &str = "http://localhost:8000";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must be a port number, got {value:?}")]
    InvalidPort { var: &'static str, value: String },
    #[error("{var} must be an IP address, got {value:?}")]
    InvalidBind { var: &'static str, value: String },
}

/// Server settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind: IpAddr,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    /// Read `CALLBOOK_BIND` and `CALLBOOK_PORT`
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(value) = lookup("CALLBOOK_BIND") {
            config.bind = value.parse().map_err(|_| ConfigError::InvalidBind {
                var: "CALLBOOK_BIND",
                value,
            })?;
        }

        if let Some(value) = lookup("CALLBOOK_PORT") {
            config.port = value.parse().map_err(|_| ConfigError::InvalidPort {
                var: "CALLBOOK_PORT",
                value,
            })?;
        }

        Ok(config)
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind, self.port)
    }
}

/// Base URL the terminal client talks to (`CALLBOOK_URL`)
pub fn server_url() -> String {
    std::env::var("CALLBOOK_URL").unwrap_or_else(|_| DEFAULT_SERVER_URL.to_string())
}
