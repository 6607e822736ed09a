//! Server settings loaded via OrthoConfig.
//!
//! Values layer defaults, configuration files, `BOOKS_*` environment variables
//! and command-line flags, in increasing precedence.

use std::net::{AddrParseError, IpAddr, SocketAddr};

use ortho_config::OrthoConfig;
use serde::Deserialize;
use thiserror::Error;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;

/// Settings controlling where the HTTP server listens.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "BOOKS")]
pub struct ServerSettings {
    /// Interface address the server binds to.
    pub host: Option<String>,
    /// TCP port the server listens on.
    pub port: Option<u16>,
}

/// Errors raised while interpreting loaded settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// The configured host is not an IP address.
    #[error("invalid bind host '{host}': {source}")]
    InvalidHost {
        /// Host value that failed to parse.
        host: String,
        /// Underlying parse failure.
        #[source]
        source: AddrParseError,
    },
}

impl ServerSettings {
    /// Return the configured host, falling back to all interfaces.
    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    /// Return the configured port, falling back to 8080.
    pub fn port(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PORT)
    }

    /// Resolve the socket address to bind.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::InvalidHost`] when the host is not an IPv4 or
    /// IPv6 address.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let host = self.host();
        let ip: IpAddr = host.trim().parse().map_err(|source| SettingsError::InvalidHost {
            host: host.to_owned(),
            source,
        })?;
        Ok(SocketAddr::new(ip, self.port()))
    }
}
