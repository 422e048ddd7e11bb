//! Configuration for the HTTP server.

use hokusai_error::{ServerError, ServerErrorKind};
use std::net::SocketAddr;

/// Listen configuration for the HTTP server.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ServerConfig {
    /// Interface to bind (e.g., "0.0.0.0")
    pub host: String,
    /// Port to listen on
    pub port: u16,
}

impl ServerConfig {
    /// Create a new server configuration.
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    /// Create config from environment variables.
    ///
    /// Reads:
    /// - `HOKUSAI_HOST` (default: "0.0.0.0")
    /// - `HOKUSAI_PORT` (default: 4000)
    pub fn from_env() -> Self {
        let host = std::env::var("HOKUSAI_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = std::env::var("HOKUSAI_PORT")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(4000);
        Self { host, port }
    }

    /// Resolve the listen address.
    ///
    /// # Errors
    ///
    /// Returns an error when the host/port pair is not a valid socket address.
    pub fn socket_addr(&self) -> Result<SocketAddr, ServerError> {
        format!("{}:{}", self.host, self.port).parse().map_err(|_| {
            ServerError::new(ServerErrorKind::Address(format!(
                "{}:{}",
                self.host, self.port
            )))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn socket_addr_parses() {
        let config = ServerConfig::new("127.0.0.1", 4000);
        let addr = config.socket_addr().unwrap();
        assert_eq!(addr.port(), 4000);
    }

    #[test]
    fn bad_host_is_an_address_error() {
        let config = ServerConfig::new("not a host", 4000);
        assert!(config.socket_addr().is_err());
    }
}
