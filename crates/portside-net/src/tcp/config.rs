//! Configuration types for TCP client and server.

use serde::{Deserialize, Serialize};

use crate::error::{NetworkError, Result};

/// Configuration for a TCP client connection.
///
/// Immutable once handed to a [`TcpClient`](super::TcpClient); the client
/// copies the address and port at construction time.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TcpClientConfig {
    /// The host to connect to.
    pub host: String,
    /// The port to connect to.
    pub port: u16,
}

impl TcpClientConfig {
    /// Create a new client configuration.
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    /// Get the address string (host:port).
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Validate the configuration.
    ///
    /// The port range is enforced by `u16`; only the host needs checking.
    pub fn validate(&self) -> Result<()> {
        if self.host.trim().is_empty() {
            return Err(NetworkError::InvalidAddress(
                "host must not be empty".into(),
            ));
        }
        Ok(())
    }
}

/// Configuration for a TCP server.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TcpServerConfig {
    /// The address to bind to.
    pub bind_address: String,
    /// The port to listen on.
    pub port: u16,
}

impl TcpServerConfig {
    /// Create a new server configuration.
    pub fn new(bind_address: impl Into<String>, port: u16) -> Self {
        Self {
            bind_address: bind_address.into(),
            port,
        }
    }

    /// Get the bind address string (address:port).
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.bind_address, self.port)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.bind_address.trim().is_empty() {
            return Err(NetworkError::InvalidAddress(
                "bind address must not be empty".into(),
            ));
        }
        Ok(())
    }
}
