//! Minimal lifecycle layer over TCP clients and listeners.
//!
//! This crate lets application code depend on a small, testable surface
//! ([`TcpClient`], [`TcpServer`]) instead of directly on the platform socket
//! primitives. It covers connection lifecycle only: connect/disconnect for
//! the client, start/stop for the server, and disposal for both. Framing,
//! message protocols, and the send/receive path are deliberately out of
//! scope.
//!
//! # Client
//!
//! ```ignore
//! use portside_net::tcp::{TcpClient, TcpClientConfig};
//!
//! let config = TcpClientConfig::new("127.0.0.1", 8080);
//! let mut client = TcpClient::new(config)?;
//!
//! client.connect()?;
//! assert!(client.is_connected()?);
//!
//! client.disconnect()?;
//! client.dispose();
//! ```
//!
//! # Server
//!
//! ```ignore
//! use portside_net::tcp::{TcpServer, TcpServerConfig};
//!
//! let config = TcpServerConfig::new("0.0.0.0", 8080);
//! let mut server = TcpServer::new(config)?;
//!
//! server.start()?;
//! server.stop()?;
//! server.dispose();
//! ```
//!
//! # Testability
//!
//! Both components take their socket primitive through an invoker factory
//! injected at construction. Production code uses the default factories over
//! `std::net`; tests bind controllable fakes:
//!
//! ```ignore
//! let client = TcpClient::with_factory(config, &fake_factory)?;
//! ```
//!
//! # Lifecycle contract
//!
//! - Exactly one invoker is created per component, eagerly at construction.
//! - `connect`/`disconnect` and `start`/`stop` are idempotent.
//! - After `dispose`, every lifecycle operation and query fails with
//!   [`NetworkError::Disposed`]; disposal itself never fails and is safe to
//!   repeat.
//! - Underlying socket errors propagate to the caller without retry or
//!   translation.
//!
//! Successful connect, disconnect, and server start each emit one
//! informational `tracing` event under the `portside_net::tcp` target.
//!
//! Instances are single-owner: no internal locking is provided for
//! concurrent use of the same client or server.

mod error;
pub mod tcp;

pub use error::{NetworkError, Result};

// Re-export commonly used types at the crate root
pub use tcp::{
    TcpClient, TcpClientConfig, TcpClientState, TcpServer, TcpServerConfig, TcpServerState,
};
