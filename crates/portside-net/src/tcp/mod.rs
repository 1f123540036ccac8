//! TCP client and server lifecycle management.
//!
//! This module provides a small abstraction over raw TCP connection
//! establishment and listening:
//!
//! - **TcpClient**: Connect to and disconnect from TCP servers
//! - **TcpServer**: Start and stop a TCP listener
//! - **Invoker traits**: The injectable seam over the socket primitives
//!
//! Both components own exactly one invoker, created at construction from a
//! factory. Lifecycle operations are idempotent, and after `dispose` every
//! operation fails with [`NetworkError::Disposed`](crate::NetworkError).
//! Sending and receiving data is out of scope here.
//!
//! # Client Example
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
//! client.dispose();
//! ```
//!
//! # Server Example
//!
//! ```ignore
//! use portside_net::tcp::{TcpServer, TcpServerConfig};
//!
//! let config = TcpServerConfig::new("0.0.0.0", 8080);
//! let mut server = TcpServer::new(config)?;
//!
//! server.start()?;
//! assert!(server.is_running()?);
//!
//! server.stop()?;
//! server.dispose();
//! ```

mod client;
mod config;
mod invoker;
mod server;
mod state;

pub use client::TcpClient;
pub use config::{TcpClientConfig, TcpServerConfig};
pub use invoker::{
    ClientInvoker, ClientInvokerFactory, ListenerInvoker, ListenerInvokerFactory,
    TcpListenerFactory, TcpListenerInvoker, TcpStreamFactory, TcpStreamInvoker,
};
pub use server::TcpServer;
pub use state::{TcpClientState, TcpServerState};
