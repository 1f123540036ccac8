//! TCP server lifecycle over an injectable listener invoker.

use std::net::SocketAddr;

use super::config::TcpServerConfig;
use super::invoker::{ListenerInvoker, ListenerInvokerFactory, TcpListenerFactory};
use super::state::TcpServerState;
use crate::error::{NetworkError, Result};

/// A TCP server wrapping a single listening socket.
///
/// The server owns exactly one [`ListenerInvoker`], created eagerly at
/// construction. Creation is where address resolution failures surface: an
/// unparseable bind address fails with [`NetworkError::InvalidAddress`] and
/// no invoker is created.
///
/// Unlike [`TcpClient`](super::TcpClient), the running flag is tracked by the
/// server itself rather than re-queried from the invoker: the listener
/// primitive exposes no live state of its own.
///
/// A `TcpServer` is meant for a single logical owner; it provides no internal
/// synchronization for concurrent use of one instance.
///
/// # Example
///
/// ```ignore
/// let config = TcpServerConfig::new("0.0.0.0", 8080);
/// let mut server = TcpServer::new(config)?;
///
/// server.start()?;
/// assert!(server.is_running()?);
///
/// server.stop()?;
/// server.dispose();
/// ```
pub struct TcpServer {
    bind_address: String,
    port: u16,
    invoker: Option<Box<dyn ListenerInvoker>>,
    running: bool,
    disposed: bool,
}

impl TcpServer {
    /// Create a server backed by the production socket primitive.
    pub fn new(config: TcpServerConfig) -> Result<Self> {
        Self::with_factory(config, &TcpListenerFactory)
    }

    /// Create a server with an explicit invoker factory.
    ///
    /// This is the seam for substituting the socket primitive in tests.
    pub fn with_factory(
        config: TcpServerConfig,
        factory: &dyn ListenerInvokerFactory,
    ) -> Result<Self> {
        config.validate()?;
        let invoker = factory.create_listener(&config.bind_address, config.port)?;

        Ok(Self {
            bind_address: config.bind_address,
            port: config.port,
            invoker: Some(invoker),
            running: false,
            disposed: false,
        })
    }

    fn live_invoker(&self) -> Result<&dyn ListenerInvoker> {
        match self.invoker.as_deref() {
            Some(invoker) if !self.disposed => Ok(invoker),
            _ => Err(NetworkError::Disposed("TcpServer")),
        }
    }

    fn live_invoker_mut(&mut self) -> Result<&mut Box<dyn ListenerInvoker>> {
        match self.invoker.as_mut() {
            Some(invoker) if !self.disposed => Ok(invoker),
            _ => Err(NetworkError::Disposed("TcpServer")),
        }
    }

    /// Start listening on the configured address.
    ///
    /// A no-op if already running. Bind failures propagate unchanged.
    pub fn start(&mut self) -> Result<()> {
        self.live_invoker()?;
        if self.running {
            return Ok(());
        }

        self.live_invoker_mut()?.start()?;
        self.running = true;
        tracing::info!(target: "portside_net::tcp", "server listening: {}:{}", self.bind_address, self.port);

        Ok(())
    }

    /// Stop listening.
    ///
    /// A no-op if not running.
    pub fn stop(&mut self) -> Result<()> {
        self.live_invoker()?;
        if !self.running {
            return Ok(());
        }

        self.live_invoker_mut()?.stop()?;
        self.running = false;
        tracing::debug!(target: "portside_net::tcp", "server stopped: {}:{}", self.bind_address, self.port);

        Ok(())
    }

    /// Whether the server is running, from the server's own tracked flag.
    pub fn is_running(&self) -> Result<bool> {
        self.live_invoker()?;
        Ok(self.running)
    }

    /// Get the current server state.
    pub fn state(&self) -> TcpServerState {
        if self.disposed {
            TcpServerState::Disposed
        } else if self.running {
            TcpServerState::Running
        } else {
            TcpServerState::Stopped
        }
    }

    /// Get the configured bind address.
    pub fn bind_address(&self) -> &str {
        &self.bind_address
    }

    /// Get the configured port.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Get the full bind address (address:port).
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.bind_address, self.port)
    }

    /// Get the actual local address while listening.
    ///
    /// Returns `None` if the server is not running or has been disposed.
    /// Useful when binding to port 0 to get the assigned port.
    pub fn local_addr(&self) -> Option<SocketAddr> {
        self.invoker
            .as_deref()
            .filter(|_| !self.disposed)
            .and_then(|i| i.local_addr())
    }

    /// Whether `dispose` has been called.
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Release the invoker and reject all further lifecycle operations.
    ///
    /// Idempotent and infallible. Disposes the invoker directly, without
    /// calling `stop` first: releasing the underlying socket also releases
    /// its listening state.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }

        if let Some(mut invoker) = self.invoker.take() {
            invoker.dispose();
        }

        self.running = false;
        self.disposed = true;
    }
}

impl Drop for TcpServer {
    /// Last-resort cleanup; explicit [`dispose`](Self::dispose) is the
    /// primary release path.
    fn drop(&mut self) {
        if !self.disposed {
            tracing::warn!(target: "portside_net::tcp", "TcpServer for {}:{} dropped without dispose()", self.bind_address, self.port);
            self.dispose();
        }
    }
}

impl std::fmt::Debug for TcpServer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TcpServer")
            .field("bind_addr", &self.bind_addr())
            .field("state", &self.state())
            .finish()
    }
}
