//! TCP client lifecycle over an injectable connection invoker.

use super::config::TcpClientConfig;
use super::invoker::{ClientInvoker, ClientInvokerFactory, TcpStreamFactory};
use super::state::TcpClientState;
use crate::error::{NetworkError, Result};

/// A TCP client wrapping a single outbound connection.
///
/// The client owns exactly one [`ClientInvoker`], created eagerly at
/// construction, and enforces the lifecycle contract around it:
///
/// - `connect` and `disconnect` are idempotent
/// - every operation fails with [`NetworkError::Disposed`] after `dispose`
/// - the invoker is released exactly once
///
/// The connected flag is never cached: it is read live from the invoker on
/// every query, so an invoker that reflects an asynchronous disconnect is
/// observed immediately.
///
/// A `TcpClient` is meant for a single logical owner; it provides no internal
/// synchronization for concurrent use of one instance.
///
/// # Example
///
/// ```ignore
/// let config = TcpClientConfig::new("127.0.0.1", 8080);
/// let mut client = TcpClient::new(config)?;
///
/// client.connect()?;
/// assert!(client.is_connected()?);
///
/// client.disconnect()?;
/// client.dispose();
/// ```
pub struct TcpClient {
    host: String,
    port: u16,
    invoker: Option<Box<dyn ClientInvoker>>,
    disposed: bool,
}

impl TcpClient {
    /// Create a client backed by the production socket primitive.
    pub fn new(config: TcpClientConfig) -> Result<Self> {
        Self::with_factory(config, &TcpStreamFactory)
    }

    /// Create a client with an explicit invoker factory.
    ///
    /// This is the seam for substituting the socket primitive in tests.
    /// Exactly one invoker is created, eagerly.
    pub fn with_factory(
        config: TcpClientConfig,
        factory: &dyn ClientInvokerFactory,
    ) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            host: config.host,
            port: config.port,
            invoker: Some(factory.create_client()),
            disposed: false,
        })
    }

    fn live_invoker(&self) -> Result<&dyn ClientInvoker> {
        match self.invoker.as_deref() {
            Some(invoker) if !self.disposed => Ok(invoker),
            _ => Err(NetworkError::Disposed("TcpClient")),
        }
    }

    fn live_invoker_mut(&mut self) -> Result<&mut Box<dyn ClientInvoker>> {
        match self.invoker.as_mut() {
            Some(invoker) if !self.disposed => Ok(invoker),
            _ => Err(NetworkError::Disposed("TcpClient")),
        }
    }

    /// Connect to the configured host and port.
    ///
    /// A no-op if the invoker already reports connected. Underlying
    /// connection failures propagate to the caller unchanged.
    pub fn connect(&mut self) -> Result<()> {
        if self.live_invoker()?.is_connected() {
            return Ok(());
        }

        let (host, port) = (self.host.clone(), self.port);
        let invoker = self.live_invoker_mut()?;
        invoker.connect(&host, port)?;

        if invoker.is_connected() {
            tracing::info!(target: "portside_net::tcp", "client connected: {host}:{port}");
        }

        Ok(())
    }

    /// Close the connection.
    ///
    /// A no-op if not connected.
    pub fn disconnect(&mut self) -> Result<()> {
        if !self.live_invoker()?.is_connected() {
            return Ok(());
        }

        self.live_invoker_mut()?.close()?;
        tracing::info!(target: "portside_net::tcp", "client disconnected: {}:{}", self.host, self.port);

        Ok(())
    }

    /// Whether the client is connected, read live from the invoker.
    pub fn is_connected(&self) -> Result<bool> {
        Ok(self.live_invoker()?.is_connected())
    }

    /// Get the current client state.
    pub fn state(&self) -> TcpClientState {
        if self.disposed {
            TcpClientState::Disposed
        } else if self.invoker.as_deref().is_some_and(|i| i.is_connected()) {
            TcpClientState::Connected
        } else {
            TcpClientState::Disconnected
        }
    }

    /// Get the host this client is configured to connect to.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Get the port this client is configured to connect to.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Get the full address (host:port) this client connects to.
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Whether `dispose` has been called.
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Release the invoker and reject all further lifecycle operations.
    ///
    /// Idempotent and infallible: the first call closes a live connection and
    /// releases the invoker exactly once; later calls are no-ops. A close
    /// failure during release is swallowed, so disposal never raises.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }

        if let Some(mut invoker) = self.invoker.take() {
            if invoker.is_connected() {
                match invoker.close() {
                    Ok(()) => {
                        tracing::info!(target: "portside_net::tcp", "client disconnected: {}:{}", self.host, self.port);
                    }
                    Err(e) => {
                        tracing::debug!(target: "portside_net::tcp", "close during dispose failed: {e}");
                    }
                }
            }
            invoker.dispose();
        }

        self.disposed = true;
    }
}

impl Drop for TcpClient {
    /// Last-resort cleanup; explicit [`dispose`](Self::dispose) is the
    /// primary release path.
    fn drop(&mut self) {
        if !self.disposed {
            tracing::warn!(target: "portside_net::tcp", "TcpClient for {}:{} dropped without dispose()", self.host, self.port);
            self.dispose();
        }
    }
}

impl std::fmt::Debug for TcpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TcpClient")
            .field("address", &self.address())
            .field("state", &self.state())
            .finish()
    }
}
