//! Injectable seam over the raw socket primitives.
//!
//! [`TcpClient`](super::TcpClient) and [`TcpServer`](super::TcpServer) never
//! touch `std::net` directly. They delegate to an invoker obtained from a
//! factory at construction time, so tests can substitute the socket primitive
//! with a controllable fake while production code binds the default
//! [`TcpStreamFactory`] and [`TcpListenerFactory`].

use std::net::{IpAddr, Shutdown, SocketAddr, TcpListener, TcpStream};

use crate::error::{NetworkError, Result};

/// Capability surface over a single outbound socket.
pub trait ClientInvoker {
    /// Establish a connection to `host:port`.
    ///
    /// Errors from the underlying primitive (connection refused, unresolvable
    /// host) propagate to the caller untranslated.
    fn connect(&mut self, host: &str, port: u16) -> Result<()>;

    /// Close the connection.
    fn close(&mut self) -> Result<()>;

    /// Whether the invoker currently holds an established connection.
    fn is_connected(&self) -> bool;

    /// Release the underlying socket. Never fails; safe to call repeatedly.
    fn dispose(&mut self);
}

/// Capability surface over a single listening socket.
pub trait ListenerInvoker {
    /// Begin listening on the address resolved at creation time.
    fn start(&mut self) -> Result<()>;

    /// Stop listening and release the socket.
    fn stop(&mut self) -> Result<()>;

    /// The actual bound address while listening, if any.
    ///
    /// Useful when binding port 0 to discover the assigned port.
    fn local_addr(&self) -> Option<SocketAddr>;

    /// Release the underlying socket. Never fails; safe to call repeatedly.
    fn dispose(&mut self);
}

/// Factory producing client invokers.
pub trait ClientInvokerFactory {
    /// Create a fresh, unconnected client invoker.
    fn create_client(&self) -> Box<dyn ClientInvoker>;
}

/// Factory producing listener invokers bound to a resolved address.
pub trait ListenerInvokerFactory {
    /// Create a listener invoker for `bind_address:port`.
    ///
    /// The address is parsed eagerly: an unparseable address fails with
    /// [`NetworkError::InvalidAddress`] and no invoker is created.
    fn create_listener(&self, bind_address: &str, port: u16) -> Result<Box<dyn ListenerInvoker>>;
}

/// Production client invoker over [`std::net::TcpStream`].
///
/// The connected flag reflects the last `connect`/`close` on this invoker; a
/// remote hangup surfaces on the next I/O, not here.
#[derive(Debug, Default)]
pub struct TcpStreamInvoker {
    stream: Option<TcpStream>,
}

impl ClientInvoker for TcpStreamInvoker {
    fn connect(&mut self, host: &str, port: u16) -> Result<()> {
        let stream = TcpStream::connect((host, port))?;
        self.stream = Some(stream);
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        if let Some(stream) = self.stream.take() {
            stream.shutdown(Shutdown::Both)?;
        }
        Ok(())
    }

    fn is_connected(&self) -> bool {
        self.stream.is_some()
    }

    fn dispose(&mut self) {
        // Dropping the stream closes the socket.
        self.stream = None;
    }
}

/// Production listener invoker over [`std::net::TcpListener`].
///
/// The address is resolved at creation; the socket is bound on `start`, which
/// is where bind failures (port in use, permission denied) surface.
#[derive(Debug)]
pub struct TcpListenerInvoker {
    addr: SocketAddr,
    listener: Option<TcpListener>,
}

impl TcpListenerInvoker {
    /// Create an invoker for an already-resolved socket address.
    pub fn new(addr: SocketAddr) -> Self {
        Self {
            addr,
            listener: None,
        }
    }
}

impl ListenerInvoker for TcpListenerInvoker {
    fn start(&mut self) -> Result<()> {
        if self.listener.is_none() {
            self.listener = Some(TcpListener::bind(self.addr)?);
        }
        Ok(())
    }

    fn stop(&mut self) -> Result<()> {
        self.listener = None;
        Ok(())
    }

    fn local_addr(&self) -> Option<SocketAddr> {
        self.listener.as_ref().and_then(|l| l.local_addr().ok())
    }

    fn dispose(&mut self) {
        self.listener = None;
    }
}

/// Default factory producing [`TcpStreamInvoker`]s.
#[derive(Clone, Copy, Debug, Default)]
pub struct TcpStreamFactory;

impl ClientInvokerFactory for TcpStreamFactory {
    fn create_client(&self) -> Box<dyn ClientInvoker> {
        Box::new(TcpStreamInvoker::default())
    }
}

/// Default factory producing [`TcpListenerInvoker`]s.
#[derive(Clone, Copy, Debug, Default)]
pub struct TcpListenerFactory;

impl ListenerInvokerFactory for TcpListenerFactory {
    fn create_listener(&self, bind_address: &str, port: u16) -> Result<Box<dyn ListenerInvoker>> {
        let ip: IpAddr = bind_address.parse().map_err(|_| {
            NetworkError::InvalidAddress(format!("failed to parse IP address '{bind_address}'"))
        })?;

        Ok(Box::new(TcpListenerInvoker::new(SocketAddr::new(ip, port))))
    }
}
