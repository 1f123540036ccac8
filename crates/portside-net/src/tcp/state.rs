//! State enums for TCP clients and servers.

/// Current state of a TCP client.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TcpClientState {
    /// Not connected to any server.
    Disconnected,
    /// Connected to a server.
    Connected,
    /// The client has been disposed and accepts no further operations.
    Disposed,
}

impl Default for TcpClientState {
    fn default() -> Self {
        Self::Disconnected
    }
}

impl std::fmt::Display for TcpClientState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Disconnected => write!(f, "Disconnected"),
            Self::Connected => write!(f, "Connected"),
            Self::Disposed => write!(f, "Disposed"),
        }
    }
}

/// Current state of a TCP server.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TcpServerState {
    /// Server is not listening.
    Stopped,
    /// Server is listening for connections.
    Running,
    /// The server has been disposed and accepts no further operations.
    Disposed,
}

impl Default for TcpServerState {
    fn default() -> Self {
        Self::Stopped
    }
}

impl std::fmt::Display for TcpServerState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Stopped => write!(f, "Stopped"),
            Self::Running => write!(f, "Running"),
            Self::Disposed => write!(f, "Disposed"),
        }
    }
}
