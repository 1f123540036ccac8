//! Error types for the networking crate.

use std::fmt;

/// Network-specific errors.
#[derive(Debug, Clone)]
pub enum NetworkError {
    /// The supplied address is empty or could not be parsed.
    InvalidAddress(String),
    /// A lifecycle operation was invoked on a disposed component.
    ///
    /// Carries the name of the component that was already disposed. This is
    /// a usage error: once disposed, a client or server holds no invoker and
    /// rejects every further operation.
    Disposed(&'static str),
    /// TCP socket error reported by the underlying primitive.
    ///
    /// Connect and bind failures are surfaced through this variant without
    /// any retry or translation.
    TcpSocket(String),
}

impl fmt::Display for NetworkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidAddress(msg) => write!(f, "Invalid address: {msg}"),
            Self::Disposed(component) => write!(f, "{component} has been disposed"),
            Self::TcpSocket(msg) => write!(f, "TCP socket error: {msg}"),
        }
    }
}

impl std::error::Error for NetworkError {}

impl From<std::io::Error> for NetworkError {
    fn from(err: std::io::Error) -> Self {
        Self::TcpSocket(err.to_string())
    }
}

/// A specialized Result type for network operations.
pub type Result<T> = std::result::Result<T, NetworkError>;
