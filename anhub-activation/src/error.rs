//! Error types for the activation layer.

use thiserror::Error;

/// Result type for activation operations.
pub type ActivationResult<T> = Result<T, ActivationError>;

/// Errors that can occur while checking the activation ledger.
///
/// None of these are fatal: the poller logs a failed fetch and spends one
/// attempt on it, nothing more.
#[derive(Debug, Error)]
pub enum ActivationError {
    /// Network error (DNS, connect, timeout, body read).
    #[error("network error: {0}")]
    Network(String),

    /// The ledger host answered with a non-success status.
    #[error("ledger fetch returned HTTP {0}")]
    HttpStatus(u16),

    /// The session's event channel was closed before a terminal event.
    #[error("poll session channel closed")]
    ChannelClosed,
}

impl From<reqwest::Error> for ActivationError {
    fn from(err: reqwest::Error) -> Self {
        Self::Network(err.to_string())
    }
}
