//! Capability contract every relay backend implements.

use super::SessionError;
use crate::relay::domain::RelayBackendName;
use std::any::Any;
use thiserror::Error;

/// Result type for relay backend operations.
pub type RelayBackendResult<T> = Result<T, RelayBackendError>;

/// Operations shared by every relay backend.
///
/// This trait is the only extension point for new relay types. Backends are
/// owned by a single facade and driven from one thread, so methods take
/// `&mut self`.
pub trait RelayBackend: Any + Send {
    /// Places the controlled device or link into a disconnected state.
    ///
    /// # Errors
    ///
    /// Returns the backend's own failure, unchanged.
    fn disconnect(&mut self) -> RelayBackendResult<()>;

    /// Places the controlled device or link into a connected state.
    ///
    /// # Errors
    ///
    /// Returns the backend's own failure, unchanged.
    fn connect(&mut self) -> RelayBackendResult<()>;

    /// Disconnects, waits `seconds`, then connects.
    ///
    /// Backends are free to implement this as a marker rather than a true
    /// composite.
    ///
    /// # Errors
    ///
    /// Returns the backend's own failure, unchanged.
    fn reconnect(&mut self, seconds: u64) -> RelayBackendResult<()>;

    /// Returns the backend as [`Any`] so callers can inspect the concrete
    /// variant.
    fn as_any(&self) -> &dyn Any;
}

/// Errors returned while constructing or operating a relay backend.
#[derive(Debug, Clone, Error)]
pub enum RelayBackendError {
    /// A required construction parameter was not supplied.
    #[error("relay backend {backend} requires parameter '{parameter}'")]
    MissingParameter {
        /// Backend being constructed.
        backend: RelayBackendName,
        /// Missing parameter name.
        parameter: String,
    },

    /// A construction parameter is not understood by the backend.
    #[error("relay backend {backend} does not accept parameter '{parameter}'")]
    UnexpectedParameter {
        /// Backend being constructed.
        backend: RelayBackendName,
        /// Rejected parameter name.
        parameter: String,
    },

    /// A construction parameter has the wrong kind of value.
    #[error("relay backend {backend} parameter '{parameter}' is invalid: {reason}")]
    InvalidParameter {
        /// Backend being constructed.
        backend: RelayBackendName,
        /// Offending parameter name.
        parameter: String,
        /// Reason string.
        reason: String,
    },

    /// The command session reported a failure.
    #[error(transparent)]
    Session(#[from] SessionError),
}
