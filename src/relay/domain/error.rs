//! Error types for relay domain validation.

use thiserror::Error;

/// Errors returned while constructing relay domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RelayDomainError {
    /// The backend name is empty.
    #[error("relay backend name must not be empty")]
    EmptyBackendName,

    /// The backend name contains whitespace or control characters.
    #[error("relay backend name '{0}' must not contain whitespace or control characters")]
    InvalidBackendName(String),
}
