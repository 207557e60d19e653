//! Validated relay backend name type.

use super::RelayDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Symbolic identifier of a registered relay backend.
///
/// Names are matched case-sensitively and exactly: `usb_relay` and
/// `USB_relay` are different backends. Unlike most identifiers in this
/// crate the input is neither trimmed nor case-folded.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RelayBackendName(String);

impl RelayBackendName {
    /// Name of the built-in simulated backend.
    pub const SIMULATED: &'static str = "dummy_relay";

    /// Name of the built-in USB relay backend.
    pub const USB: &'static str = "usb_relay";

    /// Creates a validated backend name.
    ///
    /// # Errors
    ///
    /// Returns [`RelayDomainError::EmptyBackendName`] when the value is empty,
    /// or [`RelayDomainError::InvalidBackendName`] when it contains
    /// whitespace or control characters.
    pub fn new(value: impl Into<String>) -> Result<Self, RelayDomainError> {
        let raw = value.into();

        if raw.is_empty() {
            return Err(RelayDomainError::EmptyBackendName);
        }

        if raw.chars().any(|c| c.is_whitespace() || c.is_control()) {
            return Err(RelayDomainError::InvalidBackendName(raw));
        }

        Ok(Self(raw))
    }

    /// Returns the name of the built-in simulated backend.
    #[must_use]
    pub fn simulated() -> Self {
        Self(Self::SIMULATED.to_owned())
    }

    /// Returns the name of the built-in USB relay backend.
    #[must_use]
    pub fn usb() -> Self {
        Self(Self::USB.to_owned())
    }

    /// Returns the backend name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for RelayBackendName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for RelayBackendName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for RelayBackendName {
    type Error = RelayDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for RelayBackendName {
    type Error = RelayDomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<RelayBackendName> for String {
    fn from(value: RelayBackendName) -> Self {
        value.0
    }
}
