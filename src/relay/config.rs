//! Serde construction surface for a relay.

use crate::relay::{domain::RelayBackendName, ports::ConstructionParameters};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// Backend selection and its plain construction parameters.
///
/// A representative document is:
///
/// ```json
/// {
///   "backend": "usb_relay",
///   "parameters": {}
/// }
/// ```
///
/// Omitting `backend` selects the simulated relay. Command sessions cannot
/// be serialized and are supplied in code.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RelayConfig {
    /// Backend to resolve, or `None` for the simulated default.
    #[serde(default)]
    pub backend: Option<RelayBackendName>,
    /// Plain backend-specific parameters.
    #[serde(default)]
    pub parameters: Map<String, Value>,
}

/// Errors returned while reading relay configuration.
#[derive(Debug, Error)]
pub enum RelayConfigError {
    /// The document is not valid relay configuration.
    #[error("invalid relay configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

impl RelayConfig {
    /// Parses configuration from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`RelayConfigError::Parse`] for malformed JSON, unknown
    /// fields, or an invalid backend name.
    pub fn from_json_str(input: &str) -> Result<Self, RelayConfigError> {
        Ok(serde_json::from_str(input)?)
    }

    /// Splits the configuration into a backend name and parameters.
    #[must_use]
    pub fn into_parts(self) -> (Option<RelayBackendName>, ConstructionParameters) {
        (self.backend, ConstructionParameters::from(self.parameters))
    }
}
