//! Open, backend-specific construction parameters.

use super::{CommandSession, RelayBackendError, RelayBackendResult};
use crate::relay::domain::RelayBackendName;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fmt;

/// A single construction parameter.
pub enum ParameterValue {
    /// Plain configuration data.
    Value(Value),
    /// An owned command session handed to the backend.
    Session(Box<dyn CommandSession>),
}

impl ParameterValue {
    const fn kind(&self) -> &'static str {
        match self {
            Self::Value(_) => "a JSON value",
            Self::Session(_) => "a command session",
        }
    }
}

impl fmt::Debug for ParameterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(value) => f.debug_tuple("Value").field(value).finish(),
            Self::Session(_) => f.write_str("Session(..)"),
        }
    }
}

/// Parameters passed unvalidated from the registry to a backend factory.
///
/// Each backend interprets its own subset: factories take the keys they
/// understand and reject whatever is left over.
#[derive(Debug, Default)]
pub struct ConstructionParameters {
    entries: BTreeMap<String, ParameterValue>,
}

impl ConstructionParameters {
    /// Creates an empty parameter set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a plain value.
    #[must_use]
    pub fn with_value(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, ParameterValue::Value(value.into()));
        self
    }

    /// Adds a command session.
    #[must_use]
    pub fn with_session(
        mut self,
        key: impl Into<String>,
        session: impl CommandSession + 'static,
    ) -> Self {
        self.insert(key, ParameterValue::Session(Box::new(session)));
        self
    }

    /// Inserts a parameter, returning any value it replaced.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: ParameterValue,
    ) -> Option<ParameterValue> {
        self.entries.insert(key.into(), value)
    }

    /// Returns a plain value by key.
    ///
    /// Sessions are not visible through this accessor.
    #[must_use]
    pub fn value(&self, key: &str) -> Option<&Value> {
        match self.entries.get(key) {
            Some(ParameterValue::Value(value)) => Some(value),
            Some(ParameterValue::Session(_)) | None => None,
        }
    }

    /// Returns `true` when a parameter with `key` is present.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Returns parameter names in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Returns the number of parameters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when no parameters are present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Removes and returns the session stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`RelayBackendError::MissingParameter`] when `key` is absent,
    /// or [`RelayBackendError::InvalidParameter`] when it holds a plain value.
    pub fn take_session(
        &mut self,
        backend: &RelayBackendName,
        key: &str,
    ) -> RelayBackendResult<Box<dyn CommandSession>> {
        match self.entries.remove(key) {
            Some(ParameterValue::Session(session)) => Ok(session),
            Some(other) => Err(RelayBackendError::InvalidParameter {
                backend: backend.clone(),
                parameter: key.to_owned(),
                reason: format!("expected a command session, found {}", other.kind()),
            }),
            None => Err(RelayBackendError::MissingParameter {
                backend: backend.clone(),
                parameter: key.to_owned(),
            }),
        }
    }

    /// Consumes the set, failing if any parameter remains.
    ///
    /// Factories call this after taking the keys they understand.
    ///
    /// # Errors
    ///
    /// Returns [`RelayBackendError::UnexpectedParameter`] naming the first
    /// leftover key.
    pub fn finish(self, backend: &RelayBackendName) -> RelayBackendResult<()> {
        self.entries.into_keys().next().map_or(Ok(()), |parameter| {
            Err(RelayBackendError::UnexpectedParameter {
                backend: backend.clone(),
                parameter,
            })
        })
    }
}

impl From<Map<String, Value>> for ConstructionParameters {
    fn from(map: Map<String, Value>) -> Self {
        let entries = map
            .into_iter()
            .map(|(key, value)| (key, ParameterValue::Value(value)))
            .collect();
        Self { entries }
    }
}
