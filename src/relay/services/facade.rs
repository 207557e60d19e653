//! Caller-facing relay facade.

use super::{RelayDriverRegistry, RelayRegistryError};
use crate::relay::{
    adapters::SESSION_PARAMETER,
    config::RelayConfig,
    domain::{RelayBackendName, RelayDomainError},
    ports::{
        CommandSession, ConstructionParameters, ParameterValue, RelayBackend, RelayBackendError,
    },
};
use thiserror::Error;
use tracing::{info, warn};

/// Seconds between disconnect and connect when `reconnect` is called without
/// a duration.
pub const DEFAULT_RECONNECT_SECONDS: u64 = 5;

/// Errors surfaced by [`Relay`].
#[derive(Debug, Clone, Error)]
pub enum RelayError {
    /// The backend name failed validation.
    #[error(transparent)]
    Domain(#[from] RelayDomainError),
    /// The backend could not be resolved or constructed.
    #[error(transparent)]
    Registry(#[from] RelayRegistryError),
    /// A relay operation failed.
    #[error(transparent)]
    Backend(#[from] RelayBackendError),
}

/// Result type for relay facade operations.
pub type RelayResult<T> = Result<T, RelayError>;

/// Owns one relay backend and forwards operations to it.
///
/// The backend is chosen at construction and never swapped.
pub struct Relay {
    name: RelayBackendName,
    backend: Box<dyn RelayBackend>,
}

impl Relay {
    /// Creates a relay from a registry holding the built-in backends.
    ///
    /// When `name` is `None` the simulated backend is used and `parameters`
    /// are discarded.
    ///
    /// # Errors
    ///
    /// Returns [`RelayError::Domain`] for an invalid name and
    /// [`RelayError::Registry`] when resolution or construction fails.
    pub fn new(name: Option<&str>, parameters: ConstructionParameters) -> RelayResult<Self> {
        Self::with_registry(
            &RelayDriverRegistry::with_builtin_backends(),
            name,
            parameters,
        )
    }

    /// Creates a relay from a caller-supplied registry.
    ///
    /// # Errors
    ///
    /// Returns [`RelayError::Domain`] for an invalid name and
    /// [`RelayError::Registry`] when resolution or construction fails.
    pub fn with_registry(
        registry: &RelayDriverRegistry,
        name: Option<&str>,
        parameters: ConstructionParameters,
    ) -> RelayResult<Self> {
        let backend_name = name.map(RelayBackendName::new).transpose()?;
        Self::bind(registry, backend_name, parameters)
    }

    /// Creates a relay from deserialized configuration.
    ///
    /// `session`, when given, is passed to the backend under
    /// [`SESSION_PARAMETER`].
    ///
    /// # Errors
    ///
    /// Returns [`RelayError::Registry`] when resolution or construction
    /// fails.
    pub fn from_config(
        registry: &RelayDriverRegistry,
        config: RelayConfig,
        session: Option<Box<dyn CommandSession>>,
    ) -> RelayResult<Self> {
        let (backend_name, mut parameters) = config.into_parts();
        if let Some(handle) = session {
            parameters.insert(SESSION_PARAMETER, ParameterValue::Session(handle));
        }
        Self::bind(registry, backend_name, parameters)
    }

    fn bind(
        registry: &RelayDriverRegistry,
        name: Option<RelayBackendName>,
        parameters: ConstructionParameters,
    ) -> RelayResult<Self> {
        let (bound_name, backend) = match name {
            Some(requested) => {
                let backend = registry.resolve_and_construct(&requested, parameters)?;
                (requested, backend)
            }
            None => {
                if !parameters.is_empty() {
                    warn!(
                        discarded = parameters.len(),
                        "no relay backend named; discarding parameters for the simulated default"
                    );
                }
                (RelayBackendName::simulated(), registry.resolve_default()?)
            }
        };
        info!(backend = %bound_name, "relay backend bound");
        Ok(Self {
            name: bound_name,
            backend,
        })
    }

    /// Disconnects the relay.
    ///
    /// # Errors
    ///
    /// Returns [`RelayError::Backend`] with the backend failure, unchanged.
    pub fn disconnect(&mut self) -> RelayResult<()> {
        Ok(self.backend.disconnect()?)
    }

    /// Connects the relay.
    ///
    /// # Errors
    ///
    /// Returns [`RelayError::Backend`] with the backend failure, unchanged.
    pub fn connect(&mut self) -> RelayResult<()> {
        Ok(self.backend.connect()?)
    }

    /// Reconnects after [`DEFAULT_RECONNECT_SECONDS`].
    ///
    /// # Errors
    ///
    /// Returns [`RelayError::Backend`] with the backend failure, unchanged.
    pub fn reconnect(&mut self) -> RelayResult<()> {
        self.reconnect_for(DEFAULT_RECONNECT_SECONDS)
    }

    /// Reconnects after `seconds`.
    ///
    /// # Errors
    ///
    /// Returns [`RelayError::Backend`] with the backend failure, unchanged.
    pub fn reconnect_for(&mut self, seconds: u64) -> RelayResult<()> {
        Ok(self.backend.reconnect(seconds)?)
    }

    /// Returns the name the backend was resolved under.
    #[must_use]
    pub const fn backend_name(&self) -> &RelayBackendName {
        &self.name
    }

    /// Returns the bound backend.
    #[must_use]
    pub fn backend(&self) -> &dyn RelayBackend {
        self.backend.as_ref()
    }

    /// Returns the bound backend as `T`, if that is its concrete type.
    #[must_use]
    pub fn backend_as<T: RelayBackend>(&self) -> Option<&T> {
        self.backend.as_any().downcast_ref::<T>()
    }
}
