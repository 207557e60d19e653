//! Name-keyed table of relay backend factories.
//!
//! Provides [`RelayDriverRegistry`], which maps a [`RelayBackendName`] to a
//! factory and constructs backends on request. Registrations are explicit and
//! in-process; there is no discovery of installed plugins.

use crate::relay::{
    adapters::{SimulatedRelay, UsbRelay},
    domain::RelayBackendName,
    ports::{ConstructionParameters, RelayBackend, RelayBackendError, RelayBackendResult},
};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

/// Namespace relay backends are registered under.
pub const RELAY_BACKEND_NAMESPACE: &str = "relay";

/// Constructor for one relay backend.
pub type BackendFactory =
    Arc<dyn Fn(ConstructionParameters) -> RelayBackendResult<Box<dyn RelayBackend>> + Send + Sync>;

/// Errors returned while resolving a backend by name.
#[derive(Debug, Clone, Error)]
pub enum RelayRegistryError {
    /// No factory is registered under the name.
    #[error("relay backend not found: {0}")]
    BackendNotFound(RelayBackendName),

    /// The factory rejected its construction parameters.
    #[error("failed to construct relay backend {name}")]
    Construction {
        /// Backend being constructed.
        name: RelayBackendName,
        /// Factory failure.
        source: RelayBackendError,
    },
}

/// Result type for registry resolution.
pub type RelayRegistryResult<T> = Result<T, RelayRegistryError>;

/// Registry of relay backend factories.
///
/// Every registry starts with the simulated backend registered under
/// [`RelayBackendName::SIMULATED`], so default resolution always has a
/// target.
#[derive(Clone)]
pub struct RelayDriverRegistry {
    factories: HashMap<RelayBackendName, BackendFactory>,
}

impl RelayDriverRegistry {
    /// Creates a registry holding only the simulated backend.
    #[must_use]
    pub fn new() -> Self {
        let mut registry = Self {
            factories: HashMap::new(),
        };
        registry.register(RelayBackendName::simulated(), SimulatedRelay::from_parameters);
        registry
    }

    /// Creates a registry holding the simulated and USB backends.
    #[must_use]
    pub fn with_builtin_backends() -> Self {
        let mut registry = Self::new();
        registry.register(RelayBackendName::usb(), UsbRelay::from_parameters);
        registry
    }

    /// Returns the namespace this registry serves.
    #[must_use]
    pub const fn namespace(&self) -> &'static str {
        RELAY_BACKEND_NAMESPACE
    }

    /// Associates `name` with `factory`.
    ///
    /// A later registration under the same name replaces the earlier one.
    /// Returns `true` when a factory was replaced.
    pub fn register<F>(&mut self, name: RelayBackendName, factory: F) -> bool
    where
        F: Fn(ConstructionParameters) -> RelayBackendResult<Box<dyn RelayBackend>>
            + Send
            + Sync
            + 'static,
    {
        let replaced = self.factories.contains_key(&name);
        debug!(
            namespace = RELAY_BACKEND_NAMESPACE,
            backend = %name,
            replaced,
            "registered relay backend"
        );
        self.factories.insert(name, Arc::new(factory));
        replaced
    }

    /// Returns `true` when a factory is registered under `name`.
    #[must_use]
    pub fn contains(&self, name: &RelayBackendName) -> bool {
        self.factories.contains_key(name)
    }

    /// Returns registered names in sorted order.
    #[must_use]
    pub fn names(&self) -> Vec<&RelayBackendName> {
        let mut names: Vec<_> = self.factories.keys().collect();
        names.sort();
        names
    }

    /// Looks up `name` and constructs its backend from `parameters`.
    ///
    /// # Errors
    ///
    /// Returns [`RelayRegistryError::BackendNotFound`] when `name` is not
    /// registered, or [`RelayRegistryError::Construction`] when the factory
    /// rejects `parameters`.
    pub fn resolve_and_construct(
        &self,
        name: &RelayBackendName,
        parameters: ConstructionParameters,
    ) -> RelayRegistryResult<Box<dyn RelayBackend>> {
        let factory = self
            .factories
            .get(name)
            .ok_or_else(|| RelayRegistryError::BackendNotFound(name.clone()))?;
        factory(parameters).map_err(|source| RelayRegistryError::Construction {
            name: name.clone(),
            source,
        })
    }

    /// Constructs the simulated backend with empty parameters.
    ///
    /// # Errors
    ///
    /// Returns [`RelayRegistryError::Construction`] only if a caller replaced
    /// the simulated registration with a factory that fails.
    pub fn resolve_default(&self) -> RelayRegistryResult<Box<dyn RelayBackend>> {
        self.resolve_and_construct(&RelayBackendName::simulated(), ConstructionParameters::new())
    }
}

impl Default for RelayDriverRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for RelayDriverRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RelayDriverRegistry")
            .field("namespace", &RELAY_BACKEND_NAMESPACE)
            .field("backends", &self.names())
            .finish()
    }
}
