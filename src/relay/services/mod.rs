//! Driver registry and the caller-facing relay facade.

mod facade;
mod registry;

pub use facade::{DEFAULT_RECONNECT_SECONDS, Relay, RelayError, RelayResult};
pub use registry::{
    BackendFactory, RELAY_BACKEND_NAMESPACE, RelayDriverRegistry, RelayRegistryError,
    RelayRegistryResult,
};
