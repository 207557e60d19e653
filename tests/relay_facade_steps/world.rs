//! Shared world state for relay facade BDD scenarios.

use dut_power::relay::{
    adapters::{SESSION_PARAMETER, memory::RecordingSession},
    ports::ConstructionParameters,
    services::{Relay, RelayDriverRegistry, RelayError, RelayResult},
};
use rstest::fixture;

/// Scenario world for relay facade behaviour tests.
pub struct RelayWorld {
    /// Registry the relay is resolved from.
    pub registry: RelayDriverRegistry,
    /// Backend name requested by the scenario, if any.
    pub backend_name: Option<String>,
    /// Session handed to the USB backend, if any.
    pub session: Option<RecordingSession>,
    /// Relay built by the scenario.
    pub relay: Option<Relay>,
    /// Error returned by the last construction attempt.
    pub construction_error: Option<RelayError>,
    /// Result of the last relay operation.
    pub last_operation: Option<RelayResult<()>>,
}

impl RelayWorld {
    /// Creates a world around a registry with the built-in backends.
    #[must_use]
    pub fn new() -> Self {
        Self {
            registry: RelayDriverRegistry::with_builtin_backends(),
            backend_name: None,
            session: None,
            relay: None,
            construction_error: None,
            last_operation: None,
        }
    }

    /// Builds the parameters implied by the scenario so far.
    #[must_use]
    pub fn parameters(&self) -> ConstructionParameters {
        self.session.as_ref().map_or_else(ConstructionParameters::new, |session| {
            ConstructionParameters::new().with_session(SESSION_PARAMETER, session.clone())
        })
    }

    /// Returns the constructed relay.
    pub fn relay_mut(&mut self) -> Result<&mut Relay, eyre::Report> {
        self.relay
            .as_mut()
            .ok_or_else(|| eyre::eyre!("relay has not been constructed"))
    }
}

impl Default for RelayWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> RelayWorld {
    RelayWorld::default()
}
