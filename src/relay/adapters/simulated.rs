//! Simulated relay that records invocations without touching hardware.

use crate::relay::{
    domain::{RelayBackendName, SimulatedRelayState},
    ports::{ConstructionParameters, RelayBackend, RelayBackendResult},
};
use std::any::Any;
use tracing::trace;

/// Relay backend for test environments.
///
/// Each operation sets its own marker and nothing else. In particular
/// `reconnect` records the requested duration but does not call `connect`
/// or `disconnect`, and never sleeps.
#[derive(Debug, Clone, Default)]
pub struct SimulatedRelay {
    state: SimulatedRelayState,
}

impl SimulatedRelay {
    /// Creates a simulated relay with every marker unset.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Factory used by the driver registry.
    ///
    /// # Errors
    ///
    /// Returns [`crate::relay::ports::RelayBackendError::UnexpectedParameter`]
    /// when any parameter is supplied; this backend accepts none.
    pub fn from_parameters(
        parameters: ConstructionParameters,
    ) -> RelayBackendResult<Box<dyn RelayBackend>> {
        parameters.finish(&RelayBackendName::simulated())?;
        Ok(Box::new(Self::new()))
    }

    /// Returns a snapshot of the recorded markers.
    #[must_use]
    pub const fn state(&self) -> SimulatedRelayState {
        self.state
    }

    /// Returns `true` once `connect` has been called.
    #[must_use]
    pub const fn connected(&self) -> bool {
        self.state.connected
    }

    /// Returns `true` once `disconnect` has been called.
    #[must_use]
    pub const fn disconnected(&self) -> bool {
        self.state.disconnected
    }

    /// Returns `true` once `reconnect` has been called.
    #[must_use]
    pub const fn reconnected(&self) -> bool {
        self.state.reconnected
    }

    /// Returns the duration passed to the latest `reconnect`.
    #[must_use]
    pub const fn reconnect_seconds(&self) -> Option<u64> {
        self.state.reconnect_seconds
    }
}

impl RelayBackend for SimulatedRelay {
    fn disconnect(&mut self) -> RelayBackendResult<()> {
        trace!("simulated relay disconnect");
        self.state.disconnected = true;
        Ok(())
    }

    fn connect(&mut self) -> RelayBackendResult<()> {
        trace!("simulated relay connect");
        self.state.connected = true;
        Ok(())
    }

    fn reconnect(&mut self, seconds: u64) -> RelayBackendResult<()> {
        trace!(seconds, "simulated relay reconnect");
        self.state.reconnected = true;
        self.state.reconnect_seconds = Some(seconds);
        Ok(())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
