//! Observable markers recorded by the simulated relay.

/// Snapshot of the simulated relay's markers.
///
/// The flags are independent observations ("was this operation invoked"),
/// not a mutually exclusive connection state. Setting one never clears
/// another.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimulatedRelayState {
    /// `connect` has been called at least once.
    pub connected: bool,
    /// `disconnect` has been called at least once.
    pub disconnected: bool,
    /// `reconnect` has been called at least once.
    pub reconnected: bool,
    /// Duration passed to the most recent `reconnect`, in seconds.
    pub reconnect_seconds: Option<u64>,
}
