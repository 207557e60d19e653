//! USB relay driven through shell commands on the controlling host.

use super::ThreadSleeper;
use crate::relay::{
    domain::{HostCommand, RelayBackendName},
    ports::{CommandSession, ConstructionParameters, RelayBackend, RelayBackendResult, Sleeper},
};
use std::any::Any;
use std::time::Duration;
use tracing::debug;

/// Shell command that powers the relay on.
pub const POWER_ON_COMMAND: &str = "sudo usb_relay on";

/// Shell command that powers the relay off.
pub const POWER_OFF_COMMAND: &str = "sudo usb_relay off";

/// Output the relay tool may report when toggled; not treated as fatal.
pub const EXPECTED_FAILURE_MARKER: &str = "J283";

/// Construction parameter holding the [`CommandSession`].
pub const SESSION_PARAMETER: &str = "session";

/// Physical relay toggled by `usb_relay` on the session's host.
pub struct UsbRelay {
    session: Box<dyn CommandSession>,
    sleeper: Box<dyn Sleeper>,
    expected_failures: String,
    expected: String,
}

impl UsbRelay {
    /// Creates a USB relay that owns `session`.
    ///
    /// The expected-success identity is captured from the session's host
    /// once, here.
    #[must_use]
    pub fn new(session: Box<dyn CommandSession>) -> Self {
        let expected = session.host();
        Self {
            session,
            sleeper: Box::new(ThreadSleeper),
            expected_failures: EXPECTED_FAILURE_MARKER.to_owned(),
            expected,
        }
    }

    /// Replaces the sleeper used between disconnect and connect.
    #[must_use]
    pub fn with_sleeper(mut self, sleeper: impl Sleeper + 'static) -> Self {
        self.sleeper = Box::new(sleeper);
        self
    }

    /// Factory used by the driver registry.
    ///
    /// Requires a [`SESSION_PARAMETER`] entry holding a command session and
    /// nothing else.
    ///
    /// # Errors
    ///
    /// Returns [`crate::relay::ports::RelayBackendError`] when the session is
    /// missing, is not a session, or when unknown parameters remain.
    pub fn from_parameters(
        mut parameters: ConstructionParameters,
    ) -> RelayBackendResult<Box<dyn RelayBackend>> {
        let name = RelayBackendName::usb();
        let session = parameters.take_session(&name, SESSION_PARAMETER)?;
        parameters.finish(&name)?;
        Ok(Box::new(Self::new(session)))
    }

    /// Returns the tolerated failure marker.
    #[must_use]
    pub fn expected_failures(&self) -> &str {
        &self.expected_failures
    }

    /// Returns the expected success identity taken from the session host.
    #[must_use]
    pub fn expected(&self) -> &str {
        &self.expected
    }

    fn issue(&self, command: &str) -> RelayBackendResult<()> {
        let request = HostCommand::new(command, &self.expected_failures, &self.expected)
            .with_wait_for_prompt(false);
        debug!(command, host = %self.expected, "issuing usb relay command");
        self.session.run_host_command(&request)?;
        Ok(())
    }
}

impl RelayBackend for UsbRelay {
    fn disconnect(&mut self) -> RelayBackendResult<()> {
        self.issue(POWER_OFF_COMMAND)
    }

    fn connect(&mut self) -> RelayBackendResult<()> {
        self.issue(POWER_ON_COMMAND)
    }

    fn reconnect(&mut self, seconds: u64) -> RelayBackendResult<()> {
        self.disconnect()?;
        self.sleeper.sleep(Duration::from_secs(seconds));
        self.connect()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
