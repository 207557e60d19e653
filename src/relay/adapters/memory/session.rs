//! In-memory command session that records what a backend issues.

use crate::relay::{
    domain::HostCommand,
    ports::{CommandSession, SessionError, SessionResult},
};
use chrono::{DateTime, Utc};
use mockable::{Clock, DefaultClock};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// A command observed by [`RecordingSession`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCommand {
    command: HostCommand,
    issued_at: DateTime<Utc>,
}

impl RecordedCommand {
    /// Returns the command request as issued.
    #[must_use]
    pub const fn command(&self) -> &HostCommand {
        &self.command
    }

    /// Returns when the session received the command.
    #[must_use]
    pub const fn issued_at(&self) -> DateTime<Utc> {
        self.issued_at
    }
}

/// Command session that never leaves the process.
///
/// Clones share state, so a test can keep one handle while the backend owns
/// another. Scripted failures follow the session contract: output containing
/// the command's expected-failure marker is tolerated, anything else is
/// returned as [`SessionError::CommandFailed`].
pub struct RecordingSession<C = DefaultClock> {
    host: String,
    clock: Arc<C>,
    state: Arc<RwLock<RecordingState>>,
}

#[derive(Debug, Default)]
struct RecordingState {
    commands: Vec<RecordedCommand>,
    scripted_output: HashMap<String, String>,
}

impl<C> Clone for RecordingSession<C> {
    fn clone(&self) -> Self {
        Self {
            host: self.host.clone(),
            clock: Arc::clone(&self.clock),
            state: Arc::clone(&self.state),
        }
    }
}

impl RecordingSession<DefaultClock> {
    /// Creates a session attached to `host` using the system clock.
    #[must_use]
    pub fn new(host: impl Into<String>) -> Self {
        Self::with_clock(host, Arc::new(DefaultClock))
    }
}

impl<C> RecordingSession<C>
where
    C: Clock + Send + Sync,
{
    /// Creates a session attached to `host` that timestamps with `clock`.
    #[must_use]
    pub fn with_clock(host: impl Into<String>, clock: Arc<C>) -> Self {
        Self {
            host: host.into(),
            clock,
            state: Arc::new(RwLock::new(RecordingState::default())),
        }
    }

    /// Makes every later run of `command` fail with `output`.
    ///
    /// Existing scripts for the same command are replaced.
    ///
    /// # Errors
    ///
    /// Returns session transport errors when lock acquisition fails.
    pub fn fail_command(
        &self,
        command: impl Into<String>,
        output: impl Into<String>,
    ) -> SessionResult<()> {
        let mut state = self
            .state
            .write()
            .map_err(|err| SessionError::transport(std::io::Error::other(err.to_string())))?;
        state.scripted_output.insert(command.into(), output.into());
        Ok(())
    }

    /// Returns every command received so far, oldest first.
    ///
    /// # Errors
    ///
    /// Returns session transport errors when lock acquisition fails.
    pub fn commands(&self) -> SessionResult<Vec<RecordedCommand>> {
        let state = self
            .state
            .read()
            .map_err(|err| SessionError::transport(std::io::Error::other(err.to_string())))?;
        Ok(state.commands.clone())
    }

    /// Returns the command lines received so far, oldest first.
    ///
    /// # Errors
    ///
    /// Returns session transport errors when lock acquisition fails.
    pub fn command_lines(&self) -> SessionResult<Vec<String>> {
        Ok(self
            .commands()?
            .into_iter()
            .map(|recorded| recorded.command.command().to_owned())
            .collect())
    }
}

impl<C> CommandSession for RecordingSession<C>
where
    C: Clock + Send + Sync + 'static,
{
    fn host(&self) -> String {
        self.host.clone()
    }

    fn run_host_command(&self, command: &HostCommand) -> SessionResult<()> {
        let mut state = self
            .state
            .write()
            .map_err(|err| SessionError::transport(std::io::Error::other(err.to_string())))?;
        state.commands.push(RecordedCommand {
            command: command.clone(),
            issued_at: self.clock.utc(),
        });

        let Some(output) = state.scripted_output.get(command.command()) else {
            return Ok(());
        };

        let tolerated = !command.expected_failures().is_empty()
            && output.contains(command.expected_failures());
        if tolerated {
            return Ok(());
        }

        Err(SessionError::CommandFailed {
            command: command.command().to_owned(),
            output: output.clone(),
        })
    }
}
