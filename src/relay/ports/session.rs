//! Command-execution session port consumed by hardware relay backends.

use crate::relay::domain::HostCommand;
use std::sync::Arc;
use thiserror::Error;

/// Result type for command session operations.
pub type SessionResult<T> = Result<T, SessionError>;

/// Channel to the host that controls a physical relay.
///
/// Implementations own the transport. They classify command output using
/// the hints carried by [`HostCommand`] and return an error only for
/// failures outside those hints.
#[cfg_attr(test, mockall::automock)]
pub trait CommandSession: Send {
    /// Returns the identity of the host this session is attached to.
    fn host(&self) -> String;

    /// Runs a command on the host console.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError`] when the command fails in a way not covered
    /// by its expected-failure or expected-success hints.
    fn run_host_command(&self, command: &HostCommand) -> SessionResult<()>;
}

/// Errors returned by command session implementations.
#[derive(Debug, Clone, Error)]
pub enum SessionError {
    /// The command ran and reported an unexpected failure.
    #[error("host command '{command}' failed: {output}")]
    CommandFailed {
        /// Command line that failed.
        command: String,
        /// Output captured from the host.
        output: String,
    },

    /// The command did not complete in time.
    #[error("host command '{command}' timed out")]
    Timeout {
        /// Command line that timed out.
        command: String,
    },

    /// The session transport failed.
    #[error("command session transport error: {0}")]
    Transport(Arc<dyn std::error::Error + Send + Sync>),
}

impl SessionError {
    /// Wraps a transport error from the session adapter.
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Arc::new(err))
    }
}
