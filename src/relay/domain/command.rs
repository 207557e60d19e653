//! Host console command requests issued through a command session.

/// A shell command to run on the host console, with outcome hints.
///
/// `expected_failures` names output that the session may report without it
/// being fatal, and `expected` is the identity the session treats as a
/// successful return. Both are hints for the session's own classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostCommand {
    command: String,
    expected_failures: String,
    expected: String,
    wait_for_prompt: bool,
}

impl HostCommand {
    /// Creates a command that waits for the shell prompt before returning.
    #[must_use]
    pub fn new(
        command: impl Into<String>,
        expected_failures: impl Into<String>,
        expected: impl Into<String>,
    ) -> Self {
        Self {
            command: command.into(),
            expected_failures: expected_failures.into(),
            expected: expected.into(),
            wait_for_prompt: true,
        }
    }

    /// Sets whether the session waits for a shell prompt before returning.
    #[must_use]
    pub const fn with_wait_for_prompt(mut self, wait_for_prompt: bool) -> Self {
        self.wait_for_prompt = wait_for_prompt;
        self
    }

    /// Returns the shell command line.
    #[must_use]
    pub fn command(&self) -> &str {
        &self.command
    }

    /// Returns the tolerated failure marker.
    #[must_use]
    pub fn expected_failures(&self) -> &str {
        &self.expected_failures
    }

    /// Returns the expected success identity.
    #[must_use]
    pub fn expected(&self) -> &str {
        &self.expected
    }

    /// Returns whether the session waits for a shell prompt.
    #[must_use]
    pub const fn wait_for_prompt(&self) -> bool {
        self.wait_for_prompt
    }
}
