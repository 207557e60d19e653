//! Blocking wait used between a hardware disconnect and reconnect.

use std::time::Duration;

/// Suspends the calling thread.
#[cfg_attr(test, mockall::automock)]
pub trait Sleeper: Send {
    /// Blocks for `duration`.
    fn sleep(&self, duration: Duration);
}
