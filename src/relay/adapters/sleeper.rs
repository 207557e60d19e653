//! Wall-clock sleeper backed by the calling thread.

use crate::relay::ports::Sleeper;
use std::time::Duration;

/// Blocks the calling thread with [`std::thread::sleep`].
///
/// There is no way to cancel an in-progress sleep.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadSleeper;

impl Sleeper for ThreadSleeper {
    fn sleep(&self, duration: Duration) {
        std::thread::sleep(duration);
    }
}
