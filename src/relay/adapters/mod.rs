//! Adapter implementations for relay backend and collaborator ports.

pub mod memory;

mod simulated;
mod sleeper;
mod usb;

pub use simulated::SimulatedRelay;
pub use sleeper::ThreadSleeper;
pub use usb::{
    EXPECTED_FAILURE_MARKER, POWER_OFF_COMMAND, POWER_ON_COMMAND, SESSION_PARAMETER, UsbRelay,
};
