//! Domain model for relay backend selection and construction.
//!
//! Names, host commands and the observable state of the simulated relay live
//! here. Sessions and sleeping are kept behind the port boundary.

mod command;
mod error;
mod name;
mod state;

pub use command::HostCommand;
pub use error::RelayDomainError;
pub use name::RelayBackendName;
pub use state::SimulatedRelayState;
