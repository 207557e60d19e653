//! Port contracts for relay backends and the collaborators they drive.

mod backend;
mod parameters;
mod session;
mod sleeper;

pub use backend::{RelayBackend, RelayBackendError, RelayBackendResult};
pub use parameters::{ConstructionParameters, ParameterValue};
#[cfg(test)]
pub(crate) use session::MockCommandSession;
pub use session::{CommandSession, SessionError, SessionResult};
#[cfg(test)]
pub(crate) use sleeper::MockSleeper;
pub use sleeper::Sleeper;
