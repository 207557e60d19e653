//! Test doubles shared by relay unit tests.

use crate::relay::ports::{MockCommandSession, RelayBackend, RelayBackendResult};
use std::any::Any;
use std::sync::{Arc, Mutex};

/// Operation observed by [`CallLogRelay`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Call {
    Disconnect,
    Connect,
    Reconnect(u64),
}

/// Backend that appends every call to a shared log.
#[derive(Debug, Clone, Default)]
pub struct CallLogRelay {
    pub calls: Arc<Mutex<Vec<Call>>>,
}

impl CallLogRelay {
    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().expect("call log lock").clone()
    }

    fn push(&self, call: Call) {
        self.calls.lock().expect("call log lock").push(call);
    }
}

impl RelayBackend for CallLogRelay {
    fn disconnect(&mut self) -> RelayBackendResult<()> {
        self.push(Call::Disconnect);
        Ok(())
    }

    fn connect(&mut self) -> RelayBackendResult<()> {
        self.push(Call::Connect);
        Ok(())
    }

    fn reconnect(&mut self, seconds: u64) -> RelayBackendResult<()> {
        self.push(Call::Reconnect(seconds));
        Ok(())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Mock session that reports `host` and expects no commands.
pub fn session_on_host(host: &str) -> MockCommandSession {
    let mut session = MockCommandSession::new();
    session.expect_host().return_const(host.to_owned());
    session
}
