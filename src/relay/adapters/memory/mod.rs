//! In-memory collaborators for deterministic relay tests.

mod session;

pub use session::{RecordedCommand, RecordingSession};
