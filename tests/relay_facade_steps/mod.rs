//! Step definitions for relay facade BDD scenarios.

pub mod given;
pub mod then;
pub mod when;
pub mod world;
