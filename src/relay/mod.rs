//! Relay backends for interrupting power or connectivity to a device under
//! test.
//!
//! A [`services::Relay`] facade owns exactly one backend, resolved by name
//! through a [`services::RelayDriverRegistry`]. The module follows hexagonal
//! architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Registry and facade in [`services`]
//! - Serde construction surface in [`config`]

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
