//! Dut-power: relay control for hardware test benches.
//!
//! This crate interrupts or restores power and connectivity to a device under
//! test through a uniform connect, disconnect and reconnect contract. The
//! relay type is chosen at runtime by name from a driver registry.
//!
//! # Architecture
//!
//! Dut-power follows hexagonal architecture principles:
//!
//! - **Domain**: Backend names, host commands and simulated relay state
//! - **Ports**: The relay capability contract and the command session it
//!   drives
//! - **Adapters**: Simulated and USB relays, plus in-memory collaborators
//!
//! # Modules
//!
//! - [`relay`]: Backend registry, relay facade and built-in backends
//!
//! # Example
//!
//! ```
//! use dut_power::relay::{
//!     adapters::SimulatedRelay, ports::ConstructionParameters, services::Relay,
//! };
//!
//! let mut relay = Relay::new(None, ConstructionParameters::new())?;
//! relay.reconnect()?;
//!
//! let simulated = relay.backend_as::<SimulatedRelay>();
//! assert_eq!(simulated.and_then(SimulatedRelay::reconnect_seconds), Some(5));
//! # Ok::<(), dut_power::relay::services::RelayError>(())
//! ```

pub mod relay;
