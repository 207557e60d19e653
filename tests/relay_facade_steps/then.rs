//! Then steps for relay facade BDD scenarios.

use super::world::RelayWorld;
use dut_power::relay::{
    adapters::SimulatedRelay,
    ports::{RelayBackendError, SessionError},
    services::{RelayError, RelayRegistryError},
};
use rstest_bdd_macros::then;

fn simulated(world: &mut RelayWorld) -> Result<&SimulatedRelay, eyre::Report> {
    world
        .relay_mut()?
        .backend_as::<SimulatedRelay>()
        .ok_or_else(|| eyre::eyre!("expected the simulated backend to be bound"))
}

fn last_operation(world: &RelayWorld) -> Result<&Result<(), RelayError>, eyre::Report> {
    world
        .last_operation
        .as_ref()
        .ok_or_else(|| eyre::eyre!("no relay operation has run"))
}

#[then("the simulated relay recorded a reconnect of {seconds:u64} seconds")]
fn simulated_reconnect_recorded(
    world: &mut RelayWorld,
    seconds: u64,
) -> Result<(), eyre::Report> {
    let relay = simulated(world)?;
    if !relay.reconnected() || relay.reconnect_seconds() != Some(seconds) {
        return Err(eyre::eyre!(
            "expected reconnect of {seconds} seconds, found {:?}",
            relay.state()
        ));
    }
    Ok(())
}

#[then("the simulated relay is not connected")]
fn simulated_not_connected(world: &mut RelayWorld) -> Result<(), eyre::Report> {
    let relay = simulated(world)?;
    if relay.connected() || relay.disconnected() {
        return Err(eyre::eyre!(
            "reconnect should not toggle other markers, found {:?}",
            relay.state()
        ));
    }
    Ok(())
}

#[then("construction fails with a backend not found error")]
fn construction_fails_not_found(world: &RelayWorld) -> Result<(), eyre::Report> {
    if world.relay.is_some() {
        return Err(eyre::eyre!("expected no relay to be constructed"));
    }
    match &world.construction_error {
        Some(RelayError::Registry(RelayRegistryError::BackendNotFound(_))) => Ok(()),
        other => Err(eyre::eyre!("expected backend not found, got {other:?}")),
    }
}

#[then(r#"the session received "{first}" then "{second}""#)]
fn session_received(
    world: &RelayWorld,
    first: String,
    second: String,
) -> Result<(), eyre::Report> {
    let session = world
        .session
        .as_ref()
        .ok_or_else(|| eyre::eyre!("no session in scenario world"))?;
    let lines = session
        .command_lines()
        .map_err(|err| eyre::eyre!("reading session commands failed: {err}"))?;
    if lines != vec![first.clone(), second.clone()] {
        return Err(eyre::eyre!(
            "expected [{first}, {second}], session received {lines:?}"
        ));
    }
    Ok(())
}

#[then("the operation fails with a command failure")]
fn operation_fails_with_command_failure(world: &RelayWorld) -> Result<(), eyre::Report> {
    match last_operation(world)? {
        Err(RelayError::Backend(RelayBackendError::Session(SessionError::CommandFailed {
            ..
        }))) => Ok(()),
        other => Err(eyre::eyre!("expected a command failure, got {other:?}")),
    }
}

#[then("the operation succeeds")]
fn operation_succeeds(world: &RelayWorld) -> Result<(), eyre::Report> {
    if let Err(err) = last_operation(world)? {
        return Err(eyre::eyre!("expected success, got {err}"));
    }
    Ok(())
}
