//! When steps for relay facade BDD scenarios.

use super::world::RelayWorld;
use dut_power::relay::services::Relay;
use rstest_bdd_macros::when;

#[when("the relay is constructed")]
fn construct_relay(world: &mut RelayWorld) {
    let parameters = world.parameters();
    let result = Relay::with_registry(&world.registry, world.backend_name.as_deref(), parameters);
    world.construction_error = result.as_ref().err().cloned();
    world.relay = result.ok();
}

#[when("the relay is reconnected without a duration")]
fn reconnect_default(world: &mut RelayWorld) -> Result<(), eyre::Report> {
    let result = world.relay_mut()?.reconnect();
    world.last_operation = Some(result);
    Ok(())
}

#[when("the relay is reconnected for {seconds:u64} seconds")]
fn reconnect_for(world: &mut RelayWorld, seconds: u64) -> Result<(), eyre::Report> {
    let result = world.relay_mut()?.reconnect_for(seconds);
    world.last_operation = Some(result);
    Ok(())
}

#[when("the relay is disconnected")]
fn disconnect(world: &mut RelayWorld) -> Result<(), eyre::Report> {
    let result = world.relay_mut()?.disconnect();
    world.last_operation = Some(result);
    Ok(())
}

#[when("the relay is connected")]
fn connect(world: &mut RelayWorld) -> Result<(), eyre::Report> {
    let result = world.relay_mut()?.connect();
    world.last_operation = Some(result);
    Ok(())
}
