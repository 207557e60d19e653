//! Given steps for relay facade BDD scenarios.

use super::world::RelayWorld;
use dut_power::relay::{adapters::memory::RecordingSession, domain::RelayBackendName};
use eyre::WrapErr;
use rstest_bdd_macros::given;

#[given("no backend name")]
fn no_backend_name(world: &mut RelayWorld) {
    world.backend_name = None;
}

#[given(r#"a backend named "{name}""#)]
fn a_backend_named(world: &mut RelayWorld, name: String) {
    world.backend_name = Some(name);
}

#[given(r#"a USB relay session on host "{host}""#)]
fn usb_relay_session(world: &mut RelayWorld, host: String) {
    world.backend_name = Some(RelayBackendName::USB.to_owned());
    world.session = Some(RecordingSession::new(host));
}

#[given(r#"the host fails "{command}" with "{output}""#)]
fn host_fails_command(
    world: &mut RelayWorld,
    command: String,
    output: String,
) -> Result<(), eyre::Report> {
    let session = world
        .session
        .as_ref()
        .ok_or_else(|| eyre::eyre!("no session in scenario world"))?;
    session
        .fail_command(command, output)
        .wrap_err("script host failure")?;
    Ok(())
}
