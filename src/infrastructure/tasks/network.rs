//! Network supervisor.
//!
//! Implements the firmware's three-state flow on the radio: a bounded
//! station-connect attempt, fallback to the configuration access point,
//! and the indefinite runtime loop that re-enters provisioning when
//! connectivity is lost. The access point and station mode are never both
//! the intended target; this task selects one at a time.

use embassy_net::{Runner, Stack};
use embassy_time::{Duration, Instant, Timer, with_timeout};
use esp_println::println;
use esp_radio::wifi::{
    AccessPointConfig, AuthMethod, ClientConfig, ModeConfig, WifiController, WifiDevice,
};
use skimap_portal::{ConnectAttempt, ConnectStatus, SettingsRecord, should_start_portal};

use crate::config;
use crate::infrastructure::drivers::link_state;
use crate::infrastructure::types::{DeviceState, LedCommand};

/// Bound on waiting for the access-point link after a start request.
const AP_LINK_WAIT_MS: u64 = 5_000;
const AP_LINK_POLL_MS: u64 = 100;

#[embassy_executor::task]
pub async fn net_supervisor_task(
    state: &'static DeviceState,
    mut controller: WifiController<'static>,
    sta_stack: Stack<'static>,
    ap_stack: Stack<'static>,
) {
    let record = state.settings.load_or_default();

    if record.ssid_is_empty() {
        start_access_point(state, &mut controller, ap_stack).await;
    } else {
        match connect_station(&mut controller, sta_stack, &record).await {
            ConnectStatus::Connected => {
                println!("network: connected to '{}'", record.ssid());
                state.set_ap_started(false);
                state.led.send(LedCommand::CycleTick).await;
            }
            _ => {
                println!("network: connect deadline elapsed, falling back to portal");
                start_access_point(state, &mut controller, ap_stack).await;
            }
        }
    }

    // Runtime loop: runs until power loss or reset. A lost station link
    // re-enters provisioning; station mode is never retried.
    loop {
        let link = link_state(sta_stack);
        if should_start_portal(link, state.ap_started()) {
            println!("network: link lost, starting configuration portal");
            start_access_point(state, &mut controller, ap_stack).await;
        }
        Timer::after(Duration::from_millis(config::LINK_POLL_MS)).await;
    }
}

/// One bounded station-connect attempt.
///
/// Configures client mode, fires the connect request, then polls the link
/// every [`config::CONNECT_POLL_MS`] against the 10 s deadline. Association
/// errors are not distinguished from an unreachable network; every
/// non-success ends as [`ConnectStatus::TimedOut`].
async fn connect_station(
    controller: &mut WifiController<'static>,
    sta_stack: Stack<'static>,
    record: &SettingsRecord,
) -> ConnectStatus {
    let ssid = record.ssid();
    let password = record.password();

    let client_config = if password.is_empty() {
        ClientConfig::default()
            .with_ssid(ssid.as_str().into())
            .with_auth_method(AuthMethod::None)
    } else {
        ClientConfig::default()
            .with_ssid(ssid.as_str().into())
            .with_password(password.as_str().into())
    };

    if let Err(e) = controller.set_config(&ModeConfig::Client(client_config)) {
        println!("network: invalid client config: {:?}", e);
        return ConnectStatus::TimedOut;
    }
    if let Err(e) = controller.start_async().await {
        println!("network: failed to start station mode: {:?}", e);
        return ConnectStatus::TimedOut;
    }

    let mut attempt = ConnectAttempt::new(config::CONNECT_DEADLINE_MS, config::CONNECT_POLL_MS);
    let started = Instant::now();

    let deadline = Duration::from_millis(config::CONNECT_DEADLINE_MS);
    match with_timeout(deadline, controller.connect_async()).await {
        // Deadline spent inside association.
        Err(_) => return ConnectStatus::TimedOut,
        Ok(Err(e)) => println!("network: association failed: {:?}", e),
        Ok(Ok(())) => {}
    }
    attempt.consume(started.elapsed().as_millis());

    // Poll for link + address on the 500 ms cadence.
    loop {
        let connected = link_state(sta_stack).is_connected();
        match attempt.advance(connected) {
            ConnectStatus::Pending => {
                Timer::after(Duration::from_millis(attempt.poll_interval_ms())).await;
            }
            done => return done,
        }
    }
}

/// Bring up the configuration access point.
///
/// Idempotent via the AP-Started flag: a second call while started is a
/// no-op. On any failure the routine logs and returns with the flag still
/// unset, so a later loop iteration may retry.
async fn start_access_point(
    state: &'static DeviceState,
    controller: &mut WifiController<'static>,
    ap_stack: Stack<'static>,
) {
    if state.ap_started() {
        return;
    }

    println!("network: starting access point '{}'", config::AP_SSID);

    // Leaving station mode: the radio must be stopped before it can be
    // reconfigured as an access point.
    if matches!(controller.is_started(), Ok(true)) {
        if let Err(e) = controller.stop_async().await {
            println!("network: failed to stop station mode: {:?}", e);
            return;
        }
    }

    let ap_config = AccessPointConfig::default()
        .with_ssid(config::AP_SSID.into())
        .with_auth_method(AuthMethod::None);
    if let Err(e) = controller.set_config(&ModeConfig::AccessPoint(ap_config)) {
        println!("network: invalid access point config: {:?}", e);
        return;
    }
    if let Err(e) = controller.start_async().await {
        println!("network: failed to start access point: {:?}", e);
        return;
    }

    // Wait (bounded) for the static addressing to come up.
    let mut waited = 0;
    while !ap_stack.is_link_up() {
        if waited >= AP_LINK_WAIT_MS {
            println!("network: access point link did not come up");
            return;
        }
        Timer::after(Duration::from_millis(AP_LINK_POLL_MS)).await;
        waited += AP_LINK_POLL_MS;
    }

    state.set_ap_started(true);
    println!(
        "network: portal reachable at http://{}/",
        config::AP_ADDRESS
    );
}

#[embassy_executor::task]
pub async fn sta_net_runner_task(mut runner: Runner<'static, WifiDevice<'static>>) {
    runner.run().await;
}

#[embassy_executor::task]
pub async fn ap_net_runner_task(mut runner: Runner<'static, WifiDevice<'static>>) {
    runner.run().await;
}
