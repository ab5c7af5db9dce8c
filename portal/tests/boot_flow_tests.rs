use skimap_portal::boot::{BootPlan, boot_plan, boot_plan_for};
use skimap_portal::link::{LinkState, should_start_portal};
use skimap_portal::settings::{ResetMarker, SettingsRecord};

#[test]
fn fresh_device_boots_into_provisioning() {
    assert_eq!(
        boot_plan(ResetMarker::Disarmed, true),
        BootPlan::StartPortal
    );
}

#[test]
fn provisioned_device_attempts_station_connect() {
    assert_eq!(
        boot_plan(ResetMarker::Disarmed, false),
        BootPlan::ConnectStation
    );
}

#[test]
fn armed_marker_wipes_even_a_provisioned_device() {
    assert_eq!(boot_plan(ResetMarker::Armed, false), BootPlan::FactoryReset);
    assert_eq!(boot_plan(ResetMarker::Armed, true), BootPlan::FactoryReset);
}

#[test]
fn double_reset_sequence_ends_in_provisioning() {
    // Boot 1: fresh device arms the marker and keeps its credentials.
    let mut record = SettingsRecord::empty();
    record.set_credentials("summit-lodge", "pow");
    record.set_reset_marker(ResetMarker::Armed);

    // Physical reset while armed: boot 2 must wipe.
    assert_eq!(boot_plan_for(&record), BootPlan::FactoryReset);
    record = SettingsRecord::empty();

    // Boot 3 after the wipe: empty settings, disarmed marker, provisioning.
    assert_eq!(record.reset_marker(), ResetMarker::Disarmed);
    assert_eq!(boot_plan_for(&record), BootPlan::StartPortal);
}

#[test]
fn portal_entry_requires_link_down_and_no_running_ap() {
    assert!(should_start_portal(LinkState::Disconnected, false));
    assert!(should_start_portal(LinkState::Connecting, false));
    assert!(!should_start_portal(LinkState::Connected, false));
}

#[test]
fn portal_is_never_reentered_while_started() {
    // No-reentry guarantee: with the flag set, no link state may start it.
    for link in [
        LinkState::Disconnected,
        LinkState::Connecting,
        LinkState::Connected,
    ] {
        assert!(!should_start_portal(link, true));
    }
}
