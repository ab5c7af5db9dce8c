//! Boot decision table.

use crate::settings::{ResetMarker, SettingsRecord};

/// What the boot orchestrator does after reading the settings record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootPlan {
    /// Reset marker was armed: wipe the record and reboot. Unconditional,
    /// no recovery path.
    FactoryReset,
    /// No stored network name: bring up the configuration access point.
    StartPortal,
    /// Credentials present: attempt a station connection.
    ConnectStation,
}

/// Decide the boot path. The reset marker takes precedence: an armed marker
/// wipes even a fully provisioned device.
pub fn boot_plan(marker: ResetMarker, ssid_empty: bool) -> BootPlan {
    match marker {
        ResetMarker::Armed => BootPlan::FactoryReset,
        ResetMarker::Disarmed if ssid_empty => BootPlan::StartPortal,
        ResetMarker::Disarmed => BootPlan::ConnectStation,
    }
}

/// Convenience over a whole record.
pub fn boot_plan_for(record: &SettingsRecord) -> BootPlan {
    boot_plan(record.reset_marker(), record.ssid_is_empty())
}
