//! Boot orchestration: double-reset detection and mode selection.

use esp_println::println;
use skimap_portal::{BootPlan, boot_plan_for};

use crate::infrastructure::repositories::SettingsStore;

/// Runs once at startup, before any task is spawned.
pub struct BootController<'a> {
    settings: &'a SettingsStore,
}

impl<'a> BootController<'a> {
    pub fn new(settings: &'a SettingsStore) -> Self {
        Self { settings }
    }

    /// Evaluate the reset marker and pick the boot path.
    ///
    /// An armed marker means the device was physically reset during the
    /// previous boot: the settings are wiped here and the caller must
    /// reboot unconditionally. On every other boot the marker is re-armed
    /// so the *next* physical reset triggers the wipe.
    pub fn on_boot(&self) -> BootPlan {
        let record = self.settings.load_or_default();
        let plan = boot_plan_for(&record);

        match plan {
            BootPlan::FactoryReset => {
                println!("boot: reset marker armed, clearing settings");
                self.settings.clear();
                println!("boot: settings cleared, restarting");
            }
            BootPlan::StartPortal => {
                self.settings.arm_reset_marker();
                println!("boot: no stored network, starting configuration portal");
            }
            BootPlan::ConnectStation => {
                self.settings.arm_reset_marker();
                println!("boot: connecting to '{}'", record.ssid());
            }
        }
        plan
    }
}
