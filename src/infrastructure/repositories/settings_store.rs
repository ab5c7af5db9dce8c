//! Persisted `wifi-config` settings, flash-backed.

use esp_println::println;
use skimap_portal::{ResetMarker, SETTINGS_IMAGE_SIZE, SettingsRecord};

use crate::infrastructure::drivers::{SettingsFlash, StorageError};

/// Durable store for the one settings record. A record that fails to decode
/// (erased partition, foreign layout) reads back as empty settings; storage
/// trouble is never fatal to boot.
pub struct SettingsStore {
    flash: SettingsFlash,
}

impl SettingsStore {
    pub fn new(flash: SettingsFlash) -> Self {
        Self { flash }
    }

    pub fn load(&self) -> Option<SettingsRecord> {
        let mut image = [0u8; SETTINGS_IMAGE_SIZE];
        self.flash.read_image(&mut image).ok()?;
        SettingsRecord::from_image(&image)
    }

    pub fn load_or_default(&self) -> SettingsRecord {
        self.load().unwrap_or_default()
    }

    pub fn save(&self, record: &SettingsRecord) -> Result<(), StorageError> {
        self.flash.write_image(&record.to_image())
    }

    /// Store submitted credentials exactly as received. The reset marker is
    /// disarmed in the same write: the reboot that follows a save is an
    /// intentional restart, not a physical double-reset.
    pub fn save_credentials(&self, ssid: &str, password: &str) -> Result<(), StorageError> {
        let mut record = self.load_or_default();
        record.set_credentials(ssid, password);
        record.set_reset_marker(ResetMarker::Disarmed);
        self.save(&record)
    }

    /// Arm the double-reset marker, preserving stored credentials.
    pub fn arm_reset_marker(&self) {
        let mut record = self.load_or_default();
        record.set_reset_marker(ResetMarker::Armed);
        if self.save(&record).is_err() {
            println!("settings: failed to arm reset marker");
        }
    }

    /// Factory reset: store the empty record (no credentials, marker
    /// disarmed) over whatever was there.
    pub fn clear(&self) {
        if self.save(&SettingsRecord::empty()).is_err() {
            println!("settings: failed to clear settings");
        }
    }
}
