//! NOR-flash driver for the `wifi-config` settings region.
//!
//! The settings occupy the first block of their own data partition; writes
//! erase that block and rewrite the framed image in place.

use embedded_storage::nor_flash::{NorFlash, ReadNorFlash};
use esp_storage::FlashStorage;
use skimap_portal::SETTINGS_IMAGE_SIZE;

const BLOCK_SIZE: u32 = 4096;

#[derive(Debug)]
pub enum StorageError {
    Driver,
}

/// Raw access to the settings block.
pub struct SettingsFlash {
    flash: *mut FlashStorage<'static>,
    offset: u32,
}

// Safety: all flash access happens on the single-core cooperative executor
// and the read/write operations below contain no await points, so no two
// tasks can ever be inside them at once.
unsafe impl Send for SettingsFlash {}
unsafe impl Sync for SettingsFlash {}

impl SettingsFlash {
    pub fn new(flash: *mut FlashStorage<'static>, offset: u32) -> Self {
        Self { flash, offset }
    }

    pub fn read_image(&self, image: &mut [u8; SETTINGS_IMAGE_SIZE]) -> Result<(), StorageError> {
        // Safety: see the Send/Sync note above.
        unsafe { &mut *self.flash }
            .read(self.offset, image)
            .map_err(|_| StorageError::Driver)
    }

    pub fn write_image(&self, image: &[u8; SETTINGS_IMAGE_SIZE]) -> Result<(), StorageError> {
        // Safety: see the Send/Sync note above.
        let flash = unsafe { &mut *self.flash };
        flash
            .erase(self.offset, self.offset + BLOCK_SIZE)
            .map_err(|_| StorageError::Driver)?;
        flash
            .write(self.offset, image)
            .map_err(|_| StorageError::Driver)
    }
}
