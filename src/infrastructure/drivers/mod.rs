mod flash;
mod led_ws2812;
mod random;
pub mod wifi;

pub use flash::{SettingsFlash, StorageError};
pub use led_ws2812::EspLedDriver;
pub use wifi::{WifiParts, init_wifi, link_state};
