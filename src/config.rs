//! Compile-time device configuration.

use embassy_net::Ipv4Address;
use esp_hal::efuse::Efuse;

pub(crate) const BUILD_VERSION: &str = env!("BUILD_VERSION");

/// SSID of the open configuration access point.
pub const AP_SSID: &str = "Skimap setup";

/// Static addressing for the configuration access point.
pub const AP_ADDRESS: Ipv4Address = Ipv4Address::new(192, 168, 4, 1);
pub const AP_PREFIX_LEN: u8 = 24;

/// DHCP hostname announced in station mode.
pub const HOSTNAME: &str = "skimap";

/// Flash offset of the `wifi-config` settings partition (partitions.csv).
pub const SETTINGS_PARTITION_OFFSET: u32 = 0x31_0000;

/// Station connect: poll every 500 ms against a 10 second deadline.
pub const CONNECT_DEADLINE_MS: u64 = 10_000;
pub const CONNECT_POLL_MS: u64 = 500;

/// Runtime loop link-check interval.
pub const LINK_POLL_MS: u64 = 1_000;

/// Pause before rebooting after a factory reset, so the serial log flushes.
pub const RESET_REBOOT_DELAY_MS: u64 = 1_000;

/// Pause between answering `/save` and rebooting, so the confirmation page
/// reaches the browser.
pub const SAVE_REBOOT_DELAY_MS: u64 = 2_000;

/// Resort status API host and path. Empty host means no deployment is
/// configured and the poller refuses to run.
pub const RESORT_API_HOST: &str = "";
pub const RESORT_API_PATH: &str = "/conditions?resort=";

/// Chip-unique identifier, derived from the factory MAC.
pub(crate) fn hardware_id() -> u32 {
    let mac = Efuse::mac_address();
    u32::from_be_bytes([mac[2], mac[3], mac[4], mac[5]])
}

pub(crate) fn mac_address() -> [u8; 6] {
    Efuse::mac_address()
}

#[macro_export]
macro_rules! led_gpio {
    ($p:expr) => {
        $p.GPIO13
    };
}
