//! Deferred reboot actor.
//!
//! `/save` answers its request first and signals here; the pause lets the
//! confirmation page reach the browser before the device restarts.

use embassy_time::{Duration, Timer};
use esp_println::println;

use crate::config;
use crate::infrastructure::types::DeviceState;

#[embassy_executor::task]
pub async fn reboot_task(state: &'static DeviceState) {
    state.reboot.wait().await;
    println!(
        "reboot: configuration saved, restarting in {} ms",
        config::SAVE_REBOOT_DELAY_MS
    );
    Timer::after(Duration::from_millis(config::SAVE_REBOOT_DELAY_MS)).await;
    esp_hal::system::software_reset();
}
