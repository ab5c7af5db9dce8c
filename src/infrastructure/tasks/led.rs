//! LED indicator actor.
//!
//! Owns the strip driver and the hue cycle; everything else talks to it
//! through the command channel.

use embassy_sync::channel::Channel;
use skimap_portal::{HueCycle, OFF_FRAME};

use crate::infrastructure::drivers::EspLedDriver;
use crate::infrastructure::types::{LedChannel, LedCommand, LedSender};

static LED_COMMANDS: LedChannel = Channel::new();

pub fn led_command_sender() -> LedSender {
    LED_COMMANDS.sender()
}

#[embassy_executor::task]
pub async fn led_task(mut driver: EspLedDriver<'static>) {
    let receiver = LED_COMMANDS.receiver();
    let mut cycle = HueCycle::new();

    loop {
        match receiver.receive().await {
            LedCommand::Clear => driver.show(&OFF_FRAME),
            LedCommand::CycleTick => driver.show(&cycle.tick()),
        }
    }
}
