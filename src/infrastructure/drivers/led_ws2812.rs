//! WS2812 strip driver using the RMT peripheral.
//!
//! The RMT generates the strip's bit timing; frames come ready-made from
//! the portal crate's hue cycle.

use esp_hal::xtensa_lx::interrupt;
use esp_hal::{gpio::interconnect::PeripheralOutput, peripherals::RMT, rmt::Rmt, time::Rate};
use esp_hal_smartled::{SmartLedsAdapter, buffer_size, smart_led_buffer};
use skimap_portal::STRIP_LEN;
use smart_leds::{RGB, SmartLedsWrite};
use static_cell::make_static;

/// ESP-specific driver for the fixed-length indicator strip.
pub struct EspLedDriver<'a> {
    adapter: SmartLedsAdapter<'a, { buffer_size(STRIP_LEN) }>,
}

impl<'a> EspLedDriver<'a> {
    /// # Arguments
    /// * `rmt` - RMT peripheral
    /// * `pin` - GPIO pin connected to the strip's data line
    pub fn new<O>(rmt: RMT<'a>, pin: O) -> Self
    where
        O: PeripheralOutput<'a>,
    {
        let rmt = Rmt::new(rmt, Rate::from_mhz(80)).unwrap();

        // The RMT conversion buffer must outlive the driver; make_static!
        // gives it a 'static lifetime.
        let rmt_buffer = make_static!(smart_led_buffer!(STRIP_LEN));
        let adapter = SmartLedsAdapter::new(rmt.channel0, pin, rmt_buffer);

        Self { adapter }
    }

    /// Push one frame to the strip. Interrupts are held off while the RMT
    /// is fed, the bit timing does not survive preemption.
    pub fn show(&mut self, frame: &[RGB<u8>; STRIP_LEN]) {
        interrupt::free(|| {
            let _ = self.adapter.write(frame.iter().copied());
        });
    }
}
