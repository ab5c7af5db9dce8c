//! Indicator hue cycle.
//!
//! One frame per successful connection event, not a timed animation: every
//! tick paints the strip with consecutive hues at full saturation and value,
//! then rotates the base hue by the strip length so the next tick starts
//! where this one ended.

use smart_leds::RGB;
use smart_leds::hsv::{Hsv, hsv2rgb};

/// Strip length. Fixed at compile time, no dynamic reconfiguration.
pub const STRIP_LEN: usize = 20;

/// An all-off frame.
pub const OFF_FRAME: [RGB<u8>; STRIP_LEN] = [RGB { r: 0, g: 0, b: 0 }; STRIP_LEN];

/// Rotating hue generator. Hue arithmetic wraps at 255 like the 8-bit HSV
/// color wheel it indexes.
#[derive(Debug, Default)]
pub struct HueCycle {
    base: u8,
}

impl HueCycle {
    pub const fn new() -> Self {
        Self { base: 0 }
    }

    /// Render the next frame and advance the wheel.
    pub fn tick(&mut self) -> [RGB<u8>; STRIP_LEN] {
        let mut frame = OFF_FRAME;
        let mut hue = self.base;
        for led in &mut frame {
            *led = hsv2rgb(Hsv {
                hue,
                sat: 255,
                val: 255,
            });
            hue = hue.wrapping_add(1);
        }
        self.base = hue;
        frame
    }
}
