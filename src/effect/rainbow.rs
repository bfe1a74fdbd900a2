//! Rainbow cycling effect
//!
//! Spreads the full hue circle across the strip and rotates it by a fixed
//! number of degrees every frame.

use rand::RngCore;

use super::{Effect, Frame};
use crate::color::{Rgb, hsv_degrees_to_rgb, scale_rgb};

/// Frames between progress log lines
const LOG_EVERY_FRAMES: u32 = 100;

#[derive(Debug, Clone)]
pub struct RainbowEffect {
    /// Hue advance per frame, in degrees
    hue_step: u16,
}

impl RainbowEffect {
    pub const fn new(hue_step: u16) -> Self {
        Self { hue_step }
    }
}

impl Effect for RainbowEffect {
    #[allow(clippy::cast_possible_truncation)]
    fn render<R: RngCore>(&mut self, frame: &Frame<'_>, _rng: &mut R, leds: &mut [Rgb]) {
        if leds.is_empty() {
            return;
        }

        let len = leds.len() as u64;
        let base = u64::from(frame.index) * u64::from(self.hue_step);
        let brightness = frame.state.brightness;

        for (i, led) in leds.iter_mut().enumerate() {
            let hue = ((base + i as u64 * 360 / len) % 360) as u16;
            *led = scale_rgb(hsv_degrees_to_rgb(hue, 255, 255), brightness);
        }

        if frame.index % LOG_EVERY_FRAMES == 0 {
            log::debug!("rainbow: frame={}, brightness={}", frame.index, brightness);
        }
    }
}
