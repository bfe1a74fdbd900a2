use rand::RngCore;

use super::{Effect, Frame};
use crate::{color::Rgb, math8::fraction8};

/// Phase advance per frame, in radians
const PULSE_OMEGA: f32 = 0.1;

/// Smooth breathing between black and the commanded brightness
#[derive(Debug, Clone)]
pub struct PulseEffect;

impl PulseEffect {
    /// Brightness of the given frame
    #[allow(clippy::cast_precision_loss)]
    pub fn level(frame: u32, brightness: u8) -> u8 {
        let wave = (libm::sinf(frame as f32 * PULSE_OMEGA) + 1.0) / 2.0;
        fraction8(wave, brightness)
    }
}

impl Effect for PulseEffect {
    fn render<R: RngCore>(&mut self, frame: &Frame<'_>, _rng: &mut R, leds: &mut [Rgb]) {
        let level = Self::level(frame.index, frame.state.brightness);
        leds.fill(frame.state.color.at(level));
    }
}
