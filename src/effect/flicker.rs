use rand::RngCore;

use super::{Effect, Frame};
use crate::color::Rgb;

/// Largest brightness drop of a single frame (exclusive)
pub const FLICKER_DEPTH: u32 = 50;

/// Candle-like flicker: the whole strip dims by a random amount each frame
#[derive(Debug, Clone)]
pub struct FlickerEffect;

impl Effect for FlickerEffect {
    #[allow(clippy::cast_possible_truncation)]
    fn render<R: RngCore>(&mut self, frame: &Frame<'_>, rng: &mut R, leds: &mut [Rgb]) {
        let drop = (rng.next_u32() % FLICKER_DEPTH) as u8;
        let level = frame.state.brightness.saturating_sub(drop);
        leds.fill(frame.state.color.at(level));
    }
}
