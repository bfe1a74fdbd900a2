use rand::RngCore;

use super::{Effect, Frame};
use crate::{
    color::{BLACK, Rgb},
    config::StrobeTiming,
};

/// Uniform on/off flashing of the current color
#[derive(Debug, Clone)]
pub struct StrobeEffect {
    timing: StrobeTiming,
}

impl StrobeEffect {
    pub const fn new(timing: StrobeTiming) -> Self {
        Self { timing }
    }

    /// Whether the given frame is lit
    pub const fn is_on(&self, frame: u32) -> bool {
        let period = if self.timing.period == 0 {
            1
        } else {
            self.timing.period as u32
        };
        frame % period < self.timing.on_frames as u32
    }
}

impl Effect for StrobeEffect {
    fn render<R: RngCore>(&mut self, frame: &Frame<'_>, _rng: &mut R, leds: &mut [Rgb]) {
        let color = if self.is_on(frame.index) {
            frame.state.color.at(frame.state.brightness)
        } else {
            BLACK
        };
        leds.fill(color);
    }
}
