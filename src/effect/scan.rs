use rand::RngCore;

use super::{Effect, Frame};
use crate::color::{BLACK, Rgb};

/// Pixels lit on each side of the scan head
const HALF_WIDTH: usize = 2;

/// A short lit window sweeping back and forth across the strip
#[derive(Debug, Clone)]
pub struct ScanEffect;

impl ScanEffect {
    /// Position of the scan head for the given frame
    pub fn position(frame: u32, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        let cycle = len * 2;
        let pos = frame as usize % cycle;
        if pos >= len { cycle - pos - 1 } else { pos }
    }
}

impl Effect for ScanEffect {
    fn render<R: RngCore>(&mut self, frame: &Frame<'_>, _rng: &mut R, leds: &mut [Rgb]) {
        let head = Self::position(frame.index, leds.len());
        let color = frame.state.color.at(frame.state.brightness);

        for (i, led) in leds.iter_mut().enumerate() {
            *led = if i.abs_diff(head) <= HALF_WIDTH {
                color
            } else {
                BLACK
            };
        }
    }
}
