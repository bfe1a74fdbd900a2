//! Twinkling stars
//!
//! Every pixel keeps its own brightness. Each frame a pixel toggles with a
//! fixed probability: dark pixels light up at a random bright level, lit
//! pixels go dark.

use rand::RngCore;

use super::{Effect, Frame};
use crate::{color::Rgb, math8::scale8};

/// Toggle probability per pixel and frame, in percent
pub const TOGGLE_PERCENT: u32 = 8;

/// Lowest brightness of a lit star
const STAR_MIN: u8 = 180;

#[derive(Debug, Clone)]
pub struct TwinkleEffect<const N: usize> {
    stars: [u8; N],
}

impl<const N: usize> Default for TwinkleEffect<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> TwinkleEffect<N> {
    pub const fn new() -> Self {
        Self { stars: [0; N] }
    }

    /// Per-pixel star brightness
    pub const fn stars(&self) -> &[u8; N] {
        &self.stars
    }

    #[allow(clippy::cast_possible_truncation)]
    fn update_stars<R: RngCore>(&mut self, rng: &mut R) {
        for star in &mut self.stars {
            if rng.next_u32() % 100 >= TOGGLE_PERCENT {
                continue;
            }
            *star = if *star == 0 {
                let span = u32::from(u8::MAX - STAR_MIN) + 1;
                STAR_MIN + (rng.next_u32() % span) as u8
            } else {
                0
            };
        }
    }
}

impl<const N: usize> Effect for TwinkleEffect<N> {
    fn render<R: RngCore>(&mut self, frame: &Frame<'_>, rng: &mut R, leds: &mut [Rgb]) {
        self.update_stars(rng);

        let state = frame.state;
        for (led, star) in leds.iter_mut().zip(self.stars.iter()) {
            *led = state.color.at(scale8(*star, state.brightness));
        }
    }

    fn reset(&mut self) {
        self.stars = [0; N];
    }
}
