//! Fireworks
//!
//! Every `BURST_INTERVAL` frames a burst starts at a random pixel, grows
//! outward for `BURST_FRAMES` frames while fading, then the strip goes dark
//! until the next burst.

use rand::RngCore;

use super::{Effect, Frame};
use crate::{
    color::{BLACK, Rgb, hsv_to_rgb},
    state::ColorSpec,
};

/// Frames between two bursts
pub const BURST_INTERVAL: u32 = 30;

/// Frames a burst stays visible
pub const BURST_FRAMES: u8 = 10;

/// Hue shift between neighbouring pixels of a burst
const HUE_SPREAD: usize = 10;

#[derive(Debug, Clone, Default)]
pub struct FireworksEffect {
    burst_center: Option<usize>,
    burst_age: u8,
}

impl FireworksEffect {
    pub const fn new() -> Self {
        Self {
            burst_center: None,
            burst_age: 0,
        }
    }

    /// Center pixel of the running burst
    pub const fn burst_center(&self) -> Option<usize> {
        self.burst_center
    }

    #[allow(clippy::cast_possible_truncation)]
    fn spark_color(color: ColorSpec, pixel: usize, level: u8) -> Rgb {
        match color {
            ColorSpec::HueSat { hue, sat } => {
                let hue = (usize::from(hue) + pixel * HUE_SPREAD) % 255;
                hsv_to_rgb(hue as u8, sat, level)
            }
            ColorSpec::Xy { .. } => color.at(level),
        }
    }
}

impl Effect for FireworksEffect {
    fn render<R: RngCore>(&mut self, frame: &Frame<'_>, rng: &mut R, leds: &mut [Rgb]) {
        leds.fill(BLACK);
        if leds.is_empty() {
            return;
        }

        if frame.index % BURST_INTERVAL == 0 {
            self.burst_center = Some(rng.next_u32() as usize % leds.len());
            self.burst_age = 0;
        }

        let Some(center) = self.burst_center else {
            return;
        };

        self.burst_age += 1;
        if self.burst_age > BURST_FRAMES {
            self.burst_center = None;
            return;
        }

        let state = frame.state;
        let fade = u16::from(BURST_FRAMES - self.burst_age);
        #[allow(clippy::cast_possible_truncation)]
        let level = (u16::from(state.brightness) * fade / u16::from(BURST_FRAMES)) as u8;
        let radius = usize::from(self.burst_age);

        for (i, led) in leds.iter_mut().enumerate() {
            if i.abs_diff(center) <= radius {
                *led = Self::spark_color(state.color, i, level);
            }
        }
    }

    fn reset(&mut self) {
        *self = Self::new();
    }
}
