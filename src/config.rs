//! Light configuration
//!
//! Everything here is fixed at initialization.

use crate::state::{ColorMode, ColorSpec};

/// Brightness applied when the light is turned on at zero brightness.
pub const DEFAULT_BRIGHTNESS: u8 = 128;

/// Effect speed used whenever `0` is written.
pub const DEFAULT_SPEED: u8 = 50;

/// Rainbow hue advance per frame, in degrees.
pub const DEFAULT_RAINBOW_HUE_STEP: u16 = 3;

/// D65 white point, scaled to 0-65535.
pub const WHITE_POINT_X: u16 = 20_493;
pub const WHITE_POINT_Y: u16 = 21_561;

/// Strobe duty cycle, in frames
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrobeTiming {
    /// Length of one on/off cycle
    pub period: u8,
    /// Frames of the cycle spent on
    pub on_frames: u8,
}

impl StrobeTiming {
    /// Alternate every frame
    pub const ALTERNATE: Self = Self {
        period: 2,
        on_frames: 1,
    };
}

/// Configuration for the light controller
#[derive(Debug, Clone)]
pub struct LightConfig {
    pub default_brightness: u8,
    pub default_speed: u8,
    /// Authoritative color representation of this device
    pub color_mode: ColorMode,
    /// Color before the first color attribute arrives
    pub initial_color: ColorSpec,
    pub rainbow_hue_step: u16,
    pub strobe: StrobeTiming,
    /// Seed of the random source used by twinkle, flicker and fireworks
    pub rng_seed: u64,
}

impl LightConfig {
    /// Configuration of a hue/saturation light, starting white
    pub const fn hue_sat() -> Self {
        Self {
            default_brightness: DEFAULT_BRIGHTNESS,
            default_speed: DEFAULT_SPEED,
            color_mode: ColorMode::HueSat,
            initial_color: ColorSpec::HueSat { hue: 0, sat: 0 },
            rainbow_hue_step: DEFAULT_RAINBOW_HUE_STEP,
            strobe: StrobeTiming::ALTERNATE,
            rng_seed: 0x5EED,
        }
    }

    /// Configuration of a CIE-xy light, starting at the D65 white point
    pub const fn xy() -> Self {
        Self {
            color_mode: ColorMode::Xy,
            initial_color: ColorSpec::Xy {
                x: WHITE_POINT_X,
                y: WHITE_POINT_Y,
            },
            ..Self::hue_sat()
        }
    }
}

impl Default for LightConfig {
    fn default() -> Self {
        Self::hue_sat()
    }
}
