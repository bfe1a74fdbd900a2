//! CIE 1931 xy chromaticity to sRGB
//!
//! The only floating point path of the crate. Coefficients and the gamma
//! breakpoint must stay exactly as below to match reference hardware.

use super::Rgb;

/// Smallest `y` accepted before dividing by it.
const MIN_Y: f32 = 1e-4;

/// Gamma encoding breakpoint of the sRGB transfer function.
const SRGB_BREAKPOINT: f32 = 0.003_130_8;

/// Maximum protocol brightness in this conversion.
const BRIGHTNESS_MAX: f32 = 254.0;

/// Convert xy coordinates (scaled to 0-65535) at `brightness` (0-254) to RGB.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::unreadable_literal
)]
pub fn xy_to_rgb(x: u16, y: u16, brightness: u8) -> Rgb {
    let x = f32::from(x) / 65535.0;
    let y = (f32::from(y) / 65535.0).max(MIN_Y);

    let big_y = f32::from(brightness) / BRIGHTNESS_MAX;
    let big_x = (big_y / y) * x;
    let big_z = (big_y / y) * (1.0 - x - y);

    let r = big_x * 3.2404542 - big_y * 1.5371385 - big_z * 0.4985314;
    let g = -big_x * 0.9692660 + big_y * 1.8760108 + big_z * 0.0415560;
    let b = big_x * 0.0556434 - big_y * 0.2040259 + big_z * 1.0572252;

    Rgb {
        r: to_channel(gamma_encode(r)),
        g: to_channel(gamma_encode(g)),
        b: to_channel(gamma_encode(b)),
    }
}

#[inline]
fn gamma_encode(linear: f32) -> f32 {
    if linear <= SRGB_BREAKPOINT {
        12.92 * linear
    } else {
        1.055 * libm::powf(linear, 1.0 / 2.4) - 0.055
    }
}

#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_channel(encoded: f32) -> u8 {
    libm::roundf(encoded.clamp(0.0, 1.0) * 255.0) as u8
}
