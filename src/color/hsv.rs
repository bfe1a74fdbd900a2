//! Integer HSV conversion
//!
//! Hue arrives either in the protocol's 0-254 domain or directly in degrees.
//! All arithmetic is done in `u16`, so `value * (255 - sat)` never overflows.

use super::Rgb;

/// Upper bound of the protocol hue and saturation domain.
pub const HUE_MAX: u16 = 254;

/// Convert a protocol hue (0-254), saturation and value to RGB.
///
/// The hue is scaled to degrees as `hue * 360 / 254`; hue 254 wraps back to
/// red.
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub fn hsv_to_rgb(hue: u8, sat: u8, value: u8) -> Rgb {
    let degrees = u32::from(hue) * 360 / u32::from(HUE_MAX);
    hsv_degrees_to_rgb(degrees as u16, sat, value)
}

/// Convert a hue in degrees, saturation and value to RGB.
///
/// Saturation `0` yields `(value, value, value)` exactly.
#[allow(clippy::cast_possible_truncation)]
pub fn hsv_degrees_to_rgb(degrees: u16, sat: u8, value: u8) -> Rgb {
    if sat == 0 {
        return Rgb {
            r: value,
            g: value,
            b: value,
        };
    }

    let degrees = degrees % 360;
    let region = degrees / 60;
    let remainder = (degrees % 60) * 255 / 60;

    let v = u16::from(value);
    let s = u16::from(sat);

    let p = (v * (255 - s) / 255) as u8;
    let q = (v * (255 - s * remainder / 255) / 255) as u8;
    let t = (v * (255 - s * (255 - remainder) / 255) / 255) as u8;

    let (r, g, b) = match region {
        0 => (value, t, p),
        1 => (q, value, p),
        2 => (p, value, t),
        3 => (p, q, value),
        4 => (t, p, value),
        _ => (value, p, q),
    };
    Rgb { r, g, b }
}
