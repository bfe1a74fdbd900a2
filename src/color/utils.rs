use crate::{color::Rgb, math8::scale8};

pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

pub const WHITE: Rgb = Rgb {
    r: 255,
    g: 255,
    b: 255,
};

/// Scale every channel by `brightness` (255 keeps the color untouched)
#[inline]
pub const fn scale_rgb(color: Rgb, brightness: u8) -> Rgb {
    Rgb {
        r: scale8(color.r, brightness),
        g: scale8(color.g, brightness),
        b: scale8(color.b, brightness),
    }
}
