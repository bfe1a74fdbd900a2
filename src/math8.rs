/// Scale an 8-bit value by a factor (0-255 = 0.0-1.0)
///
/// `scale8(v, 255) == v`, so full brightness is lossless.
#[inline]
#[allow(clippy::cast_lossless, clippy::cast_possible_truncation)]
pub const fn scale8(value: u8, scale: u8) -> u8 {
    (value as u16 * scale as u16 / 255) as u8
}

/// Map a `[0.0, 1.0]` fraction onto `0..=max`
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn fraction8(fraction: f32, max: u8) -> u8 {
    (fraction.clamp(0.0, 1.0) * f32::from(max)) as u8
}
