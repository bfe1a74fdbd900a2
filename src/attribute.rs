//! Attribute changes exchanged with the network layer

use heapless::Vec;

use crate::effect::EffectId;

/// Maximum number of echo writes a single change can produce.
pub const MAX_ECHOES: usize = 3;

/// Echo writes produced by one change
pub type Echoes = Vec<AttributeChange, MAX_ECHOES>;

/// A single attribute write, either inbound or echoed back
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeChange {
    Power(bool),
    Brightness(u8),
    /// Hue and saturation, both 0-254
    ColorHueSat(u8, u8),
    /// CIE 1931 x and y scaled to 0-65535
    ColorXy(u16, u16),
    Effect(EffectId),
    EffectSpeed(EffectId, u8),
}

/// Receiver of echo writes
///
/// Called for the auto adjustments only: auto power-on, default brightness
/// and effect reset on power-off.
pub trait AttributeReporter {
    fn report(&mut self, change: AttributeChange);
}

impl AttributeReporter for () {
    fn report(&mut self, _change: AttributeChange) {}
}
