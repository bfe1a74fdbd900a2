use core::fmt;

/// Errors returned when an attribute change or command is rejected.
///
/// A rejected change leaves the light state untouched and triggers no render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Effect id outside the known set
    UnknownEffect(u8),
    /// Color change in the representation this device does not use
    ColorModeMismatch,
    /// Raw write to an attribute this light does not own
    UnsupportedAttribute { cluster: u16, attribute: u16 },
    /// Payload of the wrong type or outside its domain
    InvalidPayload,
    /// Command channel is full
    QueueFull,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownEffect(id) => write!(f, "unknown effect id {id}"),
            Self::ColorModeMismatch => f.write_str("color mode mismatch"),
            Self::UnsupportedAttribute { cluster, attribute } => write!(
                f,
                "unsupported attribute 0x{attribute:04x} on cluster 0x{cluster:04x}"
            ),
            Self::InvalidPayload => f.write_str("invalid attribute payload"),
            Self::QueueFull => f.write_str("command queue is full"),
        }
    }
}

impl core::error::Error for Error {}
