//! Raw attribute writes in the Zigbee cluster layout
//!
//! Hue and saturation (and x and y) arrive as separate attributes, so a
//! single write is paired with the stored other component before it becomes
//! an [`AttributeChange`].

use crate::{
    attribute::AttributeChange,
    command::LightCommand,
    effect::EffectId,
    error::Error,
    state::{ColorSpec, LightState},
};

pub const CLUSTER_IDENTIFY: u16 = 0x0003;
pub const CLUSTER_ON_OFF: u16 = 0x0006;
pub const CLUSTER_LEVEL: u16 = 0x0008;
pub const CLUSTER_COLOR: u16 = 0x0300;

pub const ATTR_IDENTIFY_TIME: u16 = 0x0000;
pub const ATTR_ON_OFF: u16 = 0x0000;
pub const ATTR_CURRENT_LEVEL: u16 = 0x0000;
pub const ATTR_CURRENT_HUE: u16 = 0x0000;
pub const ATTR_CURRENT_SATURATION: u16 = 0x0001;
pub const ATTR_CURRENT_X: u16 = 0x0003;
pub const ATTR_CURRENT_Y: u16 = 0x0004;

/// Manufacturer specific effect selector on the color cluster
pub const ATTR_EFFECT: u16 = 0xF000;
/// First per-effect speed attribute; effect `n` uses `ATTR_EFFECT + n`
pub const ATTR_EFFECT_SPEED_FIRST: u16 = ATTR_EFFECT + EffectId::Rainbow as u16;
pub const ATTR_EFFECT_SPEED_LAST: u16 = ATTR_EFFECT + EffectId::Fireworks as u16;

/// Typed attribute payload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeValue {
    Bool(bool),
    U8(u8),
    U16(u16),
}

impl AttributeValue {
    fn as_bool(self) -> Result<bool, Error> {
        match self {
            Self::Bool(value) => Ok(value),
            _ => Err(Error::InvalidPayload),
        }
    }

    fn as_u8(self) -> Result<u8, Error> {
        match self {
            Self::U8(value) => Ok(value),
            _ => Err(Error::InvalidPayload),
        }
    }

    fn as_u16(self) -> Result<u16, Error> {
        match self {
            Self::U16(value) => Ok(value),
            _ => Err(Error::InvalidPayload),
        }
    }
}

/// A raw attribute write
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttributeWrite {
    pub cluster: u16,
    pub attribute: u16,
    /// `None` when the network layer delivered no value
    pub value: Option<AttributeValue>,
}

impl AttributeWrite {
    pub const fn new(cluster: u16, attribute: u16, value: AttributeValue) -> Self {
        Self {
            cluster,
            attribute,
            value: Some(value),
        }
    }

    /// Decode the write against the current state.
    ///
    /// Returns `Ok(None)` for a known attribute without a value: the stored
    /// value is kept.
    pub fn decode(&self, state: &LightState) -> Result<Option<LightCommand>, Error> {
        let unsupported = Error::UnsupportedAttribute {
            cluster: self.cluster,
            attribute: self.attribute,
        };
        let known = matches!(
            (self.cluster, self.attribute),
            (CLUSTER_IDENTIFY, ATTR_IDENTIFY_TIME)
                | (CLUSTER_ON_OFF, ATTR_ON_OFF)
                | (CLUSTER_LEVEL, ATTR_CURRENT_LEVEL)
                | (
                    CLUSTER_COLOR,
                    ATTR_CURRENT_HUE
                        | ATTR_CURRENT_SATURATION
                        | ATTR_CURRENT_X
                        | ATTR_CURRENT_Y
                        | ATTR_EFFECT
                        | ATTR_EFFECT_SPEED_FIRST..=ATTR_EFFECT_SPEED_LAST
                )
        );
        if !known {
            return Err(unsupported);
        }
        let Some(value) = self.value else {
            return Ok(None);
        };

        let command: LightCommand = match (self.cluster, self.attribute) {
            (CLUSTER_IDENTIFY, _) => LightCommand::Identify(value.as_u16()?),
            (CLUSTER_ON_OFF, _) => AttributeChange::Power(value.as_bool()?).into(),
            (CLUSTER_LEVEL, _) => AttributeChange::Brightness(value.as_u8()?).into(),
            (_, ATTR_CURRENT_HUE) => {
                let (_, sat) = Self::stored_hue_sat(state)?;
                AttributeChange::ColorHueSat(value.as_u8()?, sat).into()
            }
            (_, ATTR_CURRENT_SATURATION) => {
                let (hue, _) = Self::stored_hue_sat(state)?;
                AttributeChange::ColorHueSat(hue, value.as_u8()?).into()
            }
            (_, ATTR_CURRENT_X) => {
                let (_, y) = Self::stored_xy(state)?;
                AttributeChange::ColorXy(value.as_u16()?, y).into()
            }
            (_, ATTR_CURRENT_Y) => {
                let (x, _) = Self::stored_xy(state)?;
                AttributeChange::ColorXy(x, value.as_u16()?).into()
            }
            (_, ATTR_EFFECT) => {
                let raw = value.as_u8()?;
                let effect = EffectId::from_raw(raw).ok_or(Error::UnknownEffect(raw))?;
                AttributeChange::Effect(effect).into()
            }
            (_, attribute) => {
                let raw = u8::try_from(attribute - ATTR_EFFECT).map_err(|_| unsupported)?;
                let effect = EffectId::from_raw(raw).ok_or(Error::UnknownEffect(raw))?;
                AttributeChange::EffectSpeed(effect, value.as_u8()?).into()
            }
        };
        Ok(Some(command))
    }

    /// Encode an echo write.
    ///
    /// Color changes span two attributes and are not encoded.
    pub const fn from_change(change: AttributeChange) -> Option<Self> {
        let write = match change {
            AttributeChange::Power(power) => {
                Self::new(CLUSTER_ON_OFF, ATTR_ON_OFF, AttributeValue::Bool(power))
            }
            AttributeChange::Brightness(level) => {
                Self::new(CLUSTER_LEVEL, ATTR_CURRENT_LEVEL, AttributeValue::U8(level))
            }
            AttributeChange::Effect(effect) => {
                Self::new(CLUSTER_COLOR, ATTR_EFFECT, AttributeValue::U8(effect as u8))
            }
            AttributeChange::EffectSpeed(effect, speed) => Self::new(
                CLUSTER_COLOR,
                ATTR_EFFECT + effect as u16,
                AttributeValue::U8(speed),
            ),
            AttributeChange::ColorHueSat(..) | AttributeChange::ColorXy(..) => return None,
        };
        Some(write)
    }

    fn stored_hue_sat(state: &LightState) -> Result<(u8, u8), Error> {
        match state.color {
            ColorSpec::HueSat { hue, sat } => Ok((hue, sat)),
            ColorSpec::Xy { .. } => Err(Error::ColorModeMismatch),
        }
    }

    fn stored_xy(state: &LightState) -> Result<(u16, u16), Error> {
        match state.color {
            ColorSpec::Xy { x, y } => Ok((x, y)),
            ColorSpec::HueSat { .. } => Err(Error::ColorModeMismatch),
        }
    }
}
