//! Commanded light state and its mutation protocol
//!
//! [`LightState::apply`] is the only way state changes. It enforces the
//! auto power/brightness policy and reports which echo writes must go back to
//! the network layer.

use crate::{
    attribute::{AttributeChange, Echoes},
    color::{Rgb, hsv_to_rgb, xy_to_rgb},
    config::LightConfig,
    effect::EffectId,
    error::Error,
};

/// Largest valid hue or saturation value.
const HUE_SAT_MAX: u8 = 254;

/// Color representation used by a device
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    HueSat,
    Xy,
}

/// Commanded color in the device's representation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorSpec {
    /// Hue and saturation, both 0-254
    HueSat { hue: u8, sat: u8 },
    /// CIE 1931 coordinates scaled to 0-65535
    Xy { x: u16, y: u16 },
}

impl ColorSpec {
    pub const fn mode(self) -> ColorMode {
        match self {
            Self::HueSat { .. } => ColorMode::HueSat,
            Self::Xy { .. } => ColorMode::Xy,
        }
    }

    /// Render the color at the given intensity
    pub fn at(self, value: u8) -> Rgb {
        match self {
            Self::HueSat { hue, sat } => hsv_to_rgb(hue, sat, value),
            Self::Xy { x, y } => xy_to_rgb(x, y, value),
        }
    }
}

/// Per-effect animation speed (1-255)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EffectSpeeds {
    speeds: [u8; EffectId::COUNT],
    default: u8,
}

impl EffectSpeeds {
    pub const fn new(default: u8) -> Self {
        let default = if default == 0 { 1 } else { default };
        Self {
            speeds: [default; EffectId::COUNT],
            default,
        }
    }

    pub const fn get(&self, effect: EffectId) -> u8 {
        self.speeds[effect.index()]
    }

    /// Store a speed, normalizing `0` to the default
    ///
    /// Returns `true` if the stored value changed.
    pub fn set(&mut self, effect: EffectId, speed: u8) -> bool {
        let speed = if speed == 0 { self.default } else { speed };
        let slot = &mut self.speeds[effect.index()];
        let changed = *slot != speed;
        *slot = speed;
        changed
    }
}

/// Outcome of an accepted attribute change
#[derive(Debug, Default)]
pub struct Applied {
    /// Writes to echo back to the network layer
    pub echoes: Echoes,
    /// The stored state changed
    pub changed: bool,
    /// A non-`None` effect has to be (re)started
    pub effect_started: bool,
}

impl Applied {
    fn echo(&mut self, change: AttributeChange) {
        // Capacity covers every combination of auto adjustments.
        let _ = self.echoes.push(change);
    }
}

/// The light's commanded appearance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LightState {
    pub power: bool,
    pub brightness: u8,
    pub color: ColorSpec,
    pub effect: EffectId,
    pub speeds: EffectSpeeds,
}

impl LightState {
    /// Initial state: off, zero brightness, no effect
    pub const fn new(config: &LightConfig) -> Self {
        Self {
            power: false,
            brightness: 0,
            color: config.initial_color,
            effect: EffectId::None,
            speeds: EffectSpeeds::new(config.default_speed),
        }
    }

    /// Speed of the active effect
    pub const fn active_speed(&self) -> u8 {
        self.speeds.get(self.effect)
    }

    /// Color of the static (no effect) frame
    pub fn static_color(&self) -> Rgb {
        if self.power {
            self.color.at(self.brightness)
        } else {
            crate::color::BLACK
        }
    }

    /// Apply a single attribute change.
    ///
    /// Rejected changes return an error and leave the state untouched.
    pub fn apply(
        &mut self,
        change: AttributeChange,
        config: &LightConfig,
    ) -> Result<Applied, Error> {
        let mut applied = Applied::default();
        match change {
            AttributeChange::Power(true) => {
                if !self.power {
                    self.power = true;
                    applied.changed = true;
                    if self.brightness == 0 {
                        self.brightness = config.default_brightness;
                        applied.echo(AttributeChange::Brightness(self.brightness));
                    }
                }
            }
            AttributeChange::Power(false) => {
                if self.power {
                    self.power = false;
                    applied.changed = true;
                    if self.effect != EffectId::None {
                        self.effect = EffectId::None;
                        applied.echo(AttributeChange::Effect(EffectId::None));
                    }
                }
            }
            AttributeChange::Brightness(brightness) => {
                applied.changed = self.brightness != brightness;
                self.brightness = brightness;
                // Zero while on stays on: "on but black" is a valid state.
                if brightness > 0 && !self.power {
                    self.power = true;
                    applied.changed = true;
                    applied.echo(AttributeChange::Power(true));
                }
            }
            AttributeChange::ColorHueSat(hue, sat) => {
                if config.color_mode != ColorMode::HueSat {
                    return Err(Error::ColorModeMismatch);
                }
                if hue > HUE_SAT_MAX || sat > HUE_SAT_MAX {
                    return Err(Error::InvalidPayload);
                }
                applied.changed = self.set_color(ColorSpec::HueSat { hue, sat });
            }
            AttributeChange::ColorXy(x, y) => {
                if config.color_mode != ColorMode::Xy {
                    return Err(Error::ColorModeMismatch);
                }
                applied.changed = self.set_color(ColorSpec::Xy { x, y });
            }
            AttributeChange::Effect(effect) => {
                if effect != self.effect {
                    applied.changed = true;
                    if effect != EffectId::None {
                        self.raise_for_effect(config, &mut applied);
                        applied.effect_started = true;
                    }
                    self.effect = effect;
                }
            }
            AttributeChange::EffectSpeed(effect, speed) => {
                if effect == EffectId::None {
                    return Err(Error::InvalidPayload);
                }
                applied.changed = self.speeds.set(effect, speed);
            }
        }
        Ok(applied)
    }

    fn set_color(&mut self, color: ColorSpec) -> bool {
        let changed = self.color != color;
        self.color = color;
        changed
    }

    /// Effects are only meaningful when visible
    fn raise_for_effect(&mut self, config: &LightConfig, applied: &mut Applied) {
        if !self.power {
            self.power = true;
            applied.echo(AttributeChange::Power(true));
        }
        if self.brightness == 0 {
            self.brightness = config.default_brightness;
            applied.echo(AttributeChange::Brightness(self.brightness));
        }
    }
}
