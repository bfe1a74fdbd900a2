//! Effect system with compile-time known effect variants
//!
//! All effects are stored in an enum to avoid heap allocations.
//! Each effect implements the `Effect` trait and keeps its own runtime
//! memory, so switching the variant resets it.

mod fireworks;
mod flicker;
mod pulse;
mod rainbow;
mod scan;
mod strobe;
mod twinkle;

pub use fireworks::FireworksEffect;
pub use flicker::FlickerEffect;
pub use pulse::PulseEffect;
pub use rainbow::RainbowEffect;
pub use scan::ScanEffect;
pub use strobe::StrobeEffect;
pub use twinkle::TwinkleEffect;
use rand::RngCore;

use crate::{color::Rgb, config::LightConfig, state::LightState};

const EFFECT_NAME_NONE: &str = "none";
const EFFECT_NAME_RAINBOW: &str = "rainbow";
const EFFECT_NAME_STROBE: &str = "strobe";
const EFFECT_NAME_TWINKLE: &str = "twinkle";
const EFFECT_NAME_FLICKER: &str = "flicker";
const EFFECT_NAME_PULSE: &str = "pulse";
const EFFECT_NAME_SCAN: &str = "scan";
const EFFECT_NAME_FIREWORKS: &str = "fireworks";

const EFFECT_ID_NONE: u8 = 0;
const EFFECT_ID_RAINBOW: u8 = 1;
const EFFECT_ID_STROBE: u8 = 2;
const EFFECT_ID_TWINKLE: u8 = 3;
const EFFECT_ID_FLICKER: u8 = 4;
const EFFECT_ID_PULSE: u8 = 5;
const EFFECT_ID_SCAN: u8 = 6;
const EFFECT_ID_FIREWORKS: u8 = 7;

/// Inputs of a single rendered frame
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    /// Frames rendered since the effect started
    pub index: u32,
    /// Snapshot of the commanded state
    pub state: &'a LightState,
}

pub trait Effect {
    /// Render a single frame
    fn render<R: RngCore>(&mut self, frame: &Frame<'_>, rng: &mut R, leds: &mut [Rgb]);

    /// Reset effect state
    fn reset(&mut self) {}
}

/// Effect slot - enum containing all animated effects
#[derive(Debug, Clone)]
pub enum EffectSlot<const N: usize> {
    Rainbow(RainbowEffect),
    Strobe(StrobeEffect),
    Twinkle(TwinkleEffect<N>),
    Flicker(FlickerEffect),
    Pulse(PulseEffect),
    Scan(ScanEffect),
    Fireworks(FireworksEffect),
}

/// Known effect ids that can be requested.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum EffectId {
    /// Static color, no animation
    None = EFFECT_ID_NONE,
    Rainbow = EFFECT_ID_RAINBOW,
    Strobe = EFFECT_ID_STROBE,
    Twinkle = EFFECT_ID_TWINKLE,
    Flicker = EFFECT_ID_FLICKER,
    Pulse = EFFECT_ID_PULSE,
    Scan = EFFECT_ID_SCAN,
    Fireworks = EFFECT_ID_FIREWORKS,
}

impl EffectId {
    /// Number of effect ids, `None` included
    pub const COUNT: usize = 8;

    /// Every effect id in raw order
    pub const ALL: [Self; Self::COUNT] = [
        Self::None,
        Self::Rainbow,
        Self::Strobe,
        Self::Twinkle,
        Self::Flicker,
        Self::Pulse,
        Self::Scan,
        Self::Fireworks,
    ];

    pub const fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            EFFECT_ID_NONE => Self::None,
            EFFECT_ID_RAINBOW => Self::Rainbow,
            EFFECT_ID_STROBE => Self::Strobe,
            EFFECT_ID_TWINKLE => Self::Twinkle,
            EFFECT_ID_FLICKER => Self::Flicker,
            EFFECT_ID_PULSE => Self::Pulse,
            EFFECT_ID_SCAN => Self::Scan,
            EFFECT_ID_FIREWORKS => Self::Fireworks,
            _ => return None,
        })
    }

    pub const fn index(self) -> usize {
        self as usize
    }

    /// Build the slot of an animated effect; `None` has no slot
    pub fn to_slot<const N: usize>(self, config: &LightConfig) -> Option<EffectSlot<N>> {
        Some(match self {
            Self::None => return None,
            Self::Rainbow => EffectSlot::Rainbow(RainbowEffect::new(config.rainbow_hue_step)),
            Self::Strobe => EffectSlot::Strobe(StrobeEffect::new(config.strobe)),
            Self::Twinkle => EffectSlot::Twinkle(TwinkleEffect::new()),
            Self::Flicker => EffectSlot::Flicker(FlickerEffect),
            Self::Pulse => EffectSlot::Pulse(PulseEffect),
            Self::Scan => EffectSlot::Scan(ScanEffect),
            Self::Fireworks => EffectSlot::Fireworks(FireworksEffect::new()),
        })
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => EFFECT_NAME_NONE,
            Self::Rainbow => EFFECT_NAME_RAINBOW,
            Self::Strobe => EFFECT_NAME_STROBE,
            Self::Twinkle => EFFECT_NAME_TWINKLE,
            Self::Flicker => EFFECT_NAME_FLICKER,
            Self::Pulse => EFFECT_NAME_PULSE,
            Self::Scan => EFFECT_NAME_SCAN,
            Self::Fireworks => EFFECT_NAME_FIREWORKS,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|effect| effect.as_str().eq_ignore_ascii_case(s))
    }
}

impl<const N: usize> EffectSlot<N> {
    /// Render the current effect
    pub fn render<R: RngCore>(&mut self, frame: &Frame<'_>, rng: &mut R, leds: &mut [Rgb]) {
        match self {
            Self::Rainbow(effect) => effect.render(frame, rng, leds),
            Self::Strobe(effect) => effect.render(frame, rng, leds),
            Self::Twinkle(effect) => effect.render(frame, rng, leds),
            Self::Flicker(effect) => effect.render(frame, rng, leds),
            Self::Pulse(effect) => effect.render(frame, rng, leds),
            Self::Scan(effect) => effect.render(frame, rng, leds),
            Self::Fireworks(effect) => effect.render(frame, rng, leds),
        }
    }

    /// Reset the effect state
    pub fn reset(&mut self) {
        match self {
            Self::Rainbow(effect) => Effect::reset(effect),
            Self::Strobe(effect) => Effect::reset(effect),
            Self::Twinkle(effect) => Effect::reset(effect),
            Self::Flicker(effect) => Effect::reset(effect),
            Self::Pulse(effect) => Effect::reset(effect),
            Self::Scan(effect) => Effect::reset(effect),
            Self::Fireworks(effect) => Effect::reset(effect),
        }
    }

    /// Get the effect ID for external observation
    pub const fn id(&self) -> EffectId {
        match self {
            Self::Rainbow(_) => EffectId::Rainbow,
            Self::Strobe(_) => EffectId::Strobe,
            Self::Twinkle(_) => EffectId::Twinkle,
            Self::Flicker(_) => EffectId::Flicker,
            Self::Pulse(_) => EffectId::Pulse,
            Self::Scan(_) => EffectId::Scan,
            Self::Fireworks(_) => EffectId::Fireworks,
        }
    }
}
