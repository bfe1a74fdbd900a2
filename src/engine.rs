//! Effect engine - renderer state machine
//!
//! The engine is either `Idle` (static color, rendered on demand) or
//! `Rendering` an animated effect, one frame per tick. It owns the pixel
//! buffer and the frame counter.

use embassy_time::Duration;
use rand::RngCore;

use crate::{
    color::Rgb,
    config::LightConfig,
    effect::{EffectId, EffectSlot, Frame},
    state::LightState,
};

/// Slowest tick interval, reached at speed 1.
pub const TICK_CEILING_MS: u32 = 200;

/// Fastest tick interval.
pub const TICK_FLOOR_MS: u32 = 20;

/// Range covered by the speed mapping.
const TICK_SPAN_MS: u32 = 190;

/// Tick interval in milliseconds for an effect speed
///
/// `max(20, 200 - speed * 190 / 255)`
pub const fn delay_ms(speed: u8) -> u32 {
    let reduction = speed as u32 * TICK_SPAN_MS / 255;
    let delay = TICK_CEILING_MS - reduction;
    if delay < TICK_FLOOR_MS {
        TICK_FLOOR_MS
    } else {
        delay
    }
}

/// Observable engine state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    Idle,
    Rendering(EffectId),
}

/// Effect and frame counter taken out of the engine while it is suspended
#[derive(Debug, Clone)]
pub struct Suspended<const N: usize> {
    slot: Option<EffectSlot<N>>,
    frame_counter: u32,
}

impl<const N: usize> Suspended<N> {
    /// Effect that was selected when suspended
    pub fn effect(&self) -> EffectId {
        self.slot.as_ref().map_or(EffectId::None, EffectSlot::id)
    }

    /// Whether the engine was rendering when suspended
    pub const fn was_active(&self) -> bool {
        self.slot.is_some()
    }
}

pub struct EffectEngine<const N: usize> {
    slot: Option<EffectSlot<N>>,
    frame_counter: u32,
    frame_buffer: [Rgb; N],
    config: LightConfig,
}

impl<const N: usize> EffectEngine<N> {
    pub fn new(config: &LightConfig) -> Self {
        Self {
            slot: None,
            frame_counter: 0,
            frame_buffer: [Rgb::default(); N],
            config: config.clone(),
        }
    }

    pub fn state(&self) -> EngineState {
        match &self.slot {
            Some(slot) => EngineState::Rendering(slot.id()),
            None => EngineState::Idle,
        }
    }

    pub const fn is_rendering(&self) -> bool {
        self.slot.is_some()
    }

    pub const fn frame_counter(&self) -> u32 {
        self.frame_counter
    }

    /// Last rendered frame
    pub const fn frame(&self) -> &[Rgb; N] {
        &self.frame_buffer
    }

    pub(crate) fn frame_mut(&mut self) -> &mut [Rgb; N] {
        &mut self.frame_buffer
    }

    /// Start an effect from frame 0 with fresh runtime memory.
    ///
    /// `EffectId::None` stops rendering.
    pub fn start(&mut self, effect: EffectId) {
        let Some(mut slot) = effect.to_slot(&self.config) else {
            self.stop();
            return;
        };
        slot.reset();
        self.slot = Some(slot);
        self.frame_counter = 0;
    }

    /// Return to idle
    pub fn stop(&mut self) {
        self.slot = None;
        self.frame_counter = 0;
    }

    /// Take the current effect out, leaving the engine idle
    pub fn suspend(&mut self) -> Suspended<N> {
        Suspended {
            slot: self.slot.take(),
            frame_counter: core::mem::take(&mut self.frame_counter),
        }
    }

    /// Put a suspended effect back exactly as it was taken
    pub fn resume(&mut self, suspended: Suspended<N>) {
        self.slot = suspended.slot;
        self.frame_counter = suspended.frame_counter;
    }

    /// Delay until the next tick, `None` while idle
    pub fn tick_interval(&self, state: &LightState) -> Option<Duration> {
        let slot = self.slot.as_ref()?;
        let speed = state.speeds.get(slot.id());
        Some(Duration::from_millis(u64::from(delay_ms(speed))))
    }

    /// Render the next effect frame and advance the frame counter.
    ///
    /// Returns `None` while idle.
    pub fn render_frame<R: RngCore>(&mut self, state: &LightState, rng: &mut R) -> Option<&[Rgb]> {
        let slot = self.slot.as_mut()?;
        let frame = Frame {
            index: self.frame_counter,
            state,
        };
        slot.render(&frame, rng, &mut self.frame_buffer);
        self.frame_counter = self.frame_counter.wrapping_add(1);
        Some(&self.frame_buffer)
    }

    /// Render the static color frame
    pub fn render_static(&mut self, state: &LightState) -> &[Rgb] {
        self.frame_buffer.fill(state.static_color());
        &self.frame_buffer
    }
}
