//! Identify blink sequence
//!
//! Suspends the running effect, blinks pure white at 4 Hz for the requested
//! number of seconds, then hands the effect back exactly as it was.

use embassy_time::Duration;

use crate::{
    color::{BLACK, Rgb, WHITE},
    effect::EffectId,
    engine::{EffectEngine, Suspended},
};

/// Duration of one blink half cycle.
pub const HALF_CYCLE: Duration = Duration::from_millis(250);

/// Half cycles per second of identify time.
pub const HALF_CYCLES_PER_SECOND: u32 = 4;

/// One half cycle of the blink
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlinkPhase {
    On,
    Off,
}

impl BlinkPhase {
    pub const fn color(self) -> Rgb {
        match self {
            Self::On => WHITE,
            Self::Off => BLACK,
        }
    }
}

/// Fixed on/off pattern of a given length
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdentifySequence {
    total: u32,
    next: u32,
}

impl IdentifySequence {
    pub fn new(seconds: u16) -> Self {
        Self {
            total: u32::from(seconds) * HALF_CYCLES_PER_SECOND,
            next: 0,
        }
    }

    /// Half cycles not yet emitted
    pub const fn remaining(&self) -> u32 {
        self.total - self.next
    }
}

impl Iterator for IdentifySequence {
    type Item = BlinkPhase;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.total {
            return None;
        }
        let phase = if self.next % 2 == 0 {
            BlinkPhase::On
        } else {
            BlinkPhase::Off
        };
        self.next += 1;
        Some(phase)
    }
}

/// Exclusive blink mode over the render path
pub struct IdentifySequencer<const N: usize> {
    sequence: IdentifySequence,
    saved: Suspended<N>,
}

impl<const N: usize> IdentifySequencer<N> {
    /// Suspend the engine and prepare the blink
    pub fn begin(engine: &mut EffectEngine<N>, seconds: u16) -> Self {
        let saved = engine.suspend();
        log::info!(
            "identify: blinking for {}s (saved effect={}, active={})",
            seconds,
            saved.effect().as_str(),
            saved.was_active()
        );
        Self {
            sequence: IdentifySequence::new(seconds),
            saved,
        }
    }

    /// Effect captured when the blink started
    pub fn saved_effect(&self) -> EffectId {
        self.saved.effect()
    }

    pub const fn saved_active(&self) -> bool {
        self.saved.was_active()
    }

    /// Fill `leds` with the next half cycle, `None` once the blink is over
    pub fn step(&mut self, leds: &mut [Rgb]) -> Option<BlinkPhase> {
        let phase = self.sequence.next()?;
        leds.fill(phase.color());
        Some(phase)
    }

    /// Restore the captured effect and active flag
    pub fn finish(self, engine: &mut EffectEngine<N>) {
        log::info!("identify: done");
        engine.resume(self.saved);
    }
}
