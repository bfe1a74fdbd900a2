//! Light controller - the single owner of the light state
//!
//! The controller:
//! - Drains commands from the channel at tick boundaries
//! - Applies attribute changes and reports echo writes
//! - Renders static frames on demand and effect frames on every tick
//! - Runs the identify blink as an exclusive render mode

use embassy_time::Duration;
use embedded_hal::delay::DelayNs;
use rand::{SeedableRng, rngs::SmallRng};

use crate::{
    OutputSink,
    attribute::{AttributeChange, AttributeReporter},
    color::Rgb,
    command::{CommandReceiver, LightCommand},
    config::LightConfig,
    effect::EffectId,
    engine::{EffectEngine, EngineState},
    error::Error,
    identify::{HALF_CYCLE, IdentifySequencer},
    state::LightState,
    zcl::AttributeWrite,
};

/// Result of a controller tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickResult {
    /// Delay until the next tick, `None` while idle
    pub next_tick: Option<Duration>,
    /// A frame was rendered but the output failed to commit it
    pub output_failed: bool,
}

pub struct Controller<'a, S, A, const N: usize, const Q: usize>
where
    S: OutputSink,
    A: AttributeReporter,
{
    // External dependencies and configuration
    commands: CommandReceiver<'a, Q>,
    output: S,
    reporter: A,
    config: LightConfig,

    // Internal state
    state: LightState,
    engine: EffectEngine<N>,
    identify: Option<IdentifySequencer<N>>,
    rng: SmallRng,
}

impl<'a, S, A, const N: usize, const Q: usize> Controller<'a, S, A, N, Q>
where
    S: OutputSink,
    A: AttributeReporter,
{
    pub fn new(
        commands: CommandReceiver<'a, Q>,
        output: S,
        reporter: A,
        config: LightConfig,
    ) -> Self {
        log::info!("light: {} pixels, {:?} color", N, config.color_mode);
        Self {
            commands,
            output,
            reporter,
            state: LightState::new(&config),
            engine: EffectEngine::new(&config),
            identify: None,
            rng: SmallRng::seed_from_u64(config.rng_seed),
            config,
        }
    }

    pub const fn state(&self) -> &LightState {
        &self.state
    }

    pub fn engine_state(&self) -> EngineState {
        self.engine.state()
    }

    pub const fn frame_counter(&self) -> u32 {
        self.engine.frame_counter()
    }

    /// Last frame handed to the output
    pub const fn frame(&self) -> &[Rgb; N] {
        self.engine.frame()
    }

    pub const fn is_identifying(&self) -> bool {
        self.identify.is_some()
    }

    pub const fn output(&self) -> &S {
        &self.output
    }

    pub fn output_mut(&mut self) -> &mut S {
        &mut self.output
    }

    pub const fn reporter(&self) -> &A {
        &self.reporter
    }

    /// Apply one attribute change.
    ///
    /// Static changes are rendered right away; effect changes are picked up
    /// by the next tick.
    pub fn apply_attribute(&mut self, change: AttributeChange) -> Result<(), Error> {
        let applied = match self.state.apply(change, &self.config) {
            Ok(applied) => applied,
            Err(err) => {
                log::warn!("light: rejected {:?}: {}", change, err);
                return Err(err);
            }
        };
        for echo in &applied.echoes {
            self.reporter.report(*echo);
        }
        if !applied.changed {
            return Ok(());
        }
        log::debug!("light: applied {:?}", change);

        if applied.effect_started {
            log::info!(
                "effect started: {} (speed={})",
                self.state.effect.as_str(),
                self.state.active_speed()
            );
            self.engine.start(self.state.effect);
            return Ok(());
        }
        if self.state.effect == EffectId::None {
            if self.engine.is_rendering() {
                log::info!("effect stopped");
                self.engine.stop();
            }
            self.render_static();
        }
        Ok(())
    }

    /// Decode a raw attribute write and apply it
    pub fn apply_write(&mut self, write: AttributeWrite) -> Result<(), Error> {
        match write.decode(&self.state) {
            Ok(Some(command)) => self.handle(command),
            Ok(None) => Ok(()),
            Err(err) => {
                log::warn!(
                    "light: rejected write 0x{:04x}/0x{:04x}: {}",
                    write.cluster,
                    write.attribute,
                    err
                );
                Err(err)
            }
        }
    }

    /// Handle a single command
    pub fn handle(&mut self, command: LightCommand) -> Result<(), Error> {
        match command {
            LightCommand::Change(change) => self.apply_attribute(change),
            LightCommand::Write(write) => self.apply_write(write),
            LightCommand::Identify(seconds) => {
                self.begin_identify(seconds);
                Ok(())
            }
        }
    }

    /// Process pending commands from the channel (non-blocking).
    ///
    /// Stops as soon as an identify blink starts; the rest of the queue
    /// waits until the blink is over.
    pub fn process_pending(&mut self) {
        while self.identify.is_none() {
            let Ok(command) = self.commands.try_receive() else {
                break;
            };
            // Rejections are logged where they happen; the renderer keeps going.
            let _ = self.handle(command);
        }
    }

    /// Wait for the next command and handle it
    pub async fn wait_command(&mut self) {
        let command = self.commands.receive().await;
        let _ = self.handle(command);
    }

    /// Enter the identify blink mode.
    ///
    /// A blink already in progress runs to completion first; the request is
    /// ignored if one is running.
    pub fn begin_identify(&mut self, seconds: u16) {
        if self.identify.is_some() {
            log::warn!("identify: already running, ignoring {}s request", seconds);
            return;
        }
        self.identify = Some(IdentifySequencer::begin(&mut self.engine, seconds));
    }

    /// Run one tick.
    ///
    /// While identify is running, the command queue is left untouched and
    /// one blink half cycle is rendered. Otherwise pending commands are
    /// applied and, if an effect is active, one effect frame is rendered.
    /// A queued identify request renders its first half cycle right away.
    pub fn tick(&mut self) -> TickResult {
        let mut output_failed = false;

        if self.identify.is_some() {
            if let Some(result) = self.step_identify() {
                return result;
            }
            output_failed |= !self.finish_identify();
        }

        self.process_pending();

        if self.identify.is_some() {
            if let Some(result) = self.step_identify() {
                return TickResult {
                    output_failed: result.output_failed || output_failed,
                    ..result
                };
            }
            output_failed |= !self.finish_identify();
        }

        if let Some(frame) = self.engine.render_frame(&self.state, &mut self.rng) {
            output_failed |= !Self::commit(&mut self.output, frame);
        }

        TickResult {
            next_tick: self.engine.tick_interval(&self.state),
            output_failed,
        }
    }

    /// Run a whole identify blink, blocking the caller for its duration
    pub fn identify_blocking<D: DelayNs>(&mut self, seconds: u16, delay: &mut D) {
        self.begin_identify(seconds);
        while self.identify.is_some() {
            let result = self.tick();
            if !self.is_identifying() {
                break;
            }
            if let Some(next) = result.next_tick {
                delay.delay_ms(u32::try_from(next.as_millis()).unwrap_or(u32::MAX));
            }
        }
    }

    /// Render the next blink half cycle, `None` once the blink is over
    fn step_identify(&mut self) -> Option<TickResult> {
        let identify = self.identify.as_mut()?;
        identify.step(self.engine.frame_mut())?;
        Some(TickResult {
            next_tick: Some(HALF_CYCLE),
            output_failed: !Self::commit(&mut self.output, self.engine.frame()),
        })
    }

    /// Clear the strip and hand the saved effect back to the engine.
    ///
    /// Returns `false` if an output commit failed.
    fn finish_identify(&mut self) -> bool {
        let Some(identify) = self.identify.take() else {
            return true;
        };
        let mut ok = match self.output.clear(N) {
            Ok(()) => true,
            Err(err) => {
                log::warn!("output: clear failed: {:?}", err);
                false
            }
        };
        identify.finish(&mut self.engine);

        // Direct changes made while blinking win over the saved effect.
        let restored = match self.engine.state() {
            EngineState::Rendering(effect) => effect,
            EngineState::Idle => EffectId::None,
        };
        if restored != self.state.effect {
            self.engine.start(self.state.effect);
        }
        if !self.engine.is_rendering() {
            ok &= self.render_static();
        }
        ok
    }

    /// Render and commit the static color frame
    fn render_static(&mut self) -> bool {
        if self.identify.is_some() {
            return true;
        }
        let frame = self.engine.render_static(&self.state);
        Self::commit(&mut self.output, frame)
    }

    fn commit(output: &mut S, frame: &[Rgb]) -> bool {
        match output.write_frame(frame) {
            Ok(()) => true,
            Err(err) => {
                log::warn!("output: commit failed: {:?}", err);
                false
            }
        }
    }
}
