#![no_std]

pub mod attribute;
pub mod color;
pub mod command;
pub mod config;
pub mod controller;
pub mod effect;
pub mod engine;
pub mod error;
pub mod frame_scheduler;
pub mod identify;
pub mod math8;
pub mod output;
pub mod state;
pub mod zcl;

pub use attribute::{AttributeChange, AttributeReporter, Echoes};
pub use command::{CommandChannel, CommandReceiver, CommandSender, LightCommand, send_command};
pub use config::{LightConfig, StrobeTiming};
pub use controller::{Controller, TickResult};
pub use effect::{EffectId, EffectSlot};
pub use engine::{EffectEngine, EngineState, delay_ms};
pub use error::Error;
pub use frame_scheduler::{FrameResult, FrameScheduler};
pub use identify::{BlinkPhase, IdentifySequence, IdentifySequencer};
pub use output::SmartLedsSink;
pub use state::{ColorMode, ColorSpec, EffectSpeeds, LightState};
pub use zcl::{AttributeValue, AttributeWrite};

pub use color::Rgb;
pub use embassy_time::{Duration, Instant};

/// Pixel output device
///
/// Implement this trait to support different hardware platforms.
/// The controller is generic over this trait.
pub trait OutputSink {
    type Error: core::fmt::Debug;

    /// Stage one pixel of the next frame
    fn set_pixel(&mut self, index: usize, color: Rgb);

    /// Push the staged pixels to the strip
    fn commit(&mut self) -> Result<(), Self::Error>;

    /// Stage a whole frame and commit it
    fn write_frame(&mut self, frame: &[Rgb]) -> Result<(), Self::Error> {
        for (index, color) in frame.iter().enumerate() {
            self.set_pixel(index, *color);
        }
        self.commit()
    }

    /// Turn `len` pixels off and commit
    fn clear(&mut self, len: usize) -> Result<(), Self::Error> {
        for index in 0..len {
            self.set_pixel(index, color::BLACK);
        }
        self.commit()
    }
}

/// Install `esp-println` as the `log` backend
#[cfg(feature = "esp32-log")]
pub fn init_logger(level: log::LevelFilter) {
    esp_println::logger::init_logger(level);
}
