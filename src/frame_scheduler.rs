//! Frame scheduling and timing utilities.
//!
//! Adds deadline tracking on top of [`Controller::tick`]. The scheduler only
//! ticks while an effect or identify blink is running; when idle, the async
//! [`FrameScheduler::run`] loop waits for the next command instead.

use embassy_time::{Duration, Instant, Timer};

use crate::{OutputSink, attribute::AttributeReporter, controller::Controller};

/// Result of a frame tick operation.
#[derive(Debug, Clone, Copy)]
pub struct FrameResult {
    /// The deadline for the next frame, `None` while idle.
    pub next_deadline: Option<Instant>,
    /// How long to wait until the next frame (may be zero if behind schedule).
    pub sleep_duration: Option<Duration>,
    /// The output failed to commit this frame.
    pub output_failed: bool,
}

/// Portable frame scheduler with drift correction.
///
/// # Usage
///
/// ```ignore
/// let mut scheduler = FrameScheduler::new(controller);
///
/// loop {
///     let result = scheduler.tick(Instant::now());
///     match result.sleep_duration {
///         Some(sleep) => sleep_ms(sleep.as_millis()),
///         None => wait_for_command(),
///     }
/// }
/// ```
pub struct FrameScheduler<'a, S, A, const N: usize, const Q: usize>
where
    S: OutputSink,
    A: AttributeReporter,
{
    controller: Controller<'a, S, A, N, Q>,
    next_frame: Option<Instant>,
}

impl<'a, S, A, const N: usize, const Q: usize> FrameScheduler<'a, S, A, N, Q>
where
    S: OutputSink,
    A: AttributeReporter,
{
    pub const fn new(controller: Controller<'a, S, A, N, Q>) -> Self {
        Self {
            controller,
            next_frame: None,
        }
    }

    /// Process one frame and return timing information.
    ///
    /// If we fell behind by more than two intervals, the schedule restarts
    /// from `now` instead of catching up.
    pub fn tick(&mut self, now: Instant) -> FrameResult {
        let result = self.controller.tick();

        let Some(interval) = result.next_tick else {
            self.next_frame = None;
            return FrameResult {
                next_deadline: None,
                sleep_duration: None,
                output_failed: result.output_failed,
            };
        };

        let max_drift_ms = interval.as_millis() * 2;
        let base = match self.next_frame {
            Some(deadline) if now.as_millis() <= deadline.as_millis() + max_drift_ms => deadline,
            _ => now,
        };
        let deadline = base + interval;
        self.next_frame = Some(deadline);

        let sleep_duration = if deadline.as_millis() > now.as_millis() {
            Duration::from_millis(deadline.as_millis() - now.as_millis())
        } else {
            Duration::from_millis(0)
        };

        FrameResult {
            next_deadline: Some(deadline),
            sleep_duration: Some(sleep_duration),
            output_failed: result.output_failed,
        }
    }

    /// Drive the controller forever
    pub async fn run(&mut self) -> ! {
        loop {
            match self.tick(Instant::now()).next_deadline {
                Some(deadline) => Timer::at(deadline).await,
                None => self.controller.wait_command().await,
            }
        }
    }

    pub const fn controller(&self) -> &Controller<'a, S, A, N, Q> {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut Controller<'a, S, A, N, Q> {
        &mut self.controller
    }
}
