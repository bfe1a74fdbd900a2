use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::{Channel, Receiver, Sender};

use crate::attribute::AttributeChange;
use crate::error::Error;
use crate::zcl::AttributeWrite;

/// Commands delivered to the light controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightCommand {
    /// Already decoded attribute change
    Change(AttributeChange),
    /// Raw attribute write, decoded against the current state
    Write(AttributeWrite),
    /// Blink for the given number of seconds
    Identify(u16),
}

impl From<AttributeChange> for LightCommand {
    fn from(change: AttributeChange) -> Self {
        Self::Change(change)
    }
}

impl From<AttributeWrite> for LightCommand {
    fn from(write: AttributeWrite) -> Self {
        Self::Write(write)
    }
}

/// Type alias for the command channel
pub type CommandChannel<const SIZE: usize> =
    Channel<CriticalSectionRawMutex, LightCommand, SIZE>;

/// Type alias for command sender
pub type CommandSender<'a, const SIZE: usize> =
    Sender<'a, CriticalSectionRawMutex, LightCommand, SIZE>;

/// Type alias for command receiver
pub type CommandReceiver<'a, const SIZE: usize> =
    Receiver<'a, CriticalSectionRawMutex, LightCommand, SIZE>;

/// Queue a command without waiting
pub fn send_command<const SIZE: usize>(
    sender: &CommandSender<'_, SIZE>,
    command: impl Into<LightCommand>,
) -> Result<(), Error> {
    sender.try_send(command.into()).map_err(|_| Error::QueueFull)
}
