//! Inter-task communication channels
//!
//! The render task is the only owner of the LED matrix. Everything else
//! asks it to draw through [`RENDER_CHANNEL`].

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use portable_atomic::AtomicBool;

use ledbar_core::clock::ClockTime;
use ledbar_core::Command;

/// Channel capacity for render requests
const RENDER_CHANNEL_SIZE: usize = 4;

/// A unit of work for the render task
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RenderCommand {
    /// Display command received over UART
    Execute(Command),
    /// Redraw the clock
    Clock { time: ClockTime, separator: bool },
}

/// Render requests, consumed by the render task in arrival order
pub static RENDER_CHANNEL: Channel<CriticalSectionRawMutex, RenderCommand, RENDER_CHANNEL_SIZE> =
    Channel::new();

/// Whether the clock task should keep redrawing the time
///
/// Cleared by any display command, set again by `time` and `clock`.
pub static CLOCK_VISIBLE: AtomicBool = AtomicBool::new(true);
