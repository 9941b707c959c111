//! Render task
//!
//! Sole owner of the scroll engine. Requests are drawn one at a time and
//! every animation runs to completion before the next request is taken.
//! Noise frames draw from the ring oscillator RNG.

use defmt::*;
use embassy_rp::clocks::RoscRng;
use embassy_rp::peripherals::PIO0;
use embassy_time::Delay;

use ledbar_core::{Command, ScrollEngine};

use crate::channels::{RenderCommand, RENDER_CHANNEL};
use crate::strip::StripTransmit;
use crate::LED_COUNT;

/// The engine as wired on this board: PIO0 state machine 0, blocking delay
pub type Engine = ScrollEngine<LED_COUNT, StripTransmit<'static, PIO0, 0, LED_COUNT>, Delay>;

#[embassy_executor::task]
pub async fn render_task(mut engine: Engine) {
    info!("Render task started");

    loop {
        match RENDER_CHANNEL.receive().await {
            RenderCommand::Execute(Command::Noise { times }) => {
                debug!("Render: noise x{}", times);
                engine.noise(&mut RoscRng, times);
            }
            RenderCommand::Execute(command) => {
                debug!("Render: {:?}", command);
                if !engine.execute(&command) {
                    warn!("Not a display command: {:?}", command);
                }
            }
            RenderCommand::Clock { time, separator } => {
                trace!("Clock {:02}:{:02}", time.hour, time.minute);
                engine.render_clock(time, separator);
            }
        }
    }
}
