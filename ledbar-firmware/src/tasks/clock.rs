//! Clock task
//!
//! Redraws the time twice a second, blinking the separator, while the
//! clock is visible and set.

use defmt::*;
use embassy_time::{Duration, Ticker};
use portable_atomic::Ordering;

use ledbar_core::clock::ClockTime;

use crate::channels::{RenderCommand, CLOCK_VISIBLE, RENDER_CHANNEL};
use crate::clock::WALL_CLOCK;

/// Redraw interval in milliseconds
pub const CLOCK_INTERVAL_MS: u64 = 500;

#[embassy_executor::task]
pub async fn clock_task(offset_s: i32) {
    info!("Clock task started, offset {}s", offset_s);

    let mut ticker = Ticker::every(Duration::from_millis(CLOCK_INTERVAL_MS));
    let mut separator = false;

    loop {
        ticker.next().await;
        separator = !separator;

        if !CLOCK_VISIBLE.load(Ordering::Relaxed) {
            continue;
        }
        let Some(unix_s) = WALL_CLOCK.now() else {
            continue;
        };

        let time = ClockTime::from_unix(unix_s, offset_s);

        // A long animation is still running; the next tick will catch up
        if RENDER_CHANNEL
            .try_send(RenderCommand::Clock { time, separator })
            .is_err()
        {
            trace!("Render channel full, skipping clock frame");
        }
    }
}
