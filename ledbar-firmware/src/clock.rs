//! Wall clock
//!
//! The board has no battery-backed RTC. The `clock` command sets a Unix
//! timestamp, and the current time is derived from the uptime elapsed
//! since then.

use core::cell::Cell;

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::blocking_mutex::Mutex;
use embassy_time::Instant;

/// Unix time anchored to an uptime instant
pub struct WallClock {
    base: Mutex<CriticalSectionRawMutex, Cell<Option<(u64, Instant)>>>,
}

impl WallClock {
    pub const fn new() -> Self {
        Self {
            base: Mutex::new(Cell::new(None)),
        }
    }

    /// Set the current Unix time in seconds
    pub fn set(&self, unix_s: u64) {
        let now = Instant::now();
        self.base.lock(|base| base.set(Some((unix_s, now))));
    }

    /// Current Unix time in seconds, `None` until set
    pub fn now(&self) -> Option<u64> {
        self.base
            .lock(|base| base.get())
            .map(|(unix_s, at)| unix_s + at.elapsed().as_secs())
    }
}

pub static WALL_CLOCK: WallClock = WallClock::new();
