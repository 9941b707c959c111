//! Configuration type definitions

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::color::{Color, Palette};

/// Default inter-column delay for the marquee (ms)
pub const DEFAULT_WAIT_MS: u32 = 25;

/// Display settings
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BarConfig {
    /// Text color (unscaled)
    pub foreground: Color,
    /// Background color (unscaled)
    pub background: Color,
    /// Brightness multiplier, nominally 0.0..=1.0
    pub power: f32,
    /// Marquee delay per column step (ms)
    pub wait_ms: u32,
    /// Local time offset from UTC (seconds)
    pub clock_offset_s: i32,
}

impl Default for BarConfig {
    fn default() -> Self {
        Self {
            foreground: Color::YELLOW,
            background: Color::BLACK,
            power: 1.0,
            wait_ms: DEFAULT_WAIT_MS,
            clock_offset_s: 0,
        }
    }
}

impl BarConfig {
    /// Palette described by this configuration
    pub fn palette(&self) -> Palette {
        let mut palette = Palette::new(self.foreground, self.background);
        palette.set_power(self.power);
        palette
    }
}
