//! LED strip transmit trait

use crate::addressing::Grid;

/// Trait for pushing a frame to the physical strip
///
/// Implementations drive the LED protocol (PIO, SPI, RMT, ...). The call is
/// synchronous: when it returns the frame has been handed off and the
/// buffer may be mutated again. Transport failures are the implementation's
/// concern; the renderer does not retry.
pub trait LedTransmit {
    /// Send one frame
    ///
    /// `raw` holds `grid.byte_len()` bytes, three per LED in strip order,
    /// green first.
    fn transmit(&mut self, grid: Grid, raw: &[u8]);
}

impl<T: LedTransmit + ?Sized> LedTransmit for &mut T {
    fn transmit(&mut self, grid: Grid, raw: &[u8]) {
        (**self).transmit(grid, raw)
    }
}
