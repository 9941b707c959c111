//! WS2812 transmit adapter
//!
//! Bridges the engine's synchronous [`LedTransmit`] to the PIO WS2812
//! driver. The engine keeps GRB bytes in strip order; the driver wants
//! RGB colors and does its own GRB packing.

use embassy_futures::block_on;
use embassy_rp::pio::Instance;
use embassy_rp::pio_programs::ws2812::{Grb, PioWs2812};
use smart_leds::RGB8;

use ledbar_core::traits::LedTransmit;
use ledbar_core::{Color, Grid};

pub struct StripTransmit<'d, P: Instance, const S: usize, const N: usize> {
    ws2812: PioWs2812<'d, P, S, N, Grb>,
    colors: [RGB8; N],
}

impl<'d, P: Instance, const S: usize, const N: usize> StripTransmit<'d, P, S, N> {
    pub fn new(ws2812: PioWs2812<'d, P, S, N, Grb>) -> Self {
        Self {
            ws2812,
            colors: [RGB8::default(); N],
        }
    }
}

impl<'d, P: Instance, const S: usize, const N: usize> LedTransmit for StripTransmit<'d, P, S, N> {
    fn transmit(&mut self, grid: Grid, raw: &[u8]) {
        debug_assert_eq!(raw.len(), grid.byte_len());

        for (slot, grb) in self.colors.iter_mut().zip(raw.chunks_exact(3)) {
            let color = Color::from_grb([grb[0], grb[1], grb[2]]);
            *slot = RGB8::new(color.r, color.g, color.b);
        }

        // Blocks the render task until the DMA transfer and latch are done.
        // The latch wait is an embassy Timer, served by the generic timer
        // queue since block_on's waker belongs to no executor task.
        block_on(self.ws2812.write(&self.colors));
    }
}
