//! Recording collaborators for host tests

extern crate std;

use std::vec::Vec;

use crate::addressing::Grid;
use crate::traits::{DelayNs, LedTransmit};

/// Transmit mock that keeps every frame
#[derive(Default)]
pub struct RecordingStrip {
    pub frames: Vec<Vec<u8>>,
}

impl RecordingStrip {
    pub fn last(&self) -> &[u8] {
        self.frames.last().map(|f| f.as_slice()).unwrap_or(&[])
    }
}

impl LedTransmit for RecordingStrip {
    fn transmit(&mut self, grid: Grid, raw: &[u8]) {
        assert_eq!(raw.len(), grid.byte_len());
        self.frames.push(raw.to_vec());
    }
}

/// Delay mock that only records the requested waits
#[derive(Default)]
pub struct RecordingDelay {
    pub waits_ms: Vec<u32>,
    pub total_ns: u64,
}

impl RecordingDelay {
    pub fn total_ms(&self) -> u64 {
        self.total_ns / 1_000_000
    }
}

impl DelayNs for RecordingDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.total_ns += ns as u64;
    }

    fn delay_ms(&mut self, ms: u32) {
        self.waits_ms.push(ms);
        self.total_ns += ms as u64 * 1_000_000;
    }
}
