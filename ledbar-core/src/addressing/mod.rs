//! Grid geometry and zig-zag addressing
//!
//! Maps logical `(x, y)` coordinates onto the physical LED order of a
//! serpentine strip. Every pixel-writing path goes through this module.

pub mod grid;
pub mod zigzag;

pub use grid::Grid;
pub use zigzag::{mirror, mirror_bytes, OutOfRange, RowDirection, RowSpan, ZigZag};
