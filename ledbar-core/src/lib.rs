//! Board-agnostic core logic for zig-zag LED matrix displays
//!
//! This crate contains everything that does not depend on a specific LED
//! driver or microcontroller:
//!
//! - Zig-zag addressing (logical grid to physical strip offsets)
//! - Pixel buffer with GRB storage and brightness scaling
//! - 5x5 bitmap font and glyph renderer
//! - Scroll engine: static text, marquee, row feed and color effects
//! - Collaborator traits (transmit, pacing) and the command model
//! - Configuration type definitions and parser
//!
//! # Layout
//!
//! A serpentine strip folds back on itself at the end of every row:
//!
//! ```text
//!  row 0   0 → 1 → 2 → 3 → 4
//!                          ↓
//!  row 1   9 ← 8 ← 7 ← 6 ← 5
//!          ↓
//!  row 2  10 →11 →12 →13 →14
//! ```
//!
//! Application code only ever talks about logical `(x, y)`; the
//! [`addressing::ZigZag`] addressor is the single place that knows about
//! the alternating row direction.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod addressing;
pub mod buffer;
pub mod clock;
pub mod color;
pub mod command;
pub mod config;
pub mod font;
pub mod scroll;
pub mod traits;

#[cfg(test)]
pub(crate) mod testing;

pub use addressing::{Grid, OutOfRange, RowSpan, ZigZag};
pub use buffer::PixelBuffer;
pub use color::{Color, Palette};
pub use command::{Command, CommandError, LineReader};
pub use scroll::ScrollEngine;
