//! Scroll engine and color effects
//!
//! The engine owns the pixel buffer and drives the transmit and pacing
//! collaborators. All animations run to completion inside a call; callers
//! that need to interrupt a long message do so between characters.

pub mod effects;
pub mod engine;

pub use effects::{hue, hue_color};
pub use engine::{ScrollEngine, ALERT_HOLD_MS};
