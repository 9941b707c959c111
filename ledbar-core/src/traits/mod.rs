//! Collaborator traits
//!
//! These traits define the interface between the rendering logic and the
//! board: pushing a frame to the strip and pacing the animation.

pub mod transmit;

pub use embedded_hal::delay::DelayNs;
pub use transmit::LedTransmit;
