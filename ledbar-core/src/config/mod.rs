//! Configuration types
//!
//! Board-agnostic settings that seed the palette, pacing and clock. Where
//! they are stored is up to the board; this module only defines the types
//! and the `key=value` text format.

pub mod parser;
pub mod types;

pub use parser::{parse_color, parse_config, parse_power, ParseError};
pub use types::*;
