//! `key=value` configuration parser
//!
//! Minimal line-based parser for the settings file kept by the board:
//!
//! ```text
//! # colors are r,g,b
//! fg=255,255,0
//! bg=0,0,0
//! dt=3600
//! wait=25
//! power=0.8
//! ```
//!
//! Blank lines, `#` comments, lines without `=` and unknown keys are
//! skipped so files written by older firmware (which also kept
//! credentials in the same file) still load.

use crate::color::Color;

use super::types::BarConfig;

/// Parse error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParseError {
    /// Color is not three comma-separated 0-255 channels
    InvalidColor,
    /// Integer value could not be parsed
    InvalidNumber,
    /// Brightness is negative, NaN or infinite
    InvalidPower,
}

/// Parse an `r,g,b` color, e.g. `255,128,0`
pub fn parse_color(value: &str) -> Result<Color, ParseError> {
    let mut parts = value.split(',');
    let mut channel = || -> Result<u8, ParseError> {
        parts
            .next()
            .and_then(|p| p.trim().parse::<u8>().ok())
            .ok_or(ParseError::InvalidColor)
    };

    let color = Color::new(channel()?, channel()?, channel()?);

    if parts.next().is_some() {
        return Err(ParseError::InvalidColor);
    }
    Ok(color)
}

/// Parse a brightness multiplier
pub fn parse_power(value: &str) -> Result<f32, ParseError> {
    let power = value
        .trim()
        .parse::<f32>()
        .map_err(|_| ParseError::InvalidPower)?;
    if !power.is_finite() || power < 0.0 {
        return Err(ParseError::InvalidPower);
    }
    Ok(power)
}

/// Parse a settings file, starting from [`BarConfig::default`]
pub fn parse_config(input: &str) -> Result<BarConfig, ParseError> {
    let mut config = BarConfig::default();

    for line in input.lines() {
        let line = line.trim();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        let value = value.trim();

        match key.trim() {
            "fg" => config.foreground = parse_color(value)?,
            "bg" => config.background = parse_color(value)?,
            "dt" => config.clock_offset_s = parse_offset(value)?,
            "wait" => {
                config.wait_ms = value.parse().map_err(|_| ParseError::InvalidNumber)?;
            }
            "power" => config.power = parse_power(value)?,
            _ => {}
        }
    }

    Ok(config)
}

/// Clock offset; an unset offset was historically saved as `None`
fn parse_offset(value: &str) -> Result<i32, ParseError> {
    if value.is_empty() || value == "None" {
        return Ok(0);
    }
    value.parse().map_err(|_| ParseError::InvalidNumber)
}
