//! Colors and brightness scaling

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// 8-bit RGB color as used by the public API
///
/// The strip itself expects green first; conversion to the wire order
/// happens only when a color is stored in a [`crate::PixelBuffer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0);
    pub const WHITE: Color = Color::new(255, 255, 255);
    pub const RED: Color = Color::new(255, 0, 0);
    pub const YELLOW: Color = Color::new(255, 255, 0);

    /// Create a color from red, green and blue channels
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Channel triple in strip order (green, red, blue)
    pub const fn to_grb(self) -> [u8; 3] {
        [self.g, self.r, self.b]
    }

    /// Rebuild a color from a strip-order triple
    pub const fn from_grb(grb: [u8; 3]) -> Self {
        Self {
            r: grb[1],
            g: grb[0],
            b: grb[2],
        }
    }

    /// Multiply every channel by `power`, truncating toward zero
    ///
    /// `power` is not clamped. Results above 255 saturate, negative or NaN
    /// factors give 0.
    pub fn scaled(self, power: f32) -> Self {
        Self {
            r: scale_channel(self.r, power),
            g: scale_channel(self.g, power),
            b: scale_channel(self.b, power),
        }
    }
}

fn scale_channel(channel: u8, power: f32) -> u8 {
    (channel as f32 * power) as u8
}

/// Foreground/background pair with a brightness multiplier
///
/// Colors are stored unscaled. The effective colors are recomputed on
/// every read so a brightness change applies to the very next draw.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Palette {
    foreground: Color,
    background: Color,
    power: f32,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            foreground: Color::WHITE,
            background: Color::BLACK,
            power: 1.0,
        }
    }
}

impl Palette {
    /// Create a palette at full brightness
    pub const fn new(foreground: Color, background: Color) -> Self {
        Self {
            foreground,
            background,
            power: 1.0,
        }
    }

    /// Unscaled foreground color
    pub fn foreground(&self) -> Color {
        self.foreground
    }

    pub fn set_foreground(&mut self, color: Color) {
        self.foreground = color;
    }

    /// Unscaled background color
    pub fn background(&self) -> Color {
        self.background
    }

    pub fn set_background(&mut self, color: Color) {
        self.background = color;
    }

    /// Brightness multiplier
    pub fn power(&self) -> f32 {
        self.power
    }

    pub fn set_power(&mut self, power: f32) {
        self.power = power;
    }

    /// Foreground scaled by the current power
    pub fn effective_foreground(&self) -> Color {
        self.foreground.scaled(self.power)
    }

    /// Background scaled by the current power
    pub fn effective_background(&self) -> Color {
        self.background.scaled(self.power)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grb_order() {
        let color = Color::new(1, 2, 3);
        assert_eq!(color.to_grb(), [2, 1, 3]);
        assert_eq!(Color::from_grb([2, 1, 3]), color);
    }

    #[test]
    fn test_scaling_truncates() {
        let color = Color::new(255, 100, 3);
        assert_eq!(color.scaled(0.5), Color::new(127, 50, 1));
        assert_eq!(color.scaled(0.0), Color::BLACK);
    }

    #[test]
    fn test_scaling_not_clamped() {
        // Power above 1.0 brightens and saturates at the channel limit
        let color = Color::new(100, 200, 0);
        assert_eq!(color.scaled(1.5), Color::new(150, 255, 0));
    }

    #[test]
    fn test_power_applies_on_read() {
        let mut palette = Palette::new(Color::new(200, 100, 50), Color::new(10, 20, 30));
        assert_eq!(palette.effective_foreground(), Color::new(200, 100, 50));

        palette.set_power(0.5);
        assert_eq!(palette.effective_foreground(), Color::new(100, 50, 25));
        assert_eq!(palette.effective_background(), Color::new(5, 10, 15));

        // Stored colors stay unscaled
        assert_eq!(palette.foreground(), Color::new(200, 100, 50));
    }
}
