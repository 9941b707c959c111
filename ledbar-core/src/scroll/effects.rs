//! Rainbow line generation
//!
//! A hue line spreads a six-sector color wheel across the width of the
//! matrix. Each color is normalized so its RGB vector has length 255,
//! which keeps the perceived brightness even along the line.

use crate::color::Color;

/// Color of logical column `x` on a `width`-wide hue line
///
/// `offset` rotates the wheel; it wraps at `width`.
pub fn hue_color(x: usize, offset: usize, width: usize) -> Color {
    let width = width.max(1);
    let position = (offset % width + x % width) % width;
    let h = position as f32 / width as f32 * 6.0;
    let t = h % 2.0;

    let (r, g, b) = if h < 1.0 {
        (1.0, t, 0.0)
    } else if h < 2.0 {
        (2.0 - t, 1.0, 0.0)
    } else if h < 3.0 {
        (0.0, 1.0, t)
    } else if h < 4.0 {
        (0.0, 2.0 - t, 1.0)
    } else if h < 5.0 {
        (t, 0.0, 1.0)
    } else {
        (1.0, 0.0, 2.0 - t)
    };

    // Every sector has one channel pinned at 1.0, so the norm is never zero
    let scale = 255.0 / libm::sqrtf(r * r + g * g + b * b);
    Color::new((scale * r) as u8, (scale * g) as u8, (scale * b) as u8)
}

/// Full hue line, left to right
pub fn hue(offset: usize, width: usize) -> impl Iterator<Item = Color> {
    (0..width).map(move |x| hue_color(x, offset, width))
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use std::vec::Vec;

    fn magnitude(color: Color) -> f32 {
        let (r, g, b) = (color.r as f32, color.g as f32, color.b as f32);
        libm::sqrtf(r * r + g * g + b * b)
    }

    #[test]
    fn test_hue_constant_brightness() {
        let line: Vec<Color> = hue(0, 30).collect();
        assert_eq!(line.len(), 30);
        for color in line {
            let m = magnitude(color);
            // Truncating three channels loses less than sqrt(3)
            assert!(m > 253.0 && m <= 255.01, "{:?} has magnitude {}", color, m);
        }
    }

    #[test]
    fn test_hue_sector_anchors() {
        assert_eq!(hue_color(0, 0, 30), Color::new(255, 0, 0));
        assert_eq!(hue_color(10, 0, 30), Color::new(0, 255, 0));
        assert_eq!(hue_color(20, 0, 30), Color::new(0, 0, 255));
    }

    #[test]
    fn test_hue_offset_rotates() {
        let base: Vec<Color> = hue(0, 30).collect();
        let shifted: Vec<Color> = hue(7, 30).collect();
        for x in 0..30 {
            assert_eq!(shifted[x], base[(x + 7) % 30]);
        }
        // Offsets wrap at the width
        assert_eq!(hue(37, 30).collect::<Vec<_>>(), shifted);
    }
}
