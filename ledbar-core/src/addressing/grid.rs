//! Matrix dimensions

use crate::font::GLYPH_PITCH;

/// Immutable matrix dimensions in LEDs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Grid {
    width: usize,
    height: usize,
}

impl Grid {
    /// Create a grid
    ///
    /// Panics if either dimension is zero. Usable in const context, so a
    /// bad `const` grid fails at compile time.
    pub const fn new(width: usize, height: usize) -> Self {
        assert!(width > 0 && height > 0, "grid dimensions must be non-zero");
        Self { width, height }
    }

    /// Create a grid, returning `None` for a zero dimension
    pub const fn try_new(width: usize, height: usize) -> Option<Self> {
        if width == 0 || height == 0 {
            None
        } else {
            Some(Self { width, height })
        }
    }

    /// Number of logical columns
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Number of logical rows
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Total number of LEDs (W·H)
    pub const fn pixel_count(&self) -> usize {
        self.width * self.height
    }

    /// Size of the raw strip buffer in bytes
    pub const fn byte_len(&self) -> usize {
        self.pixel_count() * 3
    }

    /// Number of whole characters visible at the 6-column glyph pitch
    pub const fn text_capacity(&self) -> usize {
        self.width / GLYPH_PITCH
    }

    /// Check whether a logical coordinate lies on the grid
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimensions() {
        let grid = Grid::new(30, 5);
        assert_eq!(grid.pixel_count(), 150);
        assert_eq!(grid.byte_len(), 450);
        assert_eq!(grid.text_capacity(), 5);
    }

    #[test]
    fn test_try_new_rejects_zero() {
        assert!(Grid::try_new(0, 5).is_none());
        assert!(Grid::try_new(5, 0).is_none());
        assert_eq!(Grid::try_new(1, 1), Some(Grid::new(1, 1)));
    }

    #[test]
    #[should_panic]
    fn test_new_panics_on_zero() {
        let _ = Grid::new(0, 1);
    }

    #[test]
    fn test_contains() {
        let grid = Grid::new(4, 2);
        assert!(grid.contains(0, 0));
        assert!(grid.contains(3, 1));
        assert!(!grid.contains(4, 0));
        assert!(!grid.contains(0, 2));
        assert!(!grid.contains(-1, 0));
        assert!(!grid.contains(0, -1));
    }
}
