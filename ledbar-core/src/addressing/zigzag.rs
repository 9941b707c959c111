//! Zig-zag addressor
//!
//! Even rows run left to right along the strip, odd rows run right to
//! left. The offset formula below and the [`RowSpan`]s derived from it are
//! the only place that direction is encoded.

use core::ops::Range;

use super::grid::Grid;

/// Logical coordinate outside the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct OutOfRange {
    pub x: i32,
    pub y: i32,
}

/// Physical direction of a row along the strip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RowDirection {
    /// Logical x grows with the strip index (even rows)
    LeftToRight,
    /// Logical x shrinks as the strip index grows (odd rows)
    RightToLeft,
}

/// Physical extent of one logical row
///
/// `start` is the strip index of logical x = 0 and `end` the strip index of
/// x = W-1, so `start > end` on right-to-left rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RowSpan {
    pub row: usize,
    pub start: usize,
    pub end: usize,
}

impl RowSpan {
    pub fn direction(&self) -> RowDirection {
        if self.start <= self.end {
            RowDirection::LeftToRight
        } else {
            RowDirection::RightToLeft
        }
    }

    /// Strip indices covered by this row, in ascending order
    pub fn range(&self) -> Range<usize> {
        self.start.min(self.end)..self.start.max(self.end) + 1
    }

    /// Strip index of logical column `x` within this row
    ///
    /// `x` must be below the row width.
    pub fn physical(&self, x: usize) -> usize {
        match self.direction() {
            RowDirection::LeftToRight => self.start + x,
            RowDirection::RightToLeft => self.start - x,
        }
    }

    /// Move the row one logical column to the left
    ///
    /// The pixel at x = 0 is dropped and `incoming` lands at x = W-1.
    /// On a right-to-left row this moves the content toward higher strip
    /// indices, which is what keeps every row travelling the same way on
    /// screen.
    pub fn shift_left(&self, pixels: &mut [[u8; 3]], incoming: [u8; 3]) {
        let row = &mut pixels[self.range()];
        match self.direction() {
            RowDirection::LeftToRight => {
                row.rotate_left(1);
                if let Some(last) = row.last_mut() {
                    *last = incoming;
                }
            }
            RowDirection::RightToLeft => {
                row.rotate_right(1);
                if let Some(first) = row.first_mut() {
                    *first = incoming;
                }
            }
        }
    }

    /// Rotate the row one logical column to the left in place
    ///
    /// Same as [`RowSpan::shift_left`] with the dropped pixel fed back in.
    pub fn rotate_left(&self, pixels: &mut [[u8; 3]]) {
        let first = pixels[self.start];
        self.shift_left(pixels, first);
    }
}

/// Addressor for a serpentine matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ZigZag {
    grid: Grid,
}

impl ZigZag {
    pub const fn new(grid: Grid) -> Self {
        Self { grid }
    }

    pub const fn grid(&self) -> Grid {
        self.grid
    }

    /// Strip index (in LEDs, multiply by 3 for bytes) of logical `(x, y)`
    pub fn offset(&self, x: i32, y: i32) -> Result<usize, OutOfRange> {
        if !self.grid.contains(x, y) {
            return Err(OutOfRange { x, y });
        }
        Ok(self.offset_unchecked(x as usize, y as usize))
    }

    fn offset_unchecked(&self, x: usize, y: usize) -> usize {
        let w = self.grid.width();
        if y % 2 == 0 {
            y * w + x
        } else {
            (y + 1) * w - x - 1
        }
    }

    /// Span of logical row `y`
    ///
    /// `y` must be below the grid height.
    pub fn row_span(&self, y: usize) -> RowSpan {
        RowSpan {
            row: y,
            start: self.offset_unchecked(0, y),
            end: self.offset_unchecked(self.grid.width() - 1, y),
        }
    }

    /// Spans of every row, top to bottom
    pub fn row_spans(&self) -> impl Iterator<Item = RowSpan> + '_ {
        (0..self.grid.height()).map(move |y| self.row_span(y))
    }
}

/// Reverse a run of pixels in place, keeping each triple intact
pub fn mirror(span: &mut [[u8; 3]]) {
    span.reverse();
}

/// Byte-level [`mirror`] for raw strip data
///
/// Panics if the span length is not a multiple of 3.
pub fn mirror_bytes(span: &mut [u8]) {
    assert!(span.len() % 3 == 0, "span must hold whole pixels");
    let pixels = span.len() / 3;
    for i in 0..pixels / 2 {
        let j = pixels - 1 - i;
        for channel in 0..3 {
            span.swap(3 * i + channel, 3 * j + channel);
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use proptest::prelude::*;
    use std::vec::Vec;

    #[test]
    fn test_offset_known_values() {
        let zz = ZigZag::new(Grid::new(30, 5));
        assert_eq!(zz.offset(0, 0), Ok(0));
        assert_eq!(zz.offset(29, 0), Ok(29));
        assert_eq!(zz.offset(0, 1), Ok(59));
        assert_eq!(zz.offset(29, 1), Ok(30));
        assert_eq!(zz.offset(0, 2), Ok(60));
        assert_eq!(zz.offset(0, 4), Ok(120));
    }

    #[test]
    fn test_offset_out_of_range() {
        let zz = ZigZag::new(Grid::new(30, 5));
        assert_eq!(zz.offset(30, 0), Err(OutOfRange { x: 30, y: 0 }));
        assert_eq!(zz.offset(0, 5), Err(OutOfRange { x: 0, y: 5 }));
        assert_eq!(zz.offset(-1, 2), Err(OutOfRange { x: -1, y: 2 }));
    }

    #[test]
    fn test_row_spans() {
        let zz = ZigZag::new(Grid::new(4, 3));
        let spans: Vec<RowSpan> = zz.row_spans().collect();
        assert_eq!(spans[0], RowSpan { row: 0, start: 0, end: 3 });
        assert_eq!(spans[1], RowSpan { row: 1, start: 7, end: 4 });
        assert_eq!(spans[2], RowSpan { row: 2, start: 8, end: 11 });

        assert_eq!(spans[1].direction(), RowDirection::RightToLeft);
        assert_eq!(spans[1].range(), 4..8);
        assert_eq!(spans[1].physical(1), 6);
    }

    #[test]
    fn test_shift_left_both_directions() {
        // 3x2 grid, pixel value = logical x + 10 * y
        let zz = ZigZag::new(Grid::new(3, 2));
        let mut pixels = [[0u8; 3]; 6];
        for y in 0..2 {
            for x in 0..3 {
                let i = zz.offset(x, y).unwrap();
                pixels[i] = [(x + 10 * y) as u8; 3];
            }
        }

        for span in zz.row_spans() {
            span.shift_left(&mut pixels, [99; 3]);
        }

        for y in 0..2i32 {
            for x in 0..2i32 {
                let i = zz.offset(x, y).unwrap();
                assert_eq!(pixels[i], [(x + 1 + 10 * y) as u8; 3]);
            }
            let last = zz.offset(2, y).unwrap();
            assert_eq!(pixels[last], [99; 3]);
        }
    }

    #[test]
    fn test_mirror_bytes_keeps_triples() {
        let mut span = [1, 2, 3, 4, 5, 6, 7, 8, 9];
        mirror_bytes(&mut span);
        assert_eq!(span, [7, 8, 9, 4, 5, 6, 1, 2, 3]);
    }

    #[test]
    #[should_panic]
    fn test_mirror_bytes_rejects_partial_pixel() {
        let mut span = [1, 2, 3, 4];
        mirror_bytes(&mut span);
    }

    proptest! {
        #[test]
        fn prop_offset_formula(w in 1usize..40, h in 1usize..40, xs in 0usize..1000, ys in 0usize..1000) {
            let zz = ZigZag::new(Grid::new(w, h));
            let x = xs % w;
            let y = ys % h;
            let expected = if y % 2 == 0 { y * w + x } else { (y + 1) * w - x - 1 };
            prop_assert_eq!(zz.offset(x as i32, y as i32), Ok(expected));
        }

        #[test]
        fn prop_offset_is_bijective(w in 1usize..20, h in 1usize..20) {
            let zz = ZigZag::new(Grid::new(w, h));
            let mut seen = std::vec![false; w * h];
            for y in 0..h {
                for x in 0..w {
                    let i = zz.offset(x as i32, y as i32).unwrap();
                    prop_assert!(!seen[i]);
                    seen[i] = true;
                }
            }
        }

        #[test]
        fn prop_mirror_is_involution(pixels in proptest::collection::vec(any::<u8>(), 0..60)) {
            let len = pixels.len() - pixels.len() % 3;
            let original: Vec<u8> = pixels[..len].to_vec();
            let mut span = original.clone();
            mirror_bytes(&mut span);
            mirror_bytes(&mut span);
            prop_assert_eq!(span, original);
        }
    }
}
