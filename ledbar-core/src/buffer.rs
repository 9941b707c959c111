//! Pixel buffer
//!
//! Raw per-LED storage in strip order. The buffer is allocated once for a
//! fixed LED count and mutated in place by every drawing and scrolling
//! operation; it is never resized.

use crate::addressing::{mirror, Grid, ZigZag};
use crate::color::Color;

/// Strip-ordered GRB storage for `N` LEDs
#[derive(Debug, Clone)]
pub struct PixelBuffer<const N: usize> {
    zigzag: ZigZag,
    pixels: [[u8; 3]; N],
}

impl<const N: usize> PixelBuffer<N> {
    /// Create a black buffer for `grid`
    ///
    /// Panics if the grid does not hold exactly `N` LEDs.
    pub fn new(grid: Grid) -> Self {
        assert_eq!(
            grid.pixel_count(),
            N,
            "buffer capacity must match grid size"
        );
        Self {
            zigzag: ZigZag::new(grid),
            pixels: [[0; 3]; N],
        }
    }

    pub fn grid(&self) -> Grid {
        self.zigzag.grid()
    }

    pub fn zigzag(&self) -> &ZigZag {
        &self.zigzag
    }

    /// Set one logical pixel
    ///
    /// Coordinates off the grid are ignored: text layout routinely
    /// overshoots the edges.
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        if let Ok(index) = self.zigzag.offset(x, y) {
            self.pixels[index] = color.to_grb();
        }
    }

    /// Read back one logical pixel
    pub fn pixel(&self, x: i32, y: i32) -> Option<Color> {
        self.zigzag
            .offset(x, y)
            .ok()
            .map(|index| Color::from_grb(self.pixels[index]))
    }

    /// Set a pixel by strip index, ignoring indices past the end
    pub fn set_index(&mut self, index: usize, color: Color) {
        if let Some(pixel) = self.pixels.get_mut(index) {
            *pixel = color.to_grb();
        }
    }

    /// Set every pixel to `color`
    pub fn fill(&mut self, color: Color) {
        self.pixels.fill(color.to_grb());
    }

    pub fn clear(&mut self) {
        self.fill(Color::BLACK);
    }

    /// Raw strip bytes for the transmit primitive
    ///
    /// The view is only valid until the next mutating call.
    pub fn raw(&self) -> &[u8] {
        self.pixels.as_flattened()
    }

    /// Mutable raw strip bytes, GRB per LED
    pub fn raw_mut(&mut self) -> &mut [u8] {
        self.pixels.as_flattened_mut()
    }

    /// Strip-ordered pixel triples
    pub fn pixels(&self) -> &[[u8; 3]] {
        &self.pixels
    }

    /// Shift every row one column left, filling x = W-1 from `incoming`
    ///
    /// `incoming` is called with the row index.
    pub fn shift_left_with(&mut self, mut incoming: impl FnMut(usize) -> Color) {
        let zigzag = self.zigzag;
        for span in zigzag.row_spans() {
            span.shift_left(&mut self.pixels, incoming(span.row).to_grb());
        }
    }

    /// Rotate every row one column left in place
    pub fn rotate_rows_left(&mut self) {
        let zigzag = self.zigzag;
        for span in zigzag.row_spans() {
            span.rotate_left(&mut self.pixels);
        }
    }

    /// Move every row up by one, dropping row 0
    ///
    /// Row H-1 is filled from `line`, called with the logical column.
    pub fn feed_line_with(&mut self, mut line: impl FnMut(usize) -> Color) {
        let grid = self.grid();
        let width = grid.width();
        let height = grid.height();

        self.pixels.copy_within(width.., 0);

        // Every moved row now sits on a row of the opposite direction
        let zigzag = self.zigzag;
        for span in zigzag.row_spans().take(height - 1) {
            mirror(&mut self.pixels[span.range()]);
        }

        let bottom = zigzag.row_span(height - 1);
        for x in 0..width {
            self.pixels[bottom.physical(x)] = line(x).to_grb();
        }
    }

    /// Paint the same logical line on every row
    ///
    /// Row 0 is written directly; the other rows are copies of it, mirrored
    /// on the right-to-left rows.
    pub fn paint_rows_with(&mut self, mut line: impl FnMut(usize) -> Color) {
        let width = self.grid().width();
        let (first, rest) = self.pixels.split_at_mut(width);

        for (x, pixel) in first.iter_mut().enumerate() {
            *pixel = line(x).to_grb();
        }

        for (i, row) in rest.chunks_exact_mut(width).enumerate() {
            row.copy_from_slice(first);
            // rest starts at row 1, so even i is an odd row
            if i % 2 == 0 {
                mirror(row);
            }
        }
    }
}
