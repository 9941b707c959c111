//! Glyph renderer

use crate::buffer::PixelBuffer;
use crate::color::Color;

use super::table::{lookup, Glyph, DRAW_FALLBACK, GLYPH_HEIGHT, GLYPH_WIDTH, PUSH_FALLBACK};

/// Draws single glyphs into a [`PixelBuffer`]
///
/// The fallback glyph is part of the renderer so each call site states
/// which one it wants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GlyphRenderer {
    fallback: char,
}

impl GlyphRenderer {
    /// Renderer for text typed at a fixed position
    pub const DIRECT: GlyphRenderer = GlyphRenderer::new(DRAW_FALLBACK);

    /// Renderer for characters arriving through the marquee
    pub const PUSHED: GlyphRenderer = GlyphRenderer::new(PUSH_FALLBACK);

    pub const fn new(fallback: char) -> Self {
        Self { fallback }
    }

    pub const fn fallback(&self) -> char {
        self.fallback
    }

    /// Glyph that will be drawn for `c`
    pub fn glyph(&self, c: char) -> Glyph {
        lookup(c, self.fallback)
    }

    /// Draw `c` with its top-left corner at `(x, y)`
    ///
    /// Only lit pixels are written; the background and the spacer column
    /// are left alone. Any origin is accepted, pixels off the grid are
    /// dropped.
    pub fn draw<const N: usize>(
        &self,
        buffer: &mut PixelBuffer<N>,
        c: char,
        x: i32,
        y: i32,
        color: Color,
    ) {
        let glyph = self.glyph(c);
        for row in 0..GLYPH_HEIGHT {
            for col in 0..GLYPH_WIDTH {
                if glyph.is_set(col, row) {
                    buffer.set_pixel(
                        x.saturating_add(col as i32),
                        y.saturating_add(row as i32),
                        color,
                    );
                }
            }
        }
    }
}
