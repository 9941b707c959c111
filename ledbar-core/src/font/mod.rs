//! Bitmap font and glyph renderer

pub mod renderer;
pub mod table;

pub use renderer::GlyphRenderer;
pub use table::{
    glyph, lookup, Glyph, DRAW_FALLBACK, GLYPH_HEIGHT, GLYPH_PITCH, GLYPH_WIDTH, PUSH_FALLBACK,
};
