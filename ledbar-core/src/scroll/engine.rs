//! Scroll engine
//!
//! Composes glyphs, scrolling and effects on top of the pixel buffer and
//! pushes each finished frame to the strip.
//!
//! Two text modes exist:
//!
//! - **Static**: a message that fits the width (W/6 characters) is laid out
//!   at a 6-column pitch on a background fill.
//! - **Marquee**: longer messages enter from the right, one column per
//!   frame, with a pause of `wait` ms between frames.

use crate::addressing::Grid;
use crate::buffer::PixelBuffer;
use crate::clock::ClockTime;
use crate::color::{Color, Palette};
use crate::command::Command;
use crate::config::{BarConfig, DEFAULT_WAIT_MS};
use crate::font::{GlyphRenderer, GLYPH_PITCH};
use crate::traits::{DelayNs, LedTransmit};

use rand::RngCore;

use super::effects::{hue, hue_color};

/// How long an alert stays up before and after its text (ms)
pub const ALERT_HOLD_MS: u32 = 1000;

/// Lead-in for announced messages: blank gap, solid bar, arrow
const ANNOUNCE_PREFIX: &str = "     \n-> ";

/// Lead-out for announced messages: solid bar, blank gap
const ANNOUNCE_SUFFIX: &str = " \n     ";

/// Text, scroll and effect renderer for one LED matrix
///
/// Owns the only pixel buffer. Apart from that buffer, and the palette and
/// delay it is configured with, the engine keeps no state between calls.
pub struct ScrollEngine<const N: usize, T, D> {
    buffer: PixelBuffer<N>,
    palette: Palette,
    wait_ms: u32,
    transmit: T,
    delay: D,
}

impl<const N: usize, T: LedTransmit, D: DelayNs> ScrollEngine<N, T, D> {
    /// Create an engine with a black buffer and the default palette
    pub fn new(grid: Grid, transmit: T, delay: D) -> Self {
        Self {
            buffer: PixelBuffer::new(grid),
            palette: Palette::default(),
            wait_ms: DEFAULT_WAIT_MS,
            transmit,
            delay,
        }
    }

    /// Create an engine seeded from a configuration
    pub fn with_config(grid: Grid, config: &BarConfig, transmit: T, delay: D) -> Self {
        let mut engine = Self::new(grid, transmit, delay);
        engine.apply_config(config);
        engine
    }

    /// Take palette and pacing from a configuration
    pub fn apply_config(&mut self, config: &BarConfig) {
        self.palette = config.palette();
        self.wait_ms = config.wait_ms;
    }

    pub fn grid(&self) -> Grid {
        self.buffer.grid()
    }

    pub fn buffer(&self) -> &PixelBuffer<N> {
        &self.buffer
    }

    /// Direct buffer access; call [`ScrollEngine::show`] to display changes
    pub fn buffer_mut(&mut self) -> &mut PixelBuffer<N> {
        &mut self.buffer
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn palette_mut(&mut self) -> &mut Palette {
        &mut self.palette
    }

    /// Default marquee delay per column (ms)
    pub fn wait(&self) -> u32 {
        self.wait_ms
    }

    pub fn set_wait(&mut self, wait_ms: u32) {
        self.wait_ms = wait_ms;
    }

    pub fn transmitter(&self) -> &T {
        &self.transmit
    }

    pub fn delay(&self) -> &D {
        &self.delay
    }

    /// Send the current buffer to the strip
    pub fn show(&mut self) {
        self.transmit.transmit(self.buffer.grid(), self.buffer.raw());
    }

    fn foreground_or_default(&self, color: Option<Color>) -> Color {
        color.unwrap_or_else(|| self.palette.effective_foreground())
    }

    fn background_or_default(&self, color: Option<Color>) -> Color {
        color.unwrap_or_else(|| self.palette.effective_background())
    }

    /// Draw one character at `(x, y)` without transmitting
    ///
    /// Unknown characters draw as `?`.
    pub fn draw_char(&mut self, c: char, x: i32, y: i32, color: Option<Color>) {
        let color = self.foreground_or_default(color);
        GlyphRenderer::DIRECT.draw(&mut self.buffer, c, x, y, color);
    }

    /// Show `text`, statically if it fits the width, as a marquee otherwise
    ///
    /// In static mode the buffer is filled with `bg` first and characters
    /// are placed at `x`, `x + 6`, ... An empty text renders a blank frame.
    pub fn render_line(&mut self, text: &str, color: Option<Color>, bg: Option<Color>, x: i32) {
        let color = self.foreground_or_default(color);
        let bg = self.background_or_default(bg);

        if text.chars().count() > self.grid().text_capacity() {
            self.message(text, Some(color), Some(bg), None);
            return;
        }

        self.buffer.fill(bg);
        let mut x = x;
        for c in text.chars() {
            GlyphRenderer::DIRECT.draw(&mut self.buffer, c, x, 0, color);
            x = x.saturating_add(GLYPH_PITCH as i32);
        }
        self.show();
    }

    /// Scroll `text` in from the right, character by character
    ///
    /// An empty text does nothing.
    pub fn message(&mut self, text: &str, color: Option<Color>, bg: Option<Color>, wait: Option<u32>) {
        for c in text.chars() {
            self.push_character(c, color, bg, wait);
        }
    }

    /// Scroll one character in from the right
    ///
    /// Six frames: the five glyph columns, then a background spacer. Each
    /// frame is transmitted and followed by a `wait` ms pause. Unknown
    /// characters draw as `*`.
    pub fn push_character(
        &mut self,
        c: char,
        color: Option<Color>,
        bg: Option<Color>,
        wait: Option<u32>,
    ) {
        let glyph = GlyphRenderer::PUSHED.glyph(c);
        let color = self.foreground_or_default(color);
        let bg = self.background_or_default(bg);
        let wait = wait.unwrap_or(self.wait_ms);

        for step in 0..GLYPH_PITCH {
            self.buffer.shift_left_with(|row| {
                if glyph.is_set(step, row) {
                    color
                } else {
                    bg
                }
            });
            self.show();
            self.delay.delay_ms(wait);
        }
    }

    /// Shift the display one column left and append `column` at the right
    ///
    /// `column[y]` is the new pixel for row `y`; rows past the end of the
    /// slice get the effective background. Does not transmit.
    pub fn scroll(&mut self, column: &[Color]) {
        let bg = self.palette.effective_background();
        self.buffer
            .shift_left_with(|row| column.get(row).copied().unwrap_or(bg));
    }

    /// Move every row up one and append `line` as the bottom row
    ///
    /// `line[x]` is the new pixel for column `x`; short lines are padded
    /// with the effective background. Does not transmit.
    pub fn feed_line(&mut self, line: &[Color]) {
        let bg = self.palette.effective_background();
        self.buffer
            .feed_line_with(|x| line.get(x).copied().unwrap_or(bg));
    }

    fn feed_solid(&mut self, color: Color) {
        self.buffer.feed_line_with(|_| color);
        self.show();
    }

    /// Rotate every row one pixel to the left and transmit
    ///
    /// The leftmost pixel of each row reappears on its right end, so `W`
    /// calls bring the display back to where it started.
    pub fn cycle_left(&mut self) {
        self.buffer.rotate_rows_left();
        self.show();
    }

    /// Paint the hue line on every row and transmit
    pub fn spectrum(&mut self, offset: usize) {
        let width = self.grid().width();
        self.buffer
            .paint_rows_with(|x| hue_color(x, offset, width));
        self.show();
    }

    /// Roll the hue line's colors up the display one solid row at a time
    ///
    /// Waits `delay_ms` before each row.
    pub fn wash(&mut self, offset: usize, delay_ms: u32) {
        let width = self.grid().width();
        for color in hue(offset, width) {
            self.delay.delay_ms(delay_ms);
            self.feed_solid(color);
        }
    }

    /// Separator animation: roll in a blank screen, one `color` bar, then
    /// roll it out again
    pub fn break_line(&mut self, color: Color, bg: Color) {
        let height = self.grid().height();
        for _ in 0..height {
            self.feed_solid(bg);
        }
        self.feed_solid(color);
        for _ in 0..height {
            self.feed_solid(bg);
        }
    }

    /// Flash a short centered notice on a `bg` field
    ///
    /// Text beyond the visible width is dropped.
    pub fn alert(&mut self, text: &str, color: Color, bg: Color) {
        let capacity = self.grid().text_capacity();
        let end = text
            .char_indices()
            .nth(capacity)
            .map(|(i, _)| i)
            .unwrap_or(text.len());
        let text = &text[..end];
        let len = text.chars().count();
        let height = self.grid().height();

        self.break_line(Color::BLACK, Color::BLACK);
        for _ in 0..height {
            self.feed_solid(bg);
        }
        self.delay.delay_ms(ALERT_HOLD_MS);

        // Half a pitch per missing character on each side
        let x = (GLYPH_PITCH / 2 * (capacity - len)) as i32;
        self.render_line(text, Some(color), Some(bg), x);
        self.delay.delay_ms(ALERT_HOLD_MS);

        for _ in 0..height {
            self.feed_solid(bg);
        }
        self.break_line(Color::BLACK, Color::BLACK);
    }

    /// Scroll `text` framed by a white bar-and-arrow lead-in and a bar
    /// lead-out
    pub fn announce(&mut self, text: &str) {
        self.message(ANNOUNCE_PREFIX, Some(Color::WHITE), None, Some(0));
        self.message(text, None, None, None);
        self.message(ANNOUNCE_SUFFIX, Some(Color::WHITE), None, None);
    }

    /// Show `times` frames of random bytes
    ///
    /// Every channel of every LED is drawn from `rng`, bypassing the
    /// palette and the power setting.
    pub fn noise<R: RngCore>(&mut self, rng: &mut R, times: usize) {
        for _ in 0..times {
            rng.fill_bytes(self.buffer.raw_mut());
            self.show();
        }
    }

    /// Fill the whole matrix with an unscaled color and transmit
    pub fn fill_color(&mut self, color: Color) {
        self.buffer.fill(color);
        self.show();
    }

    /// Strip self-test: walk a single white LED along the strip
    pub fn chase(&mut self) {
        for index in 0..N {
            self.buffer.clear();
            self.buffer.set_index(index, Color::WHITE);
            self.show();
        }
    }

    /// Show `HH:MM`, or `HH MM` when `separator` is false
    pub fn render_clock(&mut self, time: ClockTime, separator: bool) {
        let label = time.label(separator);
        self.render_line(&label, None, None, 0);
    }

    /// Apply a display command
    ///
    /// Returns false for commands that need the board's clock
    /// ([`Command::ShowTime`], [`Command::SetClock`]) or an entropy source
    /// ([`Command::Noise`]); those are left to the caller.
    pub fn execute(&mut self, command: &Command) -> bool {
        match command {
            Command::Color(color) => self.fill_color(*color),
            Command::Foreground(color) => self.palette.set_foreground(*color),
            Command::Background(color) => {
                self.palette.set_background(*color);
                self.fill_color(*color);
            }
            Command::Power(power) => self.palette.set_power(*power),
            Command::Effect { offset, delay_ms } => {
                self.wash(*offset, *delay_ms);
                self.break_line(Color::BLACK, Color::BLACK);
            }
            Command::Spectrum { offset } => self.spectrum(*offset),
            Command::Cycle => self.cycle_left(),
            Command::Write(text) => self.announce(text),
            Command::Alert(text) => self.alert(text, Color::WHITE, Color::RED),
            Command::Chase => self.chase(),
            Command::ShowTime | Command::SetClock(_) | Command::Noise { .. } => return false,
        }
        true
    }
}
