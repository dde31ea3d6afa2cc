//! Pixel canvas
//!
//! A monochrome bitmap the size of the player screen with a write cursor.
//! Text is placed glyph by glyph at the cursor; nothing wraps, anything past
//! an edge is clipped.

use log::trace;
use slimpix_protocol::{SCREEN_HEIGHT, SCREEN_WIDTH};

use crate::font::{FontTable, GlyphRegion, MAX_FONT_SIZE};

/// Pixels left blank between two glyphs
pub const GLYPH_GAP: i32 = 1;

/// Monochrome canvas with a text cursor
#[derive(Clone)]
pub struct PixelCanvas {
    /// Row-major pixels, `true` = lit
    pixels: [[bool; SCREEN_WIDTH]; SCREEN_HEIGHT],
    /// Insertion point for the next glyph; may sit off-canvas
    cursor: (i32, i32),
    fonts: &'static FontTable,
}

impl PixelCanvas {
    /// Create a blank canvas with the cursor at the origin
    pub fn new(fonts: &'static FontTable) -> Self {
        Self {
            pixels: [[false; SCREEN_WIDTH]; SCREEN_HEIGHT],
            cursor: (0, 0),
            fonts,
        }
    }

    /// Clear every pixel
    ///
    /// The cursor stays where it is.
    pub fn clear(&mut self) {
        for row in &mut self.pixels {
            row.fill(false);
        }
    }

    /// Move the write cursor
    pub fn move_cursor(&mut self, x: i32, y: i32) {
        self.cursor = (x, y);
    }

    /// Current cursor position
    pub fn cursor(&self) -> (i32, i32) {
        self.cursor
    }

    /// Font table used for text
    pub fn fonts(&self) -> &'static FontTable {
        self.fonts
    }

    /// Draw one character at the cursor and advance past it
    ///
    /// Sizes of `MAX_FONT_SIZE` and above are ignored.
    pub fn put_char(&mut self, ch: char, size: u8) {
        if size as usize >= MAX_FONT_SIZE {
            return;
        }
        let font = self.fonts.select(size);
        let (x, y) = self.cursor;

        trace!("canvas: printing {:?} at {:3}, {:2}", ch, x, y);

        let mut region = GlyphRegion::new(&mut self.pixels, x, y);
        let advance = font.render(&mut region, ch);
        self.cursor.0 = x.saturating_add(advance as i32 + GLYPH_GAP);
    }

    /// Draw a string at the cursor
    pub fn print(&mut self, text: &str, size: u8) {
        for ch in text.chars() {
            self.put_char(ch, size);
        }
    }

    /// Move the cursor, then print
    pub fn print_at(&mut self, x: i32, y: i32, text: &str, size: u8) {
        self.move_cursor(x, y);
        self.print(text, size);
    }

    /// Print so the text ends at the right edge of the screen
    pub fn print_right(&mut self, y: i32, text: &str, size: u8) {
        let x = SCREEN_WIDTH as i32 - self.text_width(text, size);
        self.print_at(x, y, text, size);
    }

    /// Horizontal distance the cursor moves when printing `text`
    pub fn text_width(&self, text: &str, size: u8) -> i32 {
        if size as usize >= MAX_FONT_SIZE {
            return 0;
        }
        let font = self.fonts.select(size);
        text.chars()
            .map(|ch| font.advance(ch) as i32 + GLYPH_GAP)
            .sum()
    }

    /// Set a single pixel
    ///
    /// Returns `true` when the pixel is in bounds, `false` otherwise.
    pub fn put_pixel(&mut self, x: i32, y: i32, on: bool) -> bool {
        if x < 0 || y < 0 || x as usize >= SCREEN_WIDTH || y as usize >= SCREEN_HEIGHT {
            return false;
        }
        self.pixels[y as usize][x as usize] = on;
        true
    }

    /// Read a pixel
    pub fn pixel(&self, x: usize, y: usize) -> Option<bool> {
        self.pixels.get(y).and_then(|row| row.get(x)).copied()
    }

    /// Number of lit pixels
    pub fn lit_count(&self) -> usize {
        self.pixels.iter().flatten().filter(|&&p| p).count()
    }
}

impl core::fmt::Debug for PixelCanvas {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PixelCanvas")
            .field("cursor", &self.cursor)
            .field("lit", &self.lit_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::init_font_table;

    fn canvas() -> PixelCanvas {
        PixelCanvas::new(init_font_table())
    }

    #[test]
    fn test_put_char_advances_by_width_plus_gap() {
        let mut c = canvas();
        c.move_cursor(10, 0);
        c.put_char('A', 11);
        assert_eq!(c.cursor(), (16, 0));

        c.put_char('B', 19);
        assert_eq!(c.cursor(), (27, 0));
        assert!(c.lit_count() > 0);
    }

    #[test]
    fn test_oversized_font_is_ignored() {
        let mut c = canvas();
        c.put_char('A', MAX_FONT_SIZE as u8);
        c.put_char('A', 255);
        assert_eq!(c.cursor(), (0, 0));
        assert_eq!(c.lit_count(), 0);
    }

    #[test]
    fn test_unmapped_size_uses_default_font() {
        let mut a = canvas();
        let mut b = canvas();
        a.put_char('x', 11);
        b.put_char('x', 7);
        assert_eq!(a.cursor(), b.cursor());
        assert_eq!(a.lit_count(), b.lit_count());
    }

    #[test]
    fn test_clear_keeps_cursor() {
        let mut c = canvas();
        c.print_at(3, 4, "hi", 11);
        let cursor = c.cursor();
        c.clear();
        assert_eq!(c.lit_count(), 0);
        assert_eq!(c.cursor(), cursor);
    }

    #[test]
    fn test_no_wrapping_past_right_edge() {
        let mut c = canvas();
        let long = "W".repeat(100);
        c.print_at(0, 0, &long, 11);
        assert_eq!(c.cursor(), (600, 0));
        // Nothing spilled onto a second text line
        for y in 11..SCREEN_HEIGHT {
            for x in 0..SCREEN_WIDTH {
                assert_eq!(c.pixel(x, y), Some(false));
            }
        }
    }

    #[test]
    fn test_print_right_ends_at_edge() {
        let mut c = canvas();
        c.print_right(0, "12:34", 11);
        assert_eq!(c.cursor().0, SCREEN_WIDTH as i32);
        assert_eq!(c.text_width("12:34", 11), 30);
    }

    #[test]
    fn test_negative_cursor_clips() {
        let mut c = canvas();
        c.print_at(-100, -5, "clipped", 19);
        assert_eq!(c.lit_count(), 0);
        assert_eq!(c.cursor().0, -100 + 7 * 11);
    }

    #[test]
    fn test_put_pixel_bounds() {
        let mut c = canvas();
        assert!(c.put_pixel(0, 0, true));
        assert!(c.put_pixel(SCREEN_WIDTH as i32 - 1, SCREEN_HEIGHT as i32 - 1, true));
        assert!(!c.put_pixel(-1, 0, true));
        assert!(!c.put_pixel(0, SCREEN_HEIGHT as i32, true));
        assert!(!c.put_pixel(SCREEN_WIDTH as i32, 0, true));
        assert_eq!(c.lit_count(), 2);
        assert_eq!(c.pixel(SCREEN_WIDTH, 0), None);
    }
}
