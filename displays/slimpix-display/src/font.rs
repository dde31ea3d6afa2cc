//! Glyph renderers and the per-size font table
//!
//! Glyph tables are opaque to the canvas: a renderer draws one character
//! into a clipped region and reports how far the cursor should move.

use std::sync::OnceLock;

use log::{info, warn};
use slimpix_protocol::{SCREEN_HEIGHT, SCREEN_WIDTH};

use crate::glyphs::{FULL, STANDARD_1, STANDARD_2};

/// Requested font sizes at or above this are ignored by the canvas
pub const MAX_FONT_SIZE: usize = 32;

/// Destination for one glyph: an origin on the canvas and the width left
/// before the right edge
///
/// Plots outside the canvas are dropped.
pub struct GlyphRegion<'a> {
    pixels: &'a mut [[bool; SCREEN_WIDTH]; SCREEN_HEIGHT],
    x: i32,
    y: i32,
    width: u32,
}

impl<'a> GlyphRegion<'a> {
    pub(crate) fn new(pixels: &'a mut [[bool; SCREEN_WIDTH]; SCREEN_HEIGHT], x: i32, y: i32) -> Self {
        let width = (SCREEN_WIDTH as i64 - x as i64).max(0) as u32;
        Self {
            pixels,
            x,
            y,
            width,
        }
    }

    /// Columns available to the right of the origin
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Set the pixel at `(dx, dy)` relative to the origin
    pub fn plot(&mut self, dx: u32, dy: u32) {
        if dx >= self.width {
            return;
        }
        let px = self.x as i64 + dx as i64;
        let py = self.y as i64 + dy as i64;
        if px < 0 || py < 0 || py >= SCREEN_HEIGHT as i64 {
            return;
        }
        self.pixels[py as usize][px as usize] = true;
    }
}

/// A glyph table for one pixel height
pub trait GlyphRenderer: Sync {
    /// Cell height in pixels
    fn height(&self) -> u8;

    /// Advance width of `ch`, excluding the inter-glyph gap
    fn advance(&self, ch: char) -> u32;

    /// Draw `ch` into `region` and return its advance width
    fn render(&self, region: &mut GlyphRegion<'_>, ch: char) -> u32;
}

/// Maps every requested size 0..MAX_FONT_SIZE to a renderer
///
/// Sizes without a font of exactly that height use the default.
pub struct FontTable {
    per_size: [&'static dyn GlyphRenderer; MAX_FONT_SIZE],
    default: &'static dyn GlyphRenderer,
}

impl FontTable {
    /// Build a table from a catalogue, later entries winning on equal height
    pub fn new(
        default: &'static dyn GlyphRenderer,
        catalogue: &[&'static dyn GlyphRenderer],
    ) -> Self {
        let mut per_size = [default; MAX_FONT_SIZE];
        for &font in catalogue {
            let height = font.height() as usize;
            match per_size.get_mut(height) {
                Some(slot) => *slot = font,
                None => warn!("fonts: height={} exceeds table, skipped", height),
            }
        }
        Self { per_size, default }
    }

    /// The built-in catalogue: standard_1 (default), standard_2 and full
    pub fn standard() -> Self {
        Self::new(&STANDARD_1, &[&STANDARD_1, &STANDARD_2, &FULL])
    }

    /// Renderer for a requested size
    pub fn select(&self, size: u8) -> &'static dyn GlyphRenderer {
        self.per_size
            .get(size as usize)
            .copied()
            .unwrap_or(self.default)
    }

    /// Heights that have their own renderer
    pub fn mapped_sizes(&self) -> impl Iterator<Item = usize> + '_ {
        self.per_size
            .iter()
            .enumerate()
            .filter(|(size, font)| font.height() as usize == *size)
            .map(|(size, _)| size)
    }
}

impl core::fmt::Debug for FontTable {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FontTable")
            .field("default_height", &self.default.height())
            .finish_non_exhaustive()
    }
}

static FONT_TABLE: OnceLock<FontTable> = OnceLock::new();

/// Build the process-wide font table
///
/// Call once at startup, before creating a canvas. Later calls return the
/// same table.
pub fn init_font_table() -> &'static FontTable {
    FONT_TABLE.get_or_init(|| {
        let table = FontTable::standard();
        info!(
            "fonts: table ready default={} sizes={:?}",
            STANDARD_1.name(),
            table.mapped_sizes().collect::<Vec<_>>()
        );
        table
    })
}
