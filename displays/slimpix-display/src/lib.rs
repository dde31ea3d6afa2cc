//! Raster engine for the slimpix display client
//!
//! This crate provides:
//! - `GlyphRenderer` and the built-in bitmap fonts
//! - `FontTable`, built once by `init_font_table`, mapping sizes to fonts
//! - `PixelCanvas`, the screen-sized bitmap with a text cursor
//! - `pack` and `Display`, which frame the canvas and send it
//! - `Connection`, the seam to the network connection
//!
//! # Drawing a screen
//!
//! Menus clear the canvas, print each line at a chosen cursor position, and
//! finish with `Display::draw`, which packs the whole canvas into one
//! graphics packet and hands it to the connection.

#![deny(unsafe_code)]

pub mod backend;
pub mod canvas;
pub mod font;
pub mod framer;
pub mod glyphs;

// Re-export key types
pub use backend::{Connection, LinkError};
pub use canvas::{PixelCanvas, GLYPH_GAP};
pub use font::{init_font_table, FontTable, GlyphRegion, GlyphRenderer, MAX_FONT_SIZE};
pub use framer::{pack, Display};
pub use glyphs::BitmapFont;
