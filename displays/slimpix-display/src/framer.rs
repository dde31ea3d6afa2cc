//! Frame packing and the display handle
//!
//! `pack` turns the canvas into the player's column-major bitmap; `Display`
//! owns the canvas and the connection and sends a frame per `draw`.

use log::{debug, warn};
use slimpix_protocol::{
    GraphicsPacket, Transition, BITMAP_SIZE, GRAPHICS_CHANNEL, PACKET_SIZE, SCREEN_HEIGHT,
    SCREEN_WIDTH,
};

use crate::backend::Connection;
use crate::canvas::PixelCanvas;
use crate::font::FontTable;

/// Pack the canvas into a graphics packet
///
/// For each column, each band of eight rows becomes one byte with the top
/// row in the high bit.
pub fn pack(canvas: &PixelCanvas, transition: Transition, param: i8) -> GraphicsPacket {
    let mut packet = GraphicsPacket::new(transition, param);
    let mut idx = 0;

    for x in 0..SCREEN_WIDTH {
        for y in (0..SCREEN_HEIGHT).step_by(8) {
            let mut bin = 0u8;
            for b in 0..8 {
                let lit = canvas.pixel(x, y + b).unwrap_or(false);
                bin = (bin << 1) | lit as u8;
            }
            packet.bitmap[idx] = bin;
            idx += 1;
        }
    }

    assert_eq!(idx, BITMAP_SIZE, "packed bitmap size mismatch");
    packet
}

/// The player screen: a canvas plus the connection frames go out on
pub struct Display<L> {
    canvas: PixelCanvas,
    link: L,
    frames_sent: u32,
}

impl<L: Connection> Display<L> {
    /// Create a display with a blank canvas
    pub fn new(fonts: &'static FontTable, link: L) -> Self {
        Self {
            canvas: PixelCanvas::new(fonts),
            link,
            frames_sent: 0,
        }
    }

    /// Canvas to draw on
    pub fn canvas(&self) -> &PixelCanvas {
        &self.canvas
    }

    /// Mutable canvas to draw on
    pub fn canvas_mut(&mut self) -> &mut PixelCanvas {
        &mut self.canvas
    }

    /// Underlying connection
    pub fn link(&self) -> &L {
        &self.link
    }

    /// Mutable underlying connection
    pub fn link_mut(&mut self) -> &mut L {
        &mut self.link
    }

    /// Frames handed to the connection so far
    pub fn frames_sent(&self) -> u32 {
        self.frames_sent
    }

    /// Frame the canvas and send it
    ///
    /// Send failures are logged and dropped; the connection owns recovery.
    pub fn draw(&mut self, transition: Transition, param: i8) {
        let bytes = pack(&self.canvas, transition, param).to_bytes();
        debug_assert_eq!(bytes.len(), PACKET_SIZE);

        match self.link.send(GRAPHICS_CHANNEL, &bytes) {
            Ok(()) => {
                self.frames_sent = self.frames_sent.wrapping_add(1);
                debug!(
                    "display: frame sent transition={:?} param={}",
                    transition, param
                );
            }
            Err(e) => warn!("display: send failed: {:?}", e),
        }
    }
}
