//! Graphics packet encoding for the player screen.
//!
//! Packet layout:
//! - OFFSET (2 bytes): reserved for wider hardware, always zero
//! - TRANSITION (1 byte): ASCII transition code
//! - PARAM (1 byte): signed transition height
//! - BITMAP (`BITMAP_SIZE` bytes): column-major, 8 rows per byte, MSB first

/// Screen width in pixels
pub const SCREEN_WIDTH: usize = 320;

/// Screen height in pixels
pub const SCREEN_HEIGHT: usize = 32;

/// Number of 8-row bands per column
pub const BANDS: usize = SCREEN_HEIGHT.div_ceil(8);

/// Packed bitmap size in bytes
pub const BITMAP_SIZE: usize = SCREEN_WIDTH * BANDS;

/// Header size (OFFSET + TRANSITION + PARAM)
pub const HEADER_SIZE: usize = 4;

/// Complete packet size
pub const PACKET_SIZE: usize = HEADER_SIZE + BITMAP_SIZE;

/// Channel the connection delivers graphics packets on
pub const GRAPHICS_CHANNEL: &str = "grfe";

// The player rejects anything but an exact-size frame.
const _: () = assert!(PACKET_SIZE == 4 + SCREEN_WIDTH * ((SCREEN_HEIGHT + 7) / 8));

/// Errors that can occur while encoding or decoding a packet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PacketError {
    /// Buffer too small for encoding
    BufferTooSmall,
    /// Input is not exactly `PACKET_SIZE` bytes
    InvalidLength,
    /// Transition byte is not a known code
    UnknownTransition,
}

/// Visual wipe applied by the player when it swaps to the new frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Transition {
    /// Replace in place
    #[default]
    Constant,
    /// New frame pushes in from the right, moving left
    Left,
    /// New frame pushes in from the left, moving right
    Right,
    /// New frame pushes upward
    Up,
    /// New frame pushes downward
    Down,
    /// Slide left within the current screen, or back out to a parent
    SlideLeft,
    /// Slide right within the current screen
    SlideRight,
    /// Slide upward, moving to the previous list item
    SlideUp,
    /// Slide downward, moving to the next list item
    SlideDown,
}

impl Transition {
    /// Parse a transition from its wire code
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            b'c' => Some(Transition::Constant),
            b'L' => Some(Transition::Left),
            b'R' => Some(Transition::Right),
            b'U' => Some(Transition::Up),
            b'D' => Some(Transition::Down),
            b'l' => Some(Transition::SlideLeft),
            b'r' => Some(Transition::SlideRight),
            b'u' => Some(Transition::SlideUp),
            b'd' => Some(Transition::SlideDown),
            _ => None,
        }
    }

    /// Convert to wire code
    pub fn code(self) -> u8 {
        match self {
            Transition::Constant => b'c',
            Transition::Left => b'L',
            Transition::Right => b'R',
            Transition::Up => b'U',
            Transition::Down => b'D',
            Transition::SlideLeft => b'l',
            Transition::SlideRight => b'r',
            Transition::SlideUp => b'u',
            Transition::SlideDown => b'd',
        }
    }
}

/// A complete screen update
#[derive(Clone, PartialEq, Eq)]
pub struct GraphicsPacket {
    /// Wipe style
    pub transition: Transition,
    /// Transition height parameter
    pub param: i8,
    /// Packed bitmap
    pub bitmap: [u8; BITMAP_SIZE],
}

impl core::fmt::Debug for GraphicsPacket {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let lit = self.bitmap.iter().map(|b| b.count_ones()).sum::<u32>();
        f.debug_struct("GraphicsPacket")
            .field("transition", &self.transition)
            .field("param", &self.param)
            .field("lit_pixels", &lit)
            .finish()
    }
}

impl GraphicsPacket {
    /// Create a blank packet
    pub const fn new(transition: Transition, param: i8) -> Self {
        Self {
            transition,
            param,
            bitmap: [0; BITMAP_SIZE],
        }
    }

    /// Byte index and bit mask of pixel `(x, y)` within the bitmap
    pub const fn locate(x: usize, y: usize) -> (usize, u8) {
        (x * BANDS + y / 8, 0x80 >> (y % 8))
    }

    /// Read a pixel back out of the packed bitmap
    pub fn pixel(&self, x: usize, y: usize) -> Option<bool> {
        if x >= SCREEN_WIDTH || y >= SCREEN_HEIGHT {
            return None;
        }
        let (index, mask) = Self::locate(x, y);
        Some(self.bitmap[index] & mask != 0)
    }

    /// Encode this packet into a byte buffer
    ///
    /// Returns the number of bytes written, always `PACKET_SIZE`.
    pub fn encode(&self, buffer: &mut [u8]) -> Result<usize, PacketError> {
        if buffer.len() < PACKET_SIZE {
            return Err(PacketError::BufferTooSmall);
        }

        buffer[0..2].copy_from_slice(&0u16.to_be_bytes());
        buffer[2] = self.transition.code();
        buffer[3] = self.param as u8;
        let mut idx = HEADER_SIZE;
        buffer[idx..idx + BITMAP_SIZE].copy_from_slice(&self.bitmap);
        idx += BITMAP_SIZE;

        // A short frame must never leave this function.
        assert_eq!(idx, PACKET_SIZE, "graphics packet size mismatch");
        Ok(idx)
    }

    /// Encode this packet into a fixed-size array
    pub fn to_bytes(&self) -> [u8; PACKET_SIZE] {
        let mut buffer = [0u8; PACKET_SIZE];
        // The buffer is exactly PACKET_SIZE, so encoding cannot run short.
        let _ = self.encode(&mut buffer);
        buffer
    }

    /// Decode a packet, as the player would
    pub fn decode(bytes: &[u8]) -> Result<Self, PacketError> {
        if bytes.len() != PACKET_SIZE {
            return Err(PacketError::InvalidLength);
        }
        let transition = Transition::from_code(bytes[2]).ok_or(PacketError::UnknownTransition)?;
        let mut packet = Self::new(transition, bytes[3] as i8);
        packet.bitmap.copy_from_slice(&bytes[HEADER_SIZE..]);
        Ok(packet)
    }
}
