//! Slimpix display wire protocol
//!
//! This crate defines what the client sends to the player's screen and the
//! key symbols it receives back from the remote control.
//!
//! # Graphics packet
//!
//! Every screen update is one fixed-size packet on the `grfe` channel:
//! ```text
//! ┌────────┬────────────┬───────┬──────────────────────────────┐
//! │ OFFSET │ TRANSITION │ PARAM │ BITMAP                       │
//! │ 2B (0) │ 1B         │ 1B    │ SCREEN_WIDTH * BANDS bytes   │
//! └────────┴────────────┴───────┴──────────────────────────────┘
//! ```
//!
//! The bitmap is column-major: for each column, one byte per band of eight
//! rows, top row in the most significant bit. The player only ever sees whole
//! packets; there is no partial update.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod command;
pub mod packet;

pub use command::Command;
pub use packet::{
    GraphicsPacket, PacketError, Transition, BANDS, BITMAP_SIZE, GRAPHICS_CHANNEL, PACKET_SIZE,
    SCREEN_HEIGHT, SCREEN_WIDTH,
};
