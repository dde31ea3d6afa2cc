//! Menu logic for the slimpix display client
//!
//! This crate contains everything that decides what the screen shows:
//!
//! - T9 multi-tap text entry
//! - Collaborator traits (music database, playlist service)
//! - Per-player session state
//! - The menu tree with the now-playing, playlist and search menus
//! - Configuration type definitions
//!
//! Drawing goes through `slimpix_display::Display`; nothing here touches
//! the network directly.

#![deny(unsafe_code)]

pub mod config;
pub mod menu;
pub mod session;
pub mod t9;
pub mod traits;

#[cfg(test)]
mod mock;

pub use config::{ClientConfig, ConfigError};
pub use menu::{Layout, MenuContext, MenuId, MenuKind, MenuTree, Outcome};
pub use session::SessionState;
