//! Client configuration
//!
//! Parsed from TOML. Font sizes are checked against the font table range
//! before the config is handed out.

pub mod types;

pub use types::*;

use log::warn;
use slimpix_display::MAX_FONT_SIZE;

use crate::menu::Layout;

/// Errors that can occur loading a configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Not valid TOML, or fields of the wrong type
    Parse,
    /// Font height outside the font table
    InvalidFontSize(u8),
}

impl ClientConfig {
    /// Parse and validate a TOML document
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: ClientConfig = toml::from_str(text).map_err(|e| {
            warn!("config: parse failed: {}", e);
            ConfigError::Parse
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Check font sizes
    pub fn validate(&self) -> Result<(), ConfigError> {
        for size in [self.display.header_font, self.display.body_font] {
            if size as usize >= MAX_FONT_SIZE {
                warn!("config: font size {} out of range", size);
                return Err(ConfigError::InvalidFontSize(size));
            }
        }
        Ok(())
    }

    /// Layout the menus draw with
    pub fn layout(&self) -> Layout {
        Layout {
            header_font: self.display.header_font,
            body_font: self.display.body_font,
            entry_indent: self.display.entry_indent,
        }
    }
}
