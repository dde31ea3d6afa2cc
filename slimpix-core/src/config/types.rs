//! Configuration type definitions
//!
//! Every field has a default, so an empty document is a valid config.

use serde::Deserialize;

use crate::traits::Field;

/// Default header font height
pub const DEFAULT_HEADER_FONT: u8 = 11;

/// Default body font height
pub const DEFAULT_BODY_FONT: u8 = 19;

/// Default x offset of the text-entry buffer
pub const DEFAULT_ENTRY_INDENT: i32 = 9;

/// Screen layout settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(default, deny_unknown_fields)]
pub struct DisplayConfig {
    /// Pixel height of header rows
    pub header_font: u8,
    /// Pixel height of body rows
    pub body_font: u8,
    /// X offset of the text-entry buffer
    pub entry_indent: i32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            header_font: DEFAULT_HEADER_FONT,
            body_font: DEFAULT_BODY_FONT,
            entry_indent: DEFAULT_ENTRY_INDENT,
        }
    }
}

/// Search menu settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(default, deny_unknown_fields)]
pub struct SearchConfig {
    /// Field a new search menu starts on
    pub field: Field,
}

/// Complete client configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(default, deny_unknown_fields)]
pub struct ClientConfig {
    pub display: DisplayConfig,
    pub search: SearchConfig,
}
