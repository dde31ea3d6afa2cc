//! Remote-control key symbols
//!
//! The connection turns infrared codes into key names; menus only ever see
//! the parsed `Command`.

/// A key press delivered to the active menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    /// Numeric key 0-9
    Digit(u8),
    /// Arrow left (back)
    Left,
    /// Arrow right (select / forward)
    Right,
    /// Arrow up
    Up,
    /// Arrow down
    Down,
    /// Append selection to the playlist
    Add,
    /// Play selection now
    Play,
    /// Pause / resume playback
    Pause,
    /// Jump to the now-playing screen
    Playing,
    /// Open search
    Search,
    /// Open the music browser
    Browse,
}

// Wire names
const DIGIT_NAMES: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];
const NAME_LEFT: &str = "left";
const NAME_RIGHT: &str = "right";
const NAME_UP: &str = "up";
const NAME_DOWN: &str = "down";
const NAME_ADD: &str = "add";
const NAME_PLAY: &str = "play";
const NAME_PAUSE: &str = "pause";
const NAME_PLAYING: &str = "playing";
const NAME_SEARCH: &str = "search";
const NAME_BROWSE: &str = "browse";

impl Command {
    /// Parse a command from its key name
    pub fn from_name(name: &str) -> Option<Self> {
        if let Some(digit) = DIGIT_NAMES.iter().position(|&d| d == name) {
            return Some(Command::Digit(digit as u8));
        }
        match name {
            NAME_LEFT => Some(Command::Left),
            NAME_RIGHT => Some(Command::Right),
            NAME_UP => Some(Command::Up),
            NAME_DOWN => Some(Command::Down),
            NAME_ADD => Some(Command::Add),
            NAME_PLAY => Some(Command::Play),
            NAME_PAUSE => Some(Command::Pause),
            NAME_PLAYING => Some(Command::Playing),
            NAME_SEARCH => Some(Command::Search),
            NAME_BROWSE => Some(Command::Browse),
            _ => None,
        }
    }

    /// Convert to key name
    ///
    /// Digits above 9 have no key and report `"?"`.
    pub fn name(self) -> &'static str {
        match self {
            Command::Digit(d) => DIGIT_NAMES.get(d as usize).copied().unwrap_or("?"),
            Command::Left => NAME_LEFT,
            Command::Right => NAME_RIGHT,
            Command::Up => NAME_UP,
            Command::Down => NAME_DOWN,
            Command::Add => NAME_ADD,
            Command::Play => NAME_PLAY,
            Command::Pause => NAME_PAUSE,
            Command::Playing => NAME_PLAYING,
            Command::Search => NAME_SEARCH,
            Command::Browse => NAME_BROWSE,
        }
    }

    /// The digit carried by a numeric key
    pub fn digit(&self) -> Option<u8> {
        match self {
            Command::Digit(d) => Some(*d),
            _ => None,
        }
    }

    /// Returns true for the four arrow keys
    pub fn is_arrow(&self) -> bool {
        matches!(
            self,
            Command::Left | Command::Right | Command::Up | Command::Down
        )
    }
}
