//! Playlist service trait

use super::database::Track;

/// How a seek position is interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SeekMode {
    /// From the start of the list
    Set,
    /// Relative to the current item
    Current,
    /// Relative to the end of the list
    End,
}

/// Snapshot of a player's playlist
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayList {
    pub items: Vec<Track>,
    /// Index of the playing item
    pub current: usize,
}

impl PlayList {
    /// Item the player is on, if any
    pub fn current_track(&self) -> Option<&Track> {
        self.items.get(self.current)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Trait for the playlist service
///
/// Groups are identified by an opaque id; several players may share one.
pub trait PlaylistService {
    /// Playlist of the player with this uuid
    fn list(&self, uuid: &str) -> PlayList;

    /// Append tracks to a group's list
    fn add_to_group(&mut self, group: &str, tracks: &[Track]);

    /// Replace a group's list
    fn set_group(&mut self, group: &str, tracks: &[Track]);

    /// Move a group's current item
    fn seek(&mut self, group: &str, position: i64, mode: SeekMode);
}
