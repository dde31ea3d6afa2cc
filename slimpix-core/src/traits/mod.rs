//! Collaborator traits
//!
//! These traits define the interface between the menus and the services
//! that live outside the display client: the music database and the
//! playlist groups.

pub mod database;
pub mod playlist;

pub use database::{EntryId, Field, MatchSet, MusicDatabase, Track};
pub use playlist::{PlayList, PlaylistService, SeekMode};
