//! In-memory collaborators for menu tests

use slimpix_display::{init_font_table, Connection, Display, LinkError, PixelCanvas};
use slimpix_protocol::{GraphicsPacket, Transition, GRAPHICS_CHANNEL};

use crate::menu::MenuContext;
use crate::session::SessionState;
use crate::traits::{
    EntryId, Field, MatchSet, MusicDatabase, PlayList, PlaylistService, SeekMode, Track,
};

/// Connection that keeps every frame
#[derive(Debug, Default)]
pub(crate) struct MockLink {
    pub frames: Vec<Vec<u8>>,
}

impl Connection for MockLink {
    fn send(&mut self, channel: &str, payload: &[u8]) -> Result<(), LinkError> {
        assert_eq!(channel, GRAPHICS_CHANNEL);
        self.frames.push(payload.to_vec());
        Ok(())
    }
}

fn value_of(track: &Track, field: Field) -> &str {
    match field {
        Field::Title => track.title.as_str(),
        Field::Artist => track.artist.as_str(),
        Field::Album => track.album.as_str(),
        Field::Genre | Field::Year => "",
    }
}

/// Match set over track ids, one value per track
pub(crate) struct MemoryMatches {
    field: Field,
    prefix: String,
    ids: Vec<EntryId>,
}

impl MatchSet for MemoryMatches {
    fn field(&self) -> Field {
        self.field
    }

    fn prefix(&self) -> &str {
        &self.prefix
    }

    fn count_at_or_below(&self, cursor: usize) -> u64 {
        (cursor + 1).min(self.ids.len()) as u64
    }

    fn total_count(&self) -> usize {
        self.ids.len()
    }

    fn resolve_index(&self, cursor: usize) -> Option<EntryId> {
        self.ids.get(cursor).copied()
    }
}

#[derive(Debug, Default)]
pub(crate) struct MemoryDatabase {
    pub tracks: Vec<Track>,
}

impl MusicDatabase for MemoryDatabase {
    fn query(&self, field: Field, prefix: &str) -> Box<dyn MatchSet> {
        let wanted = prefix.to_ascii_lowercase();
        let ids = self
            .tracks
            .iter()
            .filter(|t| value_of(t, field).to_ascii_lowercase().starts_with(&wanted))
            .map(|t| t.id)
            .collect();
        Box::new(MemoryMatches {
            field,
            prefix: prefix.to_string(),
            ids,
        })
    }

    fn field_value(&self, entry: EntryId, field: Field) -> String {
        self.tracks
            .get(entry as usize)
            .map(|t| value_of(t, field).to_string())
            .unwrap_or_default()
    }

    fn entries(&self, matches: &dyn MatchSet, cursor: usize) -> Vec<Track> {
        matches
            .resolve_index(cursor)
            .and_then(|id| self.tracks.get(id as usize))
            .cloned()
            .into_iter()
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum PlaylistCall {
    Add(String, usize),
    Set(String, usize),
    Seek(String, i64, SeekMode),
}

/// Playlist service with a fixed list that records every change request
#[derive(Debug, Default)]
pub(crate) struct RecordingPlaylists {
    pub list: PlayList,
    pub calls: Vec<PlaylistCall>,
}

impl PlaylistService for RecordingPlaylists {
    fn list(&self, _uuid: &str) -> PlayList {
        self.list.clone()
    }

    fn add_to_group(&mut self, group: &str, tracks: &[Track]) {
        self.calls.push(PlaylistCall::Add(group.to_string(), tracks.len()));
    }

    fn set_group(&mut self, group: &str, tracks: &[Track]) {
        self.calls.push(PlaylistCall::Set(group.to_string(), tracks.len()));
    }

    fn seek(&mut self, group: &str, position: i64, mode: SeekMode) {
        self.calls
            .push(PlaylistCall::Seek(group.to_string(), position, mode));
    }
}

/// Display, session and collaborators for one test
pub(crate) struct Fixture {
    pub display: Display<MockLink>,
    pub session: SessionState,
    pub database: MemoryDatabase,
    pub playlists: RecordingPlaylists,
}

impl Fixture {
    pub fn new() -> Self {
        Self {
            display: Display::new(init_font_table(), MockLink::default()),
            session: SessionState::new("player-1", "group"),
            database: MemoryDatabase::default(),
            playlists: RecordingPlaylists::default(),
        }
    }

    /// Playlist of `len` tracks named "Track i" by "Artist i"
    pub fn with_playlist(len: usize, current: usize) -> Self {
        let mut fx = Self::new();
        fx.playlists.list = PlayList {
            items: (0..len)
                .map(|i| Track {
                    id: i as EntryId,
                    title: format!("Track {i}"),
                    artist: format!("Artist {i}"),
                    album: String::new(),
                })
                .collect(),
            current,
        };
        fx
    }

    /// Database with one track per artist name
    pub fn with_artists(artists: &[&str]) -> Self {
        let mut fx = Self::new();
        fx.database.tracks = artists
            .iter()
            .enumerate()
            .map(|(i, artist)| Track {
                id: i as EntryId,
                title: format!("Song {i}"),
                artist: artist.to_string(),
                album: String::new(),
            })
            .collect();
        fx
    }

    pub fn ctx(&mut self) -> MenuContext<'_, MockLink> {
        MenuContext {
            display: &mut self.display,
            session: &self.session,
            database: &self.database,
            playlists: &mut self.playlists,
        }
    }

    /// Frames sent so far
    pub fn frames(&self) -> usize {
        self.display.link().frames.len()
    }

    /// Raw transition byte of every frame sent, in order
    pub fn transition_codes(&self) -> Vec<u8> {
        self.display.link().frames.iter().map(|f| f[2]).collect()
    }

    /// Transition of the last frame sent
    pub fn last_transition(&self) -> Option<Transition> {
        let frame = self.display.link().frames.last()?;
        GraphicsPacket::decode(frame).ok().map(|p| p.transition)
    }
}

/// Draw onto a fresh canvas
pub(crate) fn render(draw: impl FnOnce(&mut PixelCanvas)) -> PixelCanvas {
    let mut canvas = PixelCanvas::new(init_font_table());
    draw(&mut canvas);
    canvas
}
