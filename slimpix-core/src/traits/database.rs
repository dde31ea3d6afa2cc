//! Music database trait
//!
//! The database answers prefix queries on one field at a time. A query
//! yields a `MatchSet`: an ordered view of the matching values that the
//! search menu walks with a cursor.

use serde::Deserialize;

/// Opaque id of a database entry
pub type EntryId = u32;

/// Searchable metadata field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Title,
    #[default]
    Artist,
    Album,
    Genre,
    Year,
}

impl Field {
    /// Display name shown in menu headers
    pub fn name(self) -> &'static str {
        match self {
            Field::Title => "title",
            Field::Artist => "artist",
            Field::Album => "album",
            Field::Genre => "genre",
            Field::Year => "year",
        }
    }
}

/// A track as handed to the playlist service
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Track {
    pub id: EntryId,
    pub title: String,
    pub artist: String,
    pub album: String,
}

/// Result of one prefix query
///
/// Positions are zero-based cursors into the ordered, distinct values of
/// the queried field.
pub trait MatchSet {
    /// Field the query ran on
    fn field(&self) -> Field;

    /// Prefix the query ran with
    fn prefix(&self) -> &str;

    /// Number of entries whose value sorts at or before `cursor`
    fn count_at_or_below(&self, cursor: usize) -> u64;

    /// Number of distinct values
    fn total_count(&self) -> usize;

    /// Entry holding the value at `cursor`, `None` past the end
    fn resolve_index(&self, cursor: usize) -> Option<EntryId>;

    /// Whether the query matched nothing
    fn is_empty(&self) -> bool {
        self.total_count() == 0
    }
}

/// Trait for the music database
pub trait MusicDatabase {
    /// Run a prefix query on `field`
    ///
    /// An empty prefix matches everything.
    fn query(&self, field: Field, prefix: &str) -> Box<dyn MatchSet>;

    /// Value of `field` for an entry
    fn field_value(&self, entry: EntryId, field: Field) -> String;

    /// Tracks carrying the value at `cursor` of a match set
    fn entries(&self, matches: &dyn MatchSet, cursor: usize) -> Vec<Track>;
}
