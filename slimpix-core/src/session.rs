//! Per-player session state the menus read

/// Identity and playback position of the player the menus drive
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    /// Player uuid, used to look up its playlist
    pub uuid: String,
    /// Playlist group the player belongs to
    pub group: String,
    /// Elapsed time of the current track
    pub elapsed_ms: u64,
}

impl SessionState {
    pub fn new(uuid: impl Into<String>, group: impl Into<String>) -> Self {
        Self {
            uuid: uuid.into(),
            group: group.into(),
            elapsed_ms: 0,
        }
    }

    /// Elapsed time split into whole minutes and seconds
    pub fn elapsed_min_sec(&self) -> (u64, u64) {
        let secs = self.elapsed_ms / 1000;
        (secs / 60, secs % 60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_elapsed_split() {
        let mut session = SessionState::new("uuid", "group");
        assert_eq!(session.elapsed_min_sec(), (0, 0));

        session.elapsed_ms = 125_999;
        assert_eq!(session.elapsed_min_sec(), (2, 5));

        session.elapsed_ms = 3_600_000;
        assert_eq!(session.elapsed_min_sec(), (60, 0));
    }
}
