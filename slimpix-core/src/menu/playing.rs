//! Now-playing screen

use core::fmt::Write;

use slimpix_display::PixelCanvas;
use slimpix_protocol::{Command, Transition};

use super::{Layout, Line, MenuId, Reply};
use crate::session::SessionState;
use crate::traits::PlaylistService;

/// Shows the current track of the player's playlist and the elapsed time
#[derive(Debug, Default)]
pub struct PlayingMenu {
    playlist_browser: Option<MenuId>,
}

impl PlayingMenu {
    pub fn new() -> Self {
        Self::default()
    }

    /// Menu that receives up/down
    pub fn playlist_browser(&self) -> Option<MenuId> {
        self.playlist_browser
    }

    pub(crate) fn set_playlist_browser(&mut self, browser: MenuId) {
        self.playlist_browser = Some(browser);
    }

    pub(crate) fn command(&mut self, cmd: Command) -> Reply {
        match cmd {
            Command::Left => Reply::Back,
            Command::Right => Reply::Redraw(Transition::Right),
            Command::Up | Command::Down => match self.playlist_browser {
                Some(browser) => Reply::Forward(browser, cmd),
                None => Reply::Ignored,
            },
            // Reserved for alternate now-playing screens
            Command::Playing => Reply::Handled,
            _ => Reply::Ignored,
        }
    }

    pub(crate) fn draw(
        &self,
        layout: &Layout,
        canvas: &mut PixelCanvas,
        session: &SessionState,
        playlists: &dyn PlaylistService,
    ) {
        let list = playlists.list(&session.uuid);
        let position = if list.is_empty() { 0 } else { list.current + 1 };

        let mut header = Line::new();
        let _ = write!(header, "Now Playing ({} of {})", position, list.len());
        canvas.print_at(0, 0, &header, layout.header_font);

        let (min, sec) = session.elapsed_min_sec();
        let mut elapsed = Line::new();
        let _ = write!(elapsed, " {:02}:{:02}", min, sec);
        canvas.print_right(0, &elapsed, layout.header_font);

        let (title, artist) = match list.current_track() {
            Some(track) => (track.title.as_str(), track.artist.as_str()),
            None => ("", ""),
        };
        canvas.move_cursor(0, layout.body_top());
        canvas.print(title, layout.body_font);
        canvas.print(" (", layout.body_font);
        canvas.print(artist, layout.body_font);
        canvas.print(")", layout.body_font);
    }
}
