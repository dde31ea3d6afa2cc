//! Playlist browser
//!
//! Walks the player's playlist with a cursor. Cursor moves slide the
//! screen; a move past either end is consumed without a redraw.

use core::fmt::Write;

use log::debug;
use slimpix_display::PixelCanvas;
use slimpix_protocol::{Command, Transition};

use super::{Layout, Line, MenuContext, Reply};
use crate::session::SessionState;
use crate::traits::{PlaylistService, SeekMode};

#[derive(Debug, Default)]
pub struct PlaylistMenu {
    cursor: usize,
}

impl PlaylistMenu {
    pub fn new() -> Self {
        Self::default()
    }

    /// Selected playlist position
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub(crate) fn scroll_to_top(&mut self) {
        self.cursor = 0;
    }

    pub(crate) fn command<L>(&mut self, cmd: Command, ctx: &mut MenuContext<'_, L>) -> Reply {
        let len = ctx.playlists.list(&ctx.session.uuid).len();
        // The list may have shrunk since the last key press
        self.cursor = self.cursor.min(len.saturating_sub(1));

        match cmd {
            Command::Up => {
                if self.cursor == 0 {
                    Reply::Handled
                } else {
                    self.cursor -= 1;
                    Reply::Redraw(Transition::SlideUp)
                }
            }
            Command::Down => {
                if self.cursor + 1 >= len {
                    Reply::Handled
                } else {
                    self.cursor += 1;
                    Reply::Redraw(Transition::SlideDown)
                }
            }
            Command::Left => Reply::Back,
            Command::Right | Command::Play if len > 0 => {
                debug!("playlist: seek group={} to={}", ctx.session.group, self.cursor);
                ctx.playlists
                    .seek(&ctx.session.group, self.cursor as i64, SeekMode::Set);
                Reply::Redraw(Transition::Constant)
            }
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
        let cursor = self.cursor.min(list.len().saturating_sub(1));
        let position = if list.is_empty() { 0 } else { cursor + 1 };

        let mut header = Line::new();
        let _ = write!(header, "Playlist ({} of {})", position, list.len());
        canvas.print_at(0, 0, &header, layout.header_font);

        if let Some(track) = list.items.get(cursor) {
            canvas.move_cursor(0, layout.body_top());
            canvas.print(&track.title, layout.body_font);
            canvas.print(" (", layout.body_font);
            canvas.print(&track.artist, layout.body_font);
            canvas.print(")", layout.body_font);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{render, Fixture, PlaylistCall};

    #[test]
    fn test_cursor_clamps_at_ends() {
        let mut fx = Fixture::with_playlist(3, 0);
        let mut menu = PlaylistMenu::new();

        assert_eq!(menu.command(Command::Up, &mut fx.ctx()), Reply::Handled);
        assert_eq!(menu.cursor(), 0);

        for expected in [1, 2] {
            assert_eq!(
                menu.command(Command::Down, &mut fx.ctx()),
                Reply::Redraw(Transition::SlideDown)
            );
            assert_eq!(menu.cursor(), expected);
        }
        assert_eq!(menu.command(Command::Down, &mut fx.ctx()), Reply::Handled);
        assert_eq!(menu.cursor(), 2);

        assert_eq!(
            menu.command(Command::Up, &mut fx.ctx()),
            Reply::Redraw(Transition::SlideUp)
        );
        assert_eq!(menu.cursor(), 1);
    }

    #[test]
    fn test_empty_playlist() {
        let mut fx = Fixture::new();
        let mut menu = PlaylistMenu::new();
        assert_eq!(menu.command(Command::Down, &mut fx.ctx()), Reply::Handled);
        assert_eq!(menu.command(Command::Play, &mut fx.ctx()), Reply::Ignored);
        assert_eq!(menu.command(Command::Right, &mut fx.ctx()), Reply::Ignored);
        assert!(fx.playlists.calls.is_empty());
    }

    #[test]
    fn test_right_seeks_to_cursor() {
        let mut fx = Fixture::with_playlist(3, 0);
        let mut menu = PlaylistMenu::new();
        menu.command(Command::Down, &mut fx.ctx());
        assert_eq!(
            menu.command(Command::Right, &mut fx.ctx()),
            Reply::Redraw(Transition::Constant)
        );
        assert_eq!(
            fx.playlists.calls,
            vec![PlaylistCall::Seek("group".into(), 1, SeekMode::Set)]
        );
    }

    #[test]
    fn test_left_goes_back() {
        let mut fx = Fixture::with_playlist(3, 0);
        let mut menu = PlaylistMenu::new();
        assert_eq!(menu.command(Command::Left, &mut fx.ctx()), Reply::Back);
        assert_eq!(menu.command(Command::Digit(2), &mut fx.ctx()), Reply::Ignored);
    }

    #[test]
    fn test_shrunk_list_pulls_cursor_in() {
        let mut fx = Fixture::with_playlist(5, 0);
        let mut menu = PlaylistMenu::new();
        for _ in 0..4 {
            menu.command(Command::Down, &mut fx.ctx());
        }
        assert_eq!(menu.cursor(), 4);

        fx.playlists.list.items.truncate(2);
        assert_eq!(menu.command(Command::Down, &mut fx.ctx()), Reply::Handled);
        assert_eq!(menu.cursor(), 1);
    }

    #[test]
    fn test_draw_shows_selected_track() {
        let mut fx = Fixture::with_playlist(3, 0);
        let mut menu = PlaylistMenu::new();
        menu.command(Command::Down, &mut fx.ctx());

        let layout = Layout::default();
        let canvas = render(|c| menu.draw(&layout, c, &fx.session, &fx.playlists));
        let expected = render(|c| {
            c.print_at(0, 0, "Playlist (2 of 3)", 11);
            c.print_at(0, 12, "Track 1 (Artist 1)", 19);
        });
        assert_eq!(canvas.lit_count(), expected.lit_count());
        for y in 0..32 {
            for x in 0..320 {
                assert_eq!(canvas.pixel(x, y), expected.pixel(x, y), "at {x},{y}");
            }
        }
    }
}
