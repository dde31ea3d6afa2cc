//! T9 search menu
//!
//! The menu holds one active query refinement: a field plus a literal
//! prefix. It is what the results view walks. The menu is created with an
//! empty-prefix query, and every commit replaces it in place.
//!
//! State machine (mode, key):
//!
//! | Mode            | Key     | Effect                                            |
//! |-----------------|---------|---------------------------------------------------|
//! | text entry      | left    | clear the pending flag, or delete the last char   |
//! | text entry      | right   | arm the pending flag, or commit when already armed|
//! | text entry      | 0-9     | T9 key press                                      |
//! | browse results  | left    | back to text entry                                |
//! | browse results  | up/down | move the result cursor, clamped                   |
//! | browse results  | add     | append the entries at the cursor to the group     |
//! | browse results  | play    | replace the group with them and seek to the start |
//!
//! Committing replaces the active refinement with a query on the typed
//! prefix and switches to the results. Left in text entry with at most one
//! typed character and nothing pending leaves the menu when it has a
//! parent.
//!
//! Moves inside the menu and the way back out use the slide transitions;
//! only entering a new screen pushes.

use core::fmt::Write;

use heapless::String;
use log::debug;
use slimpix_display::{PixelCanvas, GLYPH_GAP};
use slimpix_protocol::{Command, Transition};

use super::{Layout, Line, MenuContext, Reply};
use crate::t9;
use crate::traits::{Field, MatchSet, MusicDatabase, SeekMode};

/// Longest prefix that can be typed
pub const MAX_MATCH_LEN: usize = 32;

/// What the search menu is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SearchMode {
    /// Typing a prefix
    #[default]
    TextEntry,
    /// Choosing the field to refine on; not wired to any key yet
    FieldSelect,
    /// Walking the results of the active query
    BrowseResults,
}

pub struct SearchMenu {
    mode: SearchMode,
    /// Active refinement
    active: Box<dyn MatchSet>,
    text: String<MAX_MATCH_LEN>,
    /// Last typed character is final; the next key press appends
    new_symbol: bool,
    result_cursor: usize,
}

impl SearchMenu {
    /// Create a menu in text entry with an empty-prefix query on `field`
    pub fn new(database: &dyn MusicDatabase, field: Field) -> Self {
        Self {
            mode: SearchMode::TextEntry,
            active: database.query(field, ""),
            text: String::new(),
            new_symbol: false,
            result_cursor: 0,
        }
    }

    pub fn mode(&self) -> SearchMode {
        self.mode
    }

    /// Prefix typed so far
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn new_symbol_pending(&self) -> bool {
        self.new_symbol
    }

    pub fn result_cursor(&self) -> usize {
        self.result_cursor
    }

    /// Query the results view walks
    pub fn active_query(&self) -> &dyn MatchSet {
        self.active.as_ref()
    }

    pub(crate) fn command<L>(
        &mut self,
        cmd: Command,
        has_parent: bool,
        ctx: &mut MenuContext<'_, L>,
    ) -> Reply {
        if self.mode == SearchMode::TextEntry
            && cmd == Command::Left
            && self.text.chars().count() < 2
            && !self.new_symbol
        {
            if has_parent {
                return Reply::Back;
            }
            if self.text.is_empty() {
                return Reply::Ignored;
            }
        }

        let transition = match self.mode {
            SearchMode::TextEntry => self.text_entry(cmd, ctx.database),
            SearchMode::FieldSelect => None,
            SearchMode::BrowseResults => self.browse(cmd, ctx),
        };
        match transition {
            Some(transition) => Reply::Redraw(transition),
            None => Reply::Ignored,
        }
    }

    fn text_entry(&mut self, cmd: Command, database: &dyn MusicDatabase) -> Option<Transition> {
        match cmd {
            Command::Left => {
                if !self.new_symbol {
                    self.text.pop();
                }
                self.new_symbol = false;
                Some(Transition::Constant)
            }
            Command::Right if self.new_symbol => {
                let field = self.active.field();
                debug!("search: commit field={} prefix={:?}", field.name(), self.text.as_str());
                self.active = database.query(field, &self.text);
                self.new_symbol = false;
                self.result_cursor = 0;
                self.mode = SearchMode::BrowseResults;
                Some(Transition::SlideRight)
            }
            Command::Right => {
                self.new_symbol = true;
                Some(Transition::Constant)
            }
            Command::Digit(digit) if digit <= 9 => {
                t9::apply_keypress(digit, &mut self.text, &mut self.new_symbol);
                Some(Transition::Constant)
            }
            _ => None,
        }
    }

    fn browse<L>(&mut self, cmd: Command, ctx: &mut MenuContext<'_, L>) -> Option<Transition> {
        match cmd {
            Command::Left => {
                self.mode = SearchMode::TextEntry;
                Some(Transition::SlideLeft)
            }
            Command::Down => {
                let last = self.active.total_count().saturating_sub(1);
                self.result_cursor = (self.result_cursor + 1).min(last);
                Some(Transition::SlideDown)
            }
            Command::Up => {
                self.result_cursor = self.result_cursor.saturating_sub(1);
                Some(Transition::SlideUp)
            }
            Command::Add => {
                let tracks = ctx.database.entries(self.active.as_ref(), self.result_cursor);
                debug!("search: add count={} group={}", tracks.len(), ctx.session.group);
                ctx.playlists.add_to_group(&ctx.session.group, &tracks);
                Some(Transition::Constant)
            }
            Command::Play => {
                let tracks = ctx.database.entries(self.active.as_ref(), self.result_cursor);
                if !tracks.is_empty() {
                    debug!("search: play count={} group={}", tracks.len(), ctx.session.group);
                    ctx.playlists.set_group(&ctx.session.group, &tracks);
                    ctx.playlists.seek(&ctx.session.group, 0, SeekMode::Set);
                }
                Some(Transition::Constant)
            }
            _ => None,
        }
    }

    pub(crate) fn draw(&self, layout: &Layout, canvas: &mut PixelCanvas, database: &dyn MusicDatabase) {
        match self.mode {
            SearchMode::TextEntry => self.draw_text_entry(layout, canvas),
            SearchMode::FieldSelect => {}
            SearchMode::BrowseResults => self.draw_results(layout, canvas, database),
        }
    }

    fn draw_text_entry(&self, layout: &Layout, canvas: &mut PixelCanvas) {
        let mut header = Line::new();
        let _ = write!(header, "text entry for {}", self.active.field().name());
        canvas.print_at(0, 0, &header, layout.header_font);
        canvas.print_at(layout.entry_indent, layout.body_top(), &self.text, layout.body_font);

        // Caret under the last character, or under the next slot when armed
        let cell = canvas.fonts().select(layout.body_font).advance(' ') as i32 + GLYPH_GAP;
        let mut end = canvas.cursor().0;
        if self.new_symbol {
            end += cell;
        }
        let y = layout.body_top() + layout.body_font as i32;
        for x in (end - cell)..end {
            canvas.put_pixel(x, y, true);
        }
    }

    fn draw_results(&self, layout: &Layout, canvas: &mut PixelCanvas, database: &dyn MusicDatabase) {
        let field = self.active.field();
        let cursor = self.result_cursor;

        let mut header = Line::new();
        let _ = write!(
            header,
            "{} `{}*' ({} matches)",
            field.name(),
            self.active.prefix(),
            self.active.count_at_or_below(cursor)
        );
        canvas.print_at(0, 0, &header, layout.header_font);

        let mut position = Line::new();
        let _ = write!(position, "{} of {}", cursor + 1, self.active.total_count());
        canvas.print_right(0, &position, layout.header_font);

        if let Some(entry) = self.active.resolve_index(cursor) {
            let value = database.field_value(entry, field);
            canvas.print_at(0, layout.body_top(), &value, layout.body_font);
        }
    }
}

impl core::fmt::Debug for SearchMenu {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SearchMenu")
            .field("mode", &self.mode)
            .field("field", &self.active.field())
            .field("prefix", &self.active.prefix())
            .field("text", &self.text.as_str())
            .field("new_symbol", &self.new_symbol)
            .field("result_cursor", &self.result_cursor)
            .finish()
    }
}
