//! Menu tree
//!
//! Menus live in an arena owned by `MenuTree`. Each node holds an index to
//! its parent, and the tree tracks which node is active. A key press goes
//! to the active menu only; the menu answers with a `Reply` and the tree
//! carries it out: redraw, switch to the parent, or hand the key to another
//! menu.
//!
//! Drawing always follows the same pattern: clear the canvas, let the menu
//! print its lines, then send one frame with the chosen transition.

mod playing;
mod playlist;
mod search;

pub use playing::PlayingMenu;
pub use playlist::PlaylistMenu;
pub use search::{SearchMenu, SearchMode, MAX_MATCH_LEN};

use log::{debug, warn};
use slimpix_display::{Connection, Display, PixelCanvas};
use slimpix_protocol::{Command, Transition};

use crate::config::{DEFAULT_BODY_FONT, DEFAULT_ENTRY_INDENT, DEFAULT_HEADER_FONT};
use crate::session::SessionState;
use crate::traits::{Field, MusicDatabase, PlaylistService};

/// Longest formatted line
pub(crate) const LINE_LEN: usize = 80;

/// One formatted screen line
pub(crate) type Line = heapless::String<LINE_LEN>;

/// Index of a menu in its tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MenuId(usize);

impl MenuId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Whether a command was consumed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Outcome {
    Handled,
    Unhandled,
}

impl Outcome {
    pub fn is_handled(self) -> bool {
        self == Outcome::Handled
    }
}

/// Font sizes and offsets the menus draw with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Layout {
    /// Pixel height of header rows
    pub header_font: u8,
    /// Pixel height of body rows
    pub body_font: u8,
    /// X offset of the text-entry buffer
    pub entry_indent: i32,
}

impl Layout {
    /// Top row of the body line
    pub fn body_top(&self) -> i32 {
        self.header_font as i32 + 1
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            header_font: DEFAULT_HEADER_FONT,
            body_font: DEFAULT_BODY_FONT,
            entry_indent: DEFAULT_ENTRY_INDENT,
        }
    }
}

/// Everything a menu may touch while handling a command
pub struct MenuContext<'a, L> {
    pub display: &'a mut Display<L>,
    pub session: &'a SessionState,
    pub database: &'a dyn MusicDatabase,
    pub playlists: &'a mut dyn PlaylistService,
}

/// What a menu asks the tree to do after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Reply {
    /// Not consumed
    Ignored,
    /// Consumed, screen unchanged
    Handled,
    /// Consumed, redraw with this transition
    Redraw(Transition),
    /// Return to the parent
    Back,
    /// Make another menu active and let it handle the command
    Forward(MenuId, Command),
}

/// The menu behind a node
pub enum MenuKind {
    Playing(PlayingMenu),
    Search(SearchMenu),
    Playlist(PlaylistMenu),
}

impl MenuKind {
    /// Short name for logs
    pub fn name(&self) -> &'static str {
        match self {
            MenuKind::Playing(_) => "playing",
            MenuKind::Search(_) => "search",
            MenuKind::Playlist(_) => "playlist",
        }
    }

    /// Reset the stored list cursor
    ///
    /// Called on a parent when one of its children navigates back to it.
    fn scroll_to_top(&mut self) {
        if let MenuKind::Playlist(menu) = self {
            menu.scroll_to_top();
        }
    }

    fn command<L>(
        &mut self,
        cmd: Command,
        has_parent: bool,
        ctx: &mut MenuContext<'_, L>,
    ) -> Reply {
        match self {
            MenuKind::Playing(menu) => menu.command(cmd),
            MenuKind::Search(menu) => menu.command(cmd, has_parent, ctx),
            MenuKind::Playlist(menu) => menu.command(cmd, ctx),
        }
    }

    fn draw(
        &self,
        layout: &Layout,
        canvas: &mut PixelCanvas,
        session: &SessionState,
        database: &dyn MusicDatabase,
        playlists: &dyn PlaylistService,
    ) {
        match self {
            MenuKind::Playing(menu) => menu.draw(layout, canvas, session, playlists),
            MenuKind::Search(menu) => menu.draw(layout, canvas, database),
            MenuKind::Playlist(menu) => menu.draw(layout, canvas, session, playlists),
        }
    }
}

impl core::fmt::Debug for MenuKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// A menu and its place in the tree
#[derive(Debug)]
pub struct MenuNode {
    parent: Option<MenuId>,
    kind: MenuKind,
}

impl MenuNode {
    pub fn parent(&self) -> Option<MenuId> {
        self.parent
    }

    pub fn kind(&self) -> &MenuKind {
        &self.kind
    }
}

/// Arena of menus plus the active pointer
#[derive(Debug)]
pub struct MenuTree {
    nodes: Vec<MenuNode>,
    active: Option<MenuId>,
    layout: Layout,
}

impl MenuTree {
    /// Create an empty tree
    pub fn new(layout: Layout) -> Self {
        Self {
            nodes: Vec::new(),
            active: None,
            layout,
        }
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Currently active menu
    pub fn active(&self) -> Option<MenuId> {
        self.active
    }

    pub fn node(&self, id: MenuId) -> Option<&MenuNode> {
        self.nodes.get(id.0)
    }

    /// Search menu at `id`, if that node is one
    pub fn search(&self, id: MenuId) -> Option<&SearchMenu> {
        match self.node(id).map(MenuNode::kind) {
            Some(MenuKind::Search(menu)) => Some(menu),
            _ => None,
        }
    }

    /// Playlist browser at `id`, if that node is one
    pub fn playlist(&self, id: MenuId) -> Option<&PlaylistMenu> {
        match self.node(id).map(MenuNode::kind) {
            Some(MenuKind::Playlist(menu)) => Some(menu),
            _ => None,
        }
    }

    /// Add a node; the first node added becomes active
    ///
    /// A parent id that is not in this tree is dropped.
    pub fn add(&mut self, parent: Option<MenuId>, kind: MenuKind) -> MenuId {
        let parent = parent.filter(|p| p.0 < self.nodes.len());
        let id = MenuId(self.nodes.len());
        self.nodes.push(MenuNode { parent, kind });
        if self.active.is_none() {
            self.active = Some(id);
        }
        id
    }

    /// Add a now-playing menu
    pub fn add_playing(&mut self, parent: Option<MenuId>) -> MenuId {
        self.add(parent, MenuKind::Playing(PlayingMenu::new()))
    }

    /// Add a search menu with its query seeded on `field`
    pub fn add_search(
        &mut self,
        parent: Option<MenuId>,
        database: &dyn MusicDatabase,
        field: Field,
    ) -> MenuId {
        self.add(parent, MenuKind::Search(SearchMenu::new(database, field)))
    }

    /// Add a playlist browser
    pub fn add_playlist(&mut self, parent: Option<MenuId>) -> MenuId {
        self.add(parent, MenuKind::Playlist(PlaylistMenu::new()))
    }

    /// Route up/down on a now-playing menu to a browser
    ///
    /// Returns `false` if `playing` is not a now-playing menu or `browser`
    /// is not a playlist browser.
    pub fn set_playlist_browser(&mut self, playing: MenuId, browser: MenuId) -> bool {
        if self.playlist(browser).is_none() {
            return false;
        }
        match self.nodes.get_mut(playing.0).map(|n| &mut n.kind) {
            Some(MenuKind::Playing(menu)) => {
                menu.set_playlist_browser(browser);
                true
            }
            _ => false,
        }
    }

    /// Make `id` the active menu and draw it
    pub fn activate<L: Connection>(
        &mut self,
        id: MenuId,
        transition: Transition,
        ctx: &mut MenuContext<'_, L>,
    ) -> bool {
        let Some(node) = self.nodes.get(id.0) else {
            warn!("menu: activate unknown id={}", id.0);
            return false;
        };
        debug!(
            "menu: switch to={} kind={} transition={:?}",
            id.0,
            node.kind.name(),
            transition
        );
        self.active = Some(id);
        self.draw(id, transition, ctx);
        true
    }

    /// Redraw the active menu in place
    pub fn redraw<L: Connection>(&mut self, ctx: &mut MenuContext<'_, L>) {
        if let Some(id) = self.active {
            self.draw(id, Transition::Constant, ctx);
        }
    }

    /// Hand a command to the active menu
    ///
    /// Unhandled commands are not retried on the parent.
    pub fn dispatch<L: Connection>(
        &mut self,
        cmd: Command,
        ctx: &mut MenuContext<'_, L>,
    ) -> Outcome {
        let Some(id) = self.active else {
            return Outcome::Unhandled;
        };
        let Some(node) = self.nodes.get_mut(id.0) else {
            return Outcome::Unhandled;
        };
        let parent = node.parent;
        let reply = node.kind.command(cmd, parent.is_some(), ctx);
        debug!("menu: id={} cmd={} reply={:?}", id.0, cmd.name(), reply);

        match reply {
            Reply::Ignored => Outcome::Unhandled,
            Reply::Handled => Outcome::Handled,
            Reply::Redraw(transition) => {
                self.draw(id, transition, ctx);
                Outcome::Handled
            }
            Reply::Back => match parent {
                Some(parent) => {
                    if let Some(node) = self.nodes.get_mut(parent.0) {
                        node.kind.scroll_to_top();
                    }
                    self.activate(parent, Transition::SlideLeft, ctx);
                    Outcome::Handled
                }
                None => Outcome::Unhandled,
            },
            Reply::Forward(target, cmd) => {
                if target == id || self.nodes.get(target.0).is_none() {
                    return Outcome::Unhandled;
                }
                debug!("menu: forward from={} to={}", id.0, target.0);
                self.active = Some(target);
                self.dispatch(cmd, ctx)
            }
        }
    }

    fn draw<L: Connection>(&self, id: MenuId, transition: Transition, ctx: &mut MenuContext<'_, L>) {
        let Some(node) = self.nodes.get(id.0) else {
            return;
        };
        let canvas = ctx.display.canvas_mut();
        canvas.clear();
        node.kind.draw(
            &self.layout,
            canvas,
            ctx.session,
            ctx.database,
            &*ctx.playlists,
        );
        ctx.display.draw(transition, 0);
    }
}
