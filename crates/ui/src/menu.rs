//! MenuNavigator — the hierarchical menu state machine.
//!
//! ```text
//! Main ──select(Library)──▶ LibrarySubmenu ──select──▶ Artists/Albums/Songs/Files
//! Artists ──select(item)──▶ ArtistSongs      Albums ──select(item)──▶ AlbumSongs
//! Songs/ArtistSongs/AlbumSongs ──select(item)──▶ PlayRequest(resolved filename)
//! Files ──select(item)──▶ PlayRequest(filename, no resolution step)
//! Main ──select(Shuffle)──▶ PlayShuffleRequest      Main ──back──▶ ExitRequest
//! ```
//!
//! Every transition into a new view resets the cursor and viewport. The
//! hierarchical views clamp at the ends; the flat `Files` view wraps.

use library::index::MusicIndex;
use library::track::{Filename, Name};
use platform::input::Key;

use crate::list::{EndBehavior, ListCursor};
use crate::render::ITEMS_PER_SCREEN;

/// Entries of the main menu.
pub const MAIN_ITEMS: [&str; 3] = ["Library", "Shuffle", "Settings"];
/// Entries of the library submenu.
pub const LIBRARY_ITEMS: [&str; 4] = ["Artists", "Albums", "Songs", "Files"];

/// Message shown for the not-yet-built settings screen.
pub const SETTINGS_MESSAGE: &str = "Settings in progress";

/// Which view the navigator currently shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    /// Top-level menu
    Main,
    /// Artists / Albums / Songs / Files chooser
    LibrarySubmenu,
    /// All artists
    Artists,
    /// All albums
    Albums,
    /// All song titles (structured names only, deduplicated)
    Songs,
    /// Songs of the active artist
    ArtistSongs,
    /// Songs of the active album
    AlbumSongs,
    /// Flat listing of every `.wav` file, wraparound cursor
    Files,
}

/// What the controller should do after a key was handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuAction {
    /// Nothing beyond a re-render
    None,
    /// Cursor moved up
    Up,
    /// Cursor moved down
    Down,
    /// Backed out one level
    Back,
    /// Leave the application
    Exit,
    /// Show a short message
    Info(&'static str),
    /// Start playback of this file
    Play(Filename),
    /// Start shuffle playback of this file
    PlayShuffle(Filename),
}

/// Hierarchical menu state machine. Owns the cursor; reads the
/// [`MusicIndex`] by reference, never mutates it.
#[derive(Debug)]
pub struct MenuNavigator {
    view: ViewKind,
    list: ListCursor,
    visible: usize,
    active_artist: Option<Name>,
    active_album: Option<Name>,
}

impl MenuNavigator {
    /// Create a navigator on the main menu.
    pub fn new() -> Self {
        Self::with_visible(ITEMS_PER_SCREEN)
    }

    /// Create a navigator with a custom window size (tests).
    pub fn with_visible(visible: usize) -> Self {
        Self {
            view: ViewKind::Main,
            list: ListCursor::new(visible, EndBehavior::Clamp),
            visible,
            active_artist: None,
            active_album: None,
        }
    }

    /// Current view.
    pub fn view(&self) -> ViewKind {
        self.view
    }

    /// Cursor and viewport of the current view.
    pub fn cursor(&self) -> &ListCursor {
        &self.list
    }

    /// Number of items in the current view.
    pub fn item_count(&self, index: &MusicIndex) -> usize {
        match self.view {
            ViewKind::Main => MAIN_ITEMS.len(),
            ViewKind::LibrarySubmenu => LIBRARY_ITEMS.len(),
            ViewKind::Artists => index.artists().len(),
            ViewKind::Albums => index.albums().len(),
            ViewKind::Songs => index.songs().len(),
            ViewKind::ArtistSongs => self.active_songs(index).map_or(0, <[Name]>::len),
            ViewKind::AlbumSongs => self.active_songs(index).map_or(0, <[Name]>::len),
            ViewKind::Files => index.files().len(),
        }
    }

    /// Text of the item at `pos` in the current view.
    pub fn item<'a>(&'a self, index: &'a MusicIndex, pos: usize) -> Option<&'a str> {
        match self.view {
            ViewKind::Main => MAIN_ITEMS.get(pos).copied(),
            ViewKind::LibrarySubmenu => LIBRARY_ITEMS.get(pos).copied(),
            ViewKind::Artists => index.artists().get(pos).map(|g| g.name.as_str()),
            ViewKind::Albums => index.albums().get(pos).map(|g| g.name.as_str()),
            ViewKind::Songs => index.songs().get(pos).map(Name::as_str),
            ViewKind::ArtistSongs | ViewKind::AlbumSongs => self
                .active_songs(index)
                .and_then(|songs| songs.get(pos))
                .map(Name::as_str),
            ViewKind::Files => index.files().get(pos).map(|f| f.as_str()),
        }
    }

    /// Feed one newly pressed key through the state machine.
    ///
    /// `seed` feeds shuffle selection; the controller passes the current
    /// clock reading.
    pub fn handle_key(&mut self, key: Key, index: &MusicIndex, seed: u64) -> MenuAction {
        match key {
            Key::Previous => {
                self.list.up(self.item_count(index));
                MenuAction::Up
            }
            Key::Next => {
                self.list.down(self.item_count(index));
                MenuAction::Down
            }
            Key::Confirm => self.select(index, seed),
            Key::Back => self.go_back(),
            Key::Exit => MenuAction::Exit,
        }
    }

    /// Song list of the active artist or album.
    fn active_songs<'a>(&self, index: &'a MusicIndex) -> Option<&'a [Name]> {
        match self.view {
            ViewKind::ArtistSongs => self
                .active_artist
                .as_ref()
                .and_then(|a| index.songs_by_artist(a)),
            ViewKind::AlbumSongs => self
                .active_album
                .as_ref()
                .and_then(|a| index.songs_by_album(a)),
            _ => None,
        }
    }

    /// Enter `view`, resetting cursor and viewport.
    fn enter(&mut self, view: ViewKind) {
        let ends = if view == ViewKind::Files {
            EndBehavior::Wrap
        } else {
            EndBehavior::Clamp
        };
        self.view = view;
        self.list = ListCursor::new(self.visible, ends);
    }

    fn select(&mut self, index: &MusicIndex, seed: u64) -> MenuAction {
        let pos = self.list.cursor();
        match self.view {
            ViewKind::Main => match MAIN_ITEMS.get(pos).copied() {
                Some("Library") => {
                    self.enter(ViewKind::LibrarySubmenu);
                    MenuAction::None
                }
                Some("Shuffle") => match index.shuffle_pick(seed) {
                    Some(filename) => MenuAction::PlayShuffle(filename),
                    None => {
                        #[cfg(feature = "defmt")]
                        defmt::warn!("no songs available for shuffle play");
                        MenuAction::None
                    }
                },
                Some("Settings") => MenuAction::Info(SETTINGS_MESSAGE),
                _ => MenuAction::None,
            },
            ViewKind::LibrarySubmenu => {
                match LIBRARY_ITEMS.get(pos).copied() {
                    Some("Artists") => self.enter(ViewKind::Artists),
                    Some("Albums") => self.enter(ViewKind::Albums),
                    Some("Songs") => self.enter(ViewKind::Songs),
                    Some("Files") => self.enter(ViewKind::Files),
                    _ => {}
                }
                MenuAction::None
            }
            ViewKind::Artists => {
                if let Some(group) = index.artists().get(pos) {
                    self.active_artist = Some(group.name.clone());
                    self.enter(ViewKind::ArtistSongs);
                }
                MenuAction::None
            }
            ViewKind::Albums => {
                if let Some(group) = index.albums().get(pos) {
                    self.active_album = Some(group.name.clone());
                    self.enter(ViewKind::AlbumSongs);
                }
                MenuAction::None
            }
            ViewKind::Songs | ViewKind::ArtistSongs | ViewKind::AlbumSongs => {
                let Some(title) = self.item(index, pos) else {
                    return MenuAction::None;
                };
                match index.resolve_filename(title) {
                    Some(filename) => MenuAction::Play(filename),
                    None => {
                        // Title with no artist/album pairing: re-render, no
                        // play request.
                        #[cfg(feature = "defmt")]
                        defmt::warn!("selected title did not resolve to a file");
                        MenuAction::None
                    }
                }
            }
            ViewKind::Files => match index.files().get(pos) {
                Some(filename) => MenuAction::Play(filename.clone()),
                None => MenuAction::None,
            },
        }
    }

    fn go_back(&mut self) -> MenuAction {
        match self.view {
            ViewKind::Main => MenuAction::Exit,
            ViewKind::LibrarySubmenu => {
                self.enter(ViewKind::Main);
                MenuAction::Back
            }
            ViewKind::Artists | ViewKind::Albums | ViewKind::Songs | ViewKind::Files => {
                self.enter(ViewKind::LibrarySubmenu);
                MenuAction::Back
            }
            ViewKind::ArtistSongs => {
                self.active_artist = None;
                self.enter(ViewKind::Artists);
                MenuAction::Back
            }
            ViewKind::AlbumSongs => {
                self.active_album = None;
                self.enter(ViewKind::Albums);
                MenuAction::Back
            }
        }
    }
}

impl Default for MenuNavigator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use platform::mocks::MockStorage;

    async fn sample_index() -> MusicIndex {
        let mut storage = MockStorage::new();
        for name in [
            "Beatles - Abbey Road - Come Together.wav",
            "Beatles - Abbey Road - Something.wav",
            "Eno - Another Green World - Becalmed.wav",
            "loose jam.wav",
        ] {
            storage.insert(&format!("music/{name}"), b"");
        }
        let mut index = MusicIndex::new();
        index.rebuild(&mut storage, "music").await;
        index
    }

    fn confirm(nav: &mut MenuNavigator, index: &MusicIndex) -> MenuAction {
        nav.handle_key(Key::Confirm, index, 0)
    }

    #[tokio::test]
    async fn test_library_path_to_artist_songs() {
        let index = sample_index().await;
        let mut nav = MenuNavigator::new();

        assert_eq!(confirm(&mut nav, &index), MenuAction::None); // Library
        assert_eq!(nav.view(), ViewKind::LibrarySubmenu);
        assert_eq!(confirm(&mut nav, &index), MenuAction::None); // Artists
        assert_eq!(nav.view(), ViewKind::Artists);
        assert_eq!(nav.item(&index, 0), Some("Beatles"));

        assert_eq!(confirm(&mut nav, &index), MenuAction::None); // Beatles
        assert_eq!(nav.view(), ViewKind::ArtistSongs);
        assert_eq!(nav.item_count(&index), 2);
        assert_eq!(nav.item(&index, 0), Some("Come Together"));
    }

    #[tokio::test]
    async fn test_select_song_emits_play_with_exact_filename() {
        let index = sample_index().await;
        let mut nav = MenuNavigator::new();
        confirm(&mut nav, &index); // Library
        confirm(&mut nav, &index); // Artists
        confirm(&mut nav, &index); // Beatles
        nav.handle_key(Key::Next, &index, 0); // -> Something

        let action = confirm(&mut nav, &index);
        let MenuAction::Play(filename) = action else {
            panic!("expected play request, got {action:?}");
        };
        assert_eq!(filename.as_str(), "Beatles - Abbey Road - Something.wav");
    }

    #[tokio::test]
    async fn test_entering_a_view_resets_cursor() {
        let index = sample_index().await;
        let mut nav = MenuNavigator::new();
        nav.handle_key(Key::Next, &index, 0);
        assert_eq!(nav.cursor().cursor(), 1);
        nav.handle_key(Key::Previous, &index, 0);
        confirm(&mut nav, &index); // Library
        assert_eq!(nav.cursor().cursor(), 0);
    }

    #[tokio::test]
    async fn test_back_walks_to_main_and_then_exits() {
        let index = sample_index().await;
        let mut nav = MenuNavigator::new();
        confirm(&mut nav, &index); // Library
        confirm(&mut nav, &index); // Artists
        confirm(&mut nav, &index); // Beatles -> ArtistSongs

        assert_eq!(nav.handle_key(Key::Back, &index, 0), MenuAction::Back);
        assert_eq!(nav.view(), ViewKind::Artists);
        assert_eq!(nav.handle_key(Key::Back, &index, 0), MenuAction::Back);
        assert_eq!(nav.view(), ViewKind::LibrarySubmenu);
        assert_eq!(nav.handle_key(Key::Back, &index, 0), MenuAction::Back);
        assert_eq!(nav.view(), ViewKind::Main);
        assert_eq!(nav.handle_key(Key::Back, &index, 0), MenuAction::Exit);
    }

    #[tokio::test]
    async fn test_shuffle_emits_play_shuffle() {
        let index = sample_index().await;
        let mut nav = MenuNavigator::new();
        nav.handle_key(Key::Next, &index, 0); // -> Shuffle
        let action = nav.handle_key(Key::Confirm, &index, 42);
        assert!(matches!(action, MenuAction::PlayShuffle(_)));
    }

    #[tokio::test]
    async fn test_shuffle_with_empty_index_is_noop() {
        let index = MusicIndex::new();
        let mut nav = MenuNavigator::new();
        nav.handle_key(Key::Next, &index, 0);
        assert_eq!(nav.handle_key(Key::Confirm, &index, 42), MenuAction::None);
    }

    #[tokio::test]
    async fn test_settings_emits_info() {
        let index = sample_index().await;
        let mut nav = MenuNavigator::new();
        nav.handle_key(Key::Next, &index, 0);
        nav.handle_key(Key::Next, &index, 0); // -> Settings
        assert_eq!(
            nav.handle_key(Key::Confirm, &index, 0),
            MenuAction::Info(SETTINGS_MESSAGE)
        );
    }

    #[tokio::test]
    async fn test_files_view_lists_unstructured_names() {
        let index = sample_index().await;
        let mut nav = MenuNavigator::new();
        confirm(&mut nav, &index); // Library
        for _ in 0..3 {
            nav.handle_key(Key::Next, &index, 0);
        }
        confirm(&mut nav, &index); // Files
        assert_eq!(nav.view(), ViewKind::Files);
        assert_eq!(nav.item_count(&index), 4);

        // Wraparound: one up from the top lands on the last file.
        nav.handle_key(Key::Previous, &index, 0);
        assert_eq!(nav.item(&index, nav.cursor().cursor()), Some("loose jam.wav"));

        let action = confirm(&mut nav, &index);
        assert_eq!(
            action,
            MenuAction::Play({
                let mut f = Filename::new();
                f.push_str("loose jam.wav").unwrap();
                f
            })
        );
    }

    #[tokio::test]
    async fn test_select_on_empty_song_list_is_noop() {
        let index = MusicIndex::new();
        let mut nav = MenuNavigator::new();
        confirm(&mut nav, &index); // Library
        nav.handle_key(Key::Next, &index, 0);
        nav.handle_key(Key::Next, &index, 0); // -> Songs
        confirm(&mut nav, &index);
        assert_eq!(nav.view(), ViewKind::Songs);
        assert_eq!(confirm(&mut nav, &index), MenuAction::None);
    }

    #[tokio::test]
    async fn test_exit_key_exits_from_any_view() {
        let index = sample_index().await;
        let mut nav = MenuNavigator::new();
        confirm(&mut nav, &index); // Library
        assert_eq!(nav.handle_key(Key::Exit, &index, 0), MenuAction::Exit);
    }
}
