//! MusicIndex — in-memory grouped catalogue of the music directory.
//!
//! Rebuilt wholesale on every scan; there are no incremental updates and no
//! on-disk cache. All collections are fixed-capacity: on hardware the whole
//! index is a few hundred KB and lives in a static, never on a task stack.
//! Inserts past capacity are silently dropped (bounded-buffer contract).

use heapless::Vec;

use platform::storage::Storage;

use crate::track::{Filename, Name, TrackName, has_wav_extension};

/// Maximum files in the flat listing.
pub const MAX_FILES: usize = 128;
/// Maximum distinct song titles.
pub const MAX_SONGS: usize = 128;
/// Maximum distinct artists / albums.
pub const MAX_GROUPS: usize = 32;
/// Maximum song titles per artist or album.
pub const MAX_GROUP_SONGS: usize = 32;

/// One artist or album with its song titles.
///
/// Song titles within a group are NOT deduplicated: two files that share a
/// title under one artist produce two entries. The flat title set does
/// deduplicate; resolution always returns the first match. Accepted
/// ambiguity, kept from the source behavior.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupEntry {
    /// Artist or album name
    pub name: Name,
    /// Song titles in this group, sorted after a rebuild
    pub songs: Vec<Name, MAX_GROUP_SONGS>,
}

/// The music catalogue. Owned by the application controller; feature crates
/// see it as `&MusicIndex`.
#[derive(Debug, Default)]
pub struct MusicIndex {
    files: Vec<Filename, MAX_FILES>,
    artists: Vec<GroupEntry, MAX_GROUPS>,
    albums: Vec<GroupEntry, MAX_GROUPS>,
    songs: Vec<Name, MAX_SONGS>,
}

impl MusicIndex {
    /// Create an empty index.
    pub const fn new() -> Self {
        Self {
            files: Vec::new(),
            artists: Vec::new(),
            albums: Vec::new(),
            songs: Vec::new(),
        }
    }

    /// Rebuild the whole index from the contents of `dir`.
    ///
    /// Keeps entries with a case-insensitive `.wav` suffix. Three-part names
    /// populate the artist/album/title groupings; every kept file appears in
    /// the flat listing. All lists are sorted by codepoint afterwards.
    ///
    /// An unreadable directory degrades to an empty index — the error never
    /// propagates past this boundary.
    pub async fn rebuild<S: Storage>(&mut self, storage: &mut S, dir: &str) {
        self.clear();

        let listing = match storage.list_dir(dir).await {
            Ok(listing) => listing,
            Err(_e) => {
                #[cfg(feature = "defmt")]
                defmt::warn!("music directory unreadable, index left empty");
                return;
            }
        };

        for filename in &listing {
            if !has_wav_extension(filename) {
                continue;
            }
            let _ = self.files.push(filename.clone());

            if let TrackName::Structured {
                artist,
                album,
                song,
            } = TrackName::parse(filename)
            {
                group_insert(&mut self.artists, &artist, &song);
                group_insert(&mut self.albums, &album, &song);
                if !self.songs.iter().any(|s| s == &song) {
                    let _ = self.songs.push(song);
                }
            }
        }

        self.files.sort_unstable();
        self.songs.sort_unstable();
        self.artists.sort_unstable_by(|a, b| a.name.cmp(&b.name));
        self.albums.sort_unstable_by(|a, b| a.name.cmp(&b.name));
        for group in self.artists.iter_mut().chain(self.albums.iter_mut()) {
            group.songs.sort_unstable();
        }
    }

    /// Remove everything.
    pub fn clear(&mut self) {
        self.files.clear();
        self.artists.clear();
        self.albums.clear();
        self.songs.clear();
    }

    /// Flat listing of every indexed `.wav` filename, sorted.
    pub fn files(&self) -> &[Filename] {
        &self.files
    }

    /// All artists, sorted by name.
    pub fn artists(&self) -> &[GroupEntry] {
        &self.artists
    }

    /// All albums, sorted by name.
    pub fn albums(&self) -> &[GroupEntry] {
        &self.albums
    }

    /// Deduplicated song titles from structured names, sorted.
    pub fn songs(&self) -> &[Name] {
        &self.songs
    }

    /// Song titles for one artist, or `None` for an unknown artist.
    pub fn songs_by_artist(&self, artist: &str) -> Option<&[Name]> {
        self.artists
            .iter()
            .find(|g| g.name.as_str() == artist)
            .map(|g| g.songs.as_slice())
    }

    /// Song titles for one album, or `None` for an unknown album.
    pub fn songs_by_album(&self, album: &str) -> Option<&[Name]> {
        self.albums
            .iter()
            .find(|g| g.name.as_str() == album)
            .map(|g| g.songs.as_slice())
    }

    /// Map a bare song title back to its full filename.
    ///
    /// Scans the artist groups, then the album groups, for the first entry
    /// containing `song` and reconstructs `"{artist} - {album} - {song}.wav"`.
    /// O(songs); called on user selection only, never per frame.
    pub fn resolve_filename(&self, song: &str) -> Option<Filename> {
        use core::fmt::Write as _;

        let artist = self
            .artists
            .iter()
            .find(|g| g.songs.iter().any(|s| s.as_str() == song))?;
        let album = self
            .albums
            .iter()
            .find(|g| g.songs.iter().any(|s| s.as_str() == song))?;

        let mut out = Filename::new();
        write!(out, "{} - {} - {}.wav", artist.name, album.name, song).ok()?;
        Some(out)
    }

    /// Pick a random song for shuffle play, deterministically from `seed`.
    ///
    /// Returns the resolved filename, or `None` when the index has no
    /// structured songs or the picked title does not resolve.
    pub fn shuffle_pick(&self, seed: u64) -> Option<Filename> {
        if self.songs.is_empty() {
            return None;
        }
        #[allow(clippy::cast_possible_truncation)]
        let pos = (xorshift64star(seed) % self.songs.len() as u64) as usize;
        let song = self.songs.get(pos)?;
        self.resolve_filename(song)
    }
}

/// Find-or-create the group named `name` and append `song` to it.
///
/// Group names are deduplicated; songs within a group are not. Capacity
/// overflow drops the insert silently.
fn group_insert(groups: &mut Vec<GroupEntry, MAX_GROUPS>, name: &Name, song: &Name) {
    if let Some(group) = groups.iter_mut().find(|g| &g.name == name) {
        let _ = group.songs.push(song.clone());
        return;
    }
    let mut group = GroupEntry {
        name: name.clone(),
        songs: Vec::new(),
    };
    let _ = group.songs.push(song.clone());
    let _ = groups.push(group);
}

/// xorshift64* — tiny, seedable, good enough for shuffle play.
fn xorshift64star(seed: u64) -> u64 {
    // A zero seed would be a fixed point; nudge it.
    let mut x = seed | 1;
    x ^= x >> 12;
    x ^= x << 25;
    x ^= x >> 27;
    x.wrapping_mul(0x2545_F491_4F6C_DD1D)
}
