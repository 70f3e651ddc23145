//! Local filesystem Storage implementation for host-side testing.
//!
//! `LocalFileStorage` implements [`Storage`] using `std::fs`. Available when
//! the `std` feature is enabled. All paths are resolved relative to the
//! `root` provided at construction, which stands in for the media mount
//! point.

use std::fs;
use std::io::{Read, Seek, SeekFrom};
use std::path::PathBuf;

use crate::storage::{DirListing, File, Storage};

/// Error type for local filesystem operations.
#[derive(Debug)]
pub enum LocalStorageError {
    /// Underlying filesystem error.
    Io(std::io::Error),
    /// The storage root does not exist or is not a directory.
    RootMissing,
}

impl core::fmt::Display for LocalStorageError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "local storage error: {e}"),
            Self::RootMissing => write!(f, "storage root missing"),
        }
    }
}

impl std::error::Error for LocalStorageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::RootMissing => None,
        }
    }
}

/// An open file on the local filesystem.
pub struct LocalFile {
    inner: fs::File,
    size: u64,
}

impl File for LocalFile {
    type Error = LocalStorageError;

    async fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        Read::read(&mut self.inner, buf).map_err(LocalStorageError::Io)
    }

    async fn seek(&mut self, pos: u64) -> Result<u64, Self::Error> {
        Seek::seek(&mut self.inner, SeekFrom::Start(pos)).map_err(LocalStorageError::Io)
    }

    fn size(&self) -> u64 {
        self.size
    }
}

/// A [`Storage`] implementation backed by `std::fs`.
///
/// Paths passed to [`open_file`](Storage::open_file) and
/// [`list_dir`](Storage::list_dir) are resolved relative to the root given
/// at construction.
pub struct LocalFileStorage {
    root: PathBuf,
}

impl LocalFileStorage {
    /// Create a new storage rooted at `root`.
    #[must_use]
    pub fn new(root: &str) -> Self {
        Self {
            root: PathBuf::from(root),
        }
    }

    fn resolve(&self, path: &str) -> PathBuf {
        self.root.join(path)
    }
}

impl Storage for LocalFileStorage {
    type Error = LocalStorageError;
    type File = LocalFile;

    async fn mount(&mut self) -> Result<(), Self::Error> {
        if self.root.is_dir() {
            Ok(())
        } else {
            Err(LocalStorageError::RootMissing)
        }
    }

    async fn unmount(&mut self) {}

    async fn open_file(&mut self, path: &str) -> Result<Self::File, Self::Error> {
        let full = self.resolve(path);
        let file = fs::File::open(&full).map_err(LocalStorageError::Io)?;
        let meta = file.metadata().map_err(LocalStorageError::Io)?;
        Ok(LocalFile {
            inner: file,
            size: meta.len(),
        })
    }

    async fn list_dir(&mut self, path: &str) -> Result<DirListing, Self::Error> {
        let mut listing = DirListing::new();
        for entry in fs::read_dir(self.resolve(path)).map_err(LocalStorageError::Io)? {
            let entry = entry.map_err(LocalStorageError::Io)?;
            if !entry.path().is_file() {
                continue;
            }
            let name = entry.file_name();
            let Some(name) = name.to_str() else {
                continue; // non-UTF-8 names are invisible to the player
            };
            let mut buf = heapless::String::new();
            if buf.push_str(name).is_err() {
                continue; // name longer than the 128-byte budget
            }
            if listing.push(buf).is_err() {
                break; // listing full — bounded-buffer contract
            }
        }
        Ok(listing)
    }
}
