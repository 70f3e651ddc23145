//! Storage abstraction for removable media file systems.

/// Maximum number of entries a single directory listing can return.
///
/// Entries past this count are silently dropped (bounded-buffer contract).
pub const MAX_DIR_ENTRIES: usize = 128;

/// A directory listing: bare file names, not full paths.
pub type DirListing = heapless::Vec<heapless::String<128>, MAX_DIR_ENTRIES>;

/// Storage trait for file system access on removable media.
///
/// The media handle is exclusively owned by the application controller for
/// the process lifetime; feature crates borrow it per operation.
pub trait Storage {
    /// Error type
    type Error: core::fmt::Debug;
    /// File type
    type File: File;

    /// Mount the media. Must be called once before any other operation.
    fn mount(&mut self) -> impl core::future::Future<Output = Result<(), Self::Error>>;

    /// Unmount the media. Idempotent; called on every application exit path.
    fn unmount(&mut self) -> impl core::future::Future<Output = ()>;

    /// Open file for reading
    fn open_file(
        &mut self,
        path: &str,
    ) -> impl core::future::Future<Output = Result<Self::File, Self::Error>>;

    /// List the file names inside `path` (no recursion, files only).
    fn list_dir(
        &mut self,
        path: &str,
    ) -> impl core::future::Future<Output = Result<DirListing, Self::Error>>;
}

/// File trait for reading files
pub trait File {
    /// Error type
    type Error: core::fmt::Debug;

    /// Read from current position
    fn read(
        &mut self,
        buf: &mut [u8],
    ) -> impl core::future::Future<Output = Result<usize, Self::Error>>;

    /// Seek to position
    fn seek(&mut self, pos: u64) -> impl core::future::Future<Output = Result<u64, Self::Error>>;

    /// Get file size
    fn size(&self) -> u64;
}
