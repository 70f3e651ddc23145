//! Mock implementations for testing
//!
//! This module provides mock implementations of all platform traits for use
//! in unit and integration tests. Everything is deterministic: the clock
//! only moves when told to (or by a fixed step per query), and input is a
//! pre-scripted sequence of poll frames.

#![cfg(any(test, feature = "std"))]
#![allow(clippy::unwrap_used)]

use core::cell::Cell;
use std::collections::{BTreeMap, VecDeque};

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

use crate::audio::{AudioConfig, AudioOutput};
use crate::beeper::{Note, ToneFeedback};
use crate::clock::Clock;
use crate::display::DisplaySurface;
use crate::input::{InputDevice, Key, KeySet};
use crate::storage::{DirListing, File, Storage};

/// Mock display implementation
pub struct MockDisplay {
    width: u32,
    height: u32,
    flush_count: usize,
    pixels_drawn: usize,
}

impl MockDisplay {
    /// Create new mock display
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            flush_count: 0,
            pixels_drawn: 0,
        }
    }

    /// Number of completed flushes
    pub fn flush_count(&self) -> usize {
        self.flush_count
    }

    /// Total pixels received through `draw_iter`
    pub fn pixels_drawn(&self) -> usize {
        self.pixels_drawn
    }
}

impl DrawTarget for MockDisplay {
    type Color = Rgb565;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        self.pixels_drawn += pixels.into_iter().count();
        Ok(())
    }
}

impl OriginDimensions for MockDisplay {
    fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

impl DisplaySurface for MockDisplay {
    type FlushError = core::convert::Infallible;

    async fn flush(&mut self) -> Result<(), Self::FlushError> {
        self.flush_count += 1;
        Ok(())
    }
}

/// Mock input device — a scripted sequence of poll frames.
///
/// Each call to `poll_new_keys` consumes one frame; an exhausted script
/// yields empty frames. `wait_key` skips empty frames; an exhausted script
/// returns [`Key::Exit`] so a test with a wrong script terminates instead of
/// hanging.
pub struct MockInput {
    frames: VecDeque<KeySet>,
}

impl MockInput {
    /// Create new mock input with an empty script
    pub fn new() -> Self {
        Self {
            frames: VecDeque::new(),
        }
    }

    /// Append a frame containing a single key press
    pub fn push_key(&mut self, key: Key) {
        let mut frame = KeySet::new();
        frame.push(key).unwrap();
        self.frames.push_back(frame);
    }

    /// Append `n` frames with no key presses
    pub fn push_idle_frames(&mut self, n: usize) {
        for _ in 0..n {
            self.frames.push_back(KeySet::new());
        }
    }
}

impl Default for MockInput {
    fn default() -> Self {
        Self::new()
    }
}

impl InputDevice for MockInput {
    fn poll_new_keys(&mut self) -> KeySet {
        self.frames.pop_front().unwrap_or_default()
    }

    async fn wait_key(&mut self) -> Key {
        while let Some(frame) = self.frames.pop_front() {
            if let Some(key) = frame.first() {
                return *key;
            }
        }
        Key::Exit
    }
}

/// Mock audio output peripheral
pub struct MockAudio {
    config: Option<AudioConfig>,
    fail_configure: bool,
    samples_written: usize,
    release_count: usize,
}

impl MockAudio {
    /// Create new mock audio output
    pub fn new() -> Self {
        Self {
            config: None,
            fail_configure: false,
            samples_written: 0,
            release_count: 0,
        }
    }

    /// Make every subsequent `configure` call fail
    pub fn reject_configuration(&mut self) {
        self.fail_configure = true;
    }

    /// The configuration from the most recent `configure` call
    pub fn config(&self) -> Option<AudioConfig> {
        self.config
    }

    /// Total samples accepted through `write`
    pub fn samples_written(&self) -> usize {
        self.samples_written
    }

    /// Number of `release` calls observed
    pub fn release_count(&self) -> usize {
        self.release_count
    }
}

impl Default for MockAudio {
    fn default() -> Self {
        Self::new()
    }
}

/// Error from [`MockAudio::configure`] when configured to reject.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockAudioError;

impl AudioOutput for MockAudio {
    type Error = MockAudioError;

    async fn configure(&mut self, config: AudioConfig) -> Result<(), Self::Error> {
        if self.fail_configure {
            return Err(MockAudioError);
        }
        self.config = Some(config);
        Ok(())
    }

    async fn write(&mut self, samples: &[i16]) -> Result<(), Self::Error> {
        self.samples_written += samples.len();
        Ok(())
    }

    async fn release(&mut self) {
        self.release_count += 1;
    }
}

/// Mock monotonic clock.
///
/// `now_ms` returns the current value and then advances it by `step_ms`, so
/// a loop that queries the clock once per iteration sees time move at a
/// fixed simulated rate.
pub struct MockClock {
    now: Cell<u64>,
    step_ms: Cell<u64>,
}

impl MockClock {
    /// Create a clock frozen at zero
    pub fn new() -> Self {
        Self {
            now: Cell::new(0),
            step_ms: Cell::new(0),
        }
    }

    /// Create a clock that advances `step_ms` per query
    pub fn with_step(step_ms: u64) -> Self {
        let clock = Self::new();
        clock.step_ms.set(step_ms);
        clock
    }

    /// Move the clock forward by `ms`
    pub fn advance(&self, ms: u64) {
        self.now.set(self.now.get() + ms);
    }
}

impl Default for MockClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MockClock {
    fn now_ms(&self) -> u64 {
        let now = self.now.get();
        self.now.set(now + self.step_ms.get());
        now
    }
}

/// Mock tone feedback generator
pub struct MockBeeper {
    sequences_played: usize,
    last_volume: u8,
}

impl MockBeeper {
    /// Create new mock beeper
    pub fn new() -> Self {
        Self {
            sequences_played: 0,
            last_volume: 0,
        }
    }

    /// Number of sequences played
    pub fn sequences_played(&self) -> usize {
        self.sequences_played
    }

    /// Volume of the most recent sequence
    pub fn last_volume(&self) -> u8 {
        self.last_volume
    }
}

impl Default for MockBeeper {
    fn default() -> Self {
        Self::new()
    }
}

impl ToneFeedback for MockBeeper {
    fn play(&mut self, _notes: &[Note], _note_ms: u32, volume: u8) {
        self.sequences_played += 1;
        self.last_volume = volume;
    }
}

/// Error type for [`MockStorage`] operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockStorageError {
    /// The media is configured as unavailable (mount failure).
    Unavailable,
    /// No file exists at the requested path.
    NotFound,
}

/// In-memory file for [`MockStorage`]
pub struct MockFile {
    data: Vec<u8>,
    pos: usize,
}

impl File for MockFile {
    type Error = MockStorageError;

    async fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        let remaining = self.data.len().saturating_sub(self.pos);
        let n = remaining.min(buf.len());
        buf[..n].copy_from_slice(&self.data[self.pos..self.pos + n]);
        self.pos += n;
        Ok(n)
    }

    async fn seek(&mut self, pos: u64) -> Result<u64, Self::Error> {
        #[allow(clippy::cast_possible_truncation)]
        let pos = (pos as usize).min(self.data.len());
        self.pos = pos;
        Ok(pos as u64)
    }

    fn size(&self) -> u64 {
        self.data.len() as u64
    }
}

/// In-memory mock storage — a flat map of full paths to file contents.
pub struct MockStorage {
    files: BTreeMap<String, Vec<u8>>,
    unavailable: bool,
    mounted: bool,
    unmount_count: usize,
}

impl MockStorage {
    /// Create empty mock storage
    pub fn new() -> Self {
        Self {
            files: BTreeMap::new(),
            unavailable: false,
            mounted: false,
            unmount_count: 0,
        }
    }

    /// Add a file at `path` (e.g. `"music/a.wav"`)
    pub fn insert(&mut self, path: &str, data: &[u8]) {
        self.files.insert(path.to_owned(), data.to_vec());
    }

    /// Make `mount` fail, simulating absent media
    pub fn make_unavailable(&mut self) {
        self.unavailable = true;
    }

    /// Whether the media is currently mounted
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Number of `unmount` calls observed
    pub fn unmount_count(&self) -> usize {
        self.unmount_count
    }
}

impl Default for MockStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl Storage for MockStorage {
    type Error = MockStorageError;
    type File = MockFile;

    async fn mount(&mut self) -> Result<(), Self::Error> {
        if self.unavailable {
            return Err(MockStorageError::Unavailable);
        }
        self.mounted = true;
        Ok(())
    }

    async fn unmount(&mut self) {
        self.mounted = false;
        self.unmount_count += 1;
    }

    async fn open_file(&mut self, path: &str) -> Result<Self::File, Self::Error> {
        self.files
            .get(path)
            .map(|data| MockFile {
                data: data.clone(),
                pos: 0,
            })
            .ok_or(MockStorageError::NotFound)
    }

    async fn list_dir(&mut self, path: &str) -> Result<DirListing, Self::Error> {
        if self.unavailable {
            return Err(MockStorageError::Unavailable);
        }
        let mut listing = DirListing::new();
        let prefix = format!("{path}/");
        for name in self.files.keys() {
            let Some(rest) = name.strip_prefix(&prefix) else {
                continue;
            };
            if rest.contains('/') {
                continue; // nested entry, listing is flat
            }
            let mut buf = heapless::String::new();
            if buf.push_str(rest).is_err() {
                continue;
            }
            if listing.push(buf).is_err() {
                break;
            }
        }
        Ok(listing)
    }
}
