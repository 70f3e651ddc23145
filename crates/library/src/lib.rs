//! Music library management — directory scan, filename parsing, WAV headers.
//!
//! # Modules
//!
//! - [`track`] — `TrackName` parsing of the `Artist - Album - Song.wav`
//!   convention
//! - [`wav`] — fixed-offset WAV container header reader
//! - [`index`] — `MusicIndex`, the rebuilt-wholesale grouped catalogue

#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]
#![deny(clippy::expect_used)]

pub mod index;
pub mod track;
pub mod wav;

// Top-level re-exports for convenience
pub use index::{GroupEntry, MusicIndex};
pub use track::{has_wav_extension, Filename, Name, TrackName};
pub use wav::{HeaderReadError, StreamDescriptor, WavError};
