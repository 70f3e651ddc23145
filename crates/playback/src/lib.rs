//! Playback engine — pumps PCM from storage to the audio peripheral.
//!
//! One cooperative loop per track: read a chunk, hand it to the audio
//! output, refresh the screen once a second, bail on any key press. The
//! blocking audio write is the only pacing mechanism; there are no timers.

#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]
#![deny(clippy::expect_used)]

pub mod engine;

pub use engine::{PlaybackEngine, PlaybackError, PlaybackOutcome};
