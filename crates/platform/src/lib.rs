//! Hardware Abstraction Layer for the PocketWav handheld player.
//!
//! This crate provides trait-based abstractions for every peripheral the
//! player touches, enabling development and testing without physical
//! hardware.
//!
//! # Architecture Layers
//!
//! ```text
//! Application Layer (app crate)
//!         ↓
//! Feature Layers (playback, ui, library)
//!         ↓
//! Platform HAL (this crate - trait abstractions)
//!         ↓
//! Hardware Layer (board support crate, not part of this workspace)
//! ```
//!
//! # Peripherals
//!
//! - [`DisplaySurface`] - LCD framebuffer (draw + flush)
//! - [`InputDevice`] - keyboard key-edge polling
//! - [`AudioOutput`] - I²S-style PCM sink with blocking-complete writes
//! - [`Storage`] - removable-media file system access
//! - [`ToneFeedback`] - short UI feedback tones
//! - [`Clock`] - monotonic millisecond time source
//!
//! # Concurrency model
//!
//! All I/O traits are `async`, but the system runs on a single cooperative
//! thread with no executor-level parallelism. The only suspension point that
//! matters for timing is [`AudioOutput::write`], which completes when the
//! peripheral has accepted the chunk — that await paces the playback loop to
//! real time.
//!
//! # Features
//!
//! - `std`: host-side backends (local filesystem storage, mocks)
//! - `defmt`: enable defmt derives on platform types (hardware builds)

#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![allow(async_fn_in_trait)] // single-threaded cooperative target, Send bounds not needed
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]

pub mod audio;
pub mod beeper;
pub mod clock;
pub mod config;
pub mod display;
pub mod input;
pub mod storage;

#[cfg(any(test, feature = "std"))]
pub mod mocks;
#[cfg(feature = "std")]
pub mod storage_local;

// Re-export main high-level traits
pub use audio::{AudioConfig, AudioOutput};
pub use beeper::{Note, ToneFeedback};
pub use clock::Clock;
pub use config::{Config, Palette};
pub use display::DisplaySurface;
pub use input::{InputDevice, Key, KeySet};
pub use storage::{DirListing, File, Storage};
