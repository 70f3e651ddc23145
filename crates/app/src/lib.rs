//! Top-level application: owns every peripheral, runs the one cooperative
//! loop that alternates between menu navigation and track playback.

#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]
#![deny(clippy::expect_used)]

pub mod controller;
pub mod feedback;

pub use controller::AppController;
