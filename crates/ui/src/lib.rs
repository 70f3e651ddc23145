//! Application UI layer — list scrolling, menu navigation, screen rendering.
//!
//! This crate holds no hardware state: navigation mutates [`menu::MenuNavigator`],
//! and the render functions in [`render`] draw onto any
//! `DrawTarget<Color = Rgb565>` supplied by the caller.

#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]
#![deny(clippy::expect_used)]

pub mod list;
pub mod menu;
pub mod now_playing;
pub mod render;
pub mod text;

pub use list::{EndBehavior, ListCursor};
pub use menu::{MenuAction, MenuNavigator, ViewKind};
pub use now_playing::NowPlayingScreen;
pub use text::ClippedString;
