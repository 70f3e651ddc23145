//! Application configuration and constants
//!
//! Central configuration values used across the application. All branding,
//! palette and directory naming should reference these rather than
//! hardcoding values.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

/// The application name
pub const APP_NAME: &str = "PocketWav";

/// Application version (synchronized with Cargo.toml)
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Directory on the removable media that holds the WAV library.
pub const MUSIC_DIR: &str = "music";

/// UI color palette, loaded from the configuration store at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Screen background
    pub background: Rgb565,
    /// Regular text
    pub text: Rgb565,
    /// Highlighted (cursor) text
    pub highlight: Rgb565,
    /// Progress bar track and scrollbar
    pub bar_track: Rgb565,
    /// Progress bar fill
    pub bar_fill: Rgb565,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Rgb565::BLACK,
            text: Rgb565::CSS_LIGHT_GRAY,
            highlight: Rgb565::WHITE,
            bar_track: Rgb565::CSS_DIM_GRAY,
            bar_fill: Rgb565::CSS_DODGER_BLUE,
        }
    }
}

/// User-facing settings, passed by reference into the controller at
/// construction. No ambient/global state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Color palette
    pub palette: Palette,
    /// Whether key presses produce feedback tones
    pub ui_sound: bool,
    /// Feedback tone volume (0-10)
    pub volume: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            palette: Palette::default(),
            ui_sound: true,
            volume: 5,
        }
    }
}
