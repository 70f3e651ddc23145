//! Key-press feedback tones.
//!
//! Each key class has a fixed two- or three-note motif so navigation is
//! audible without looking at the screen. Sequences are fire-and-forget on
//! the beeper and never block the loop.

use platform::beeper::{Note, ToneFeedback, pitch};
use platform::config::Config;
use platform::input::Key;

/// Duration of each note in a feedback motif.
pub const NOTE_MS: u32 = 30;

/// Rising pair for cursor-up.
pub const UP: [Note; 2] = [pitch::G3, pitch::B3];
/// Low-high pair for cursor-down.
pub const DOWN: [Note; 2] = [pitch::D3, pitch::B3];
/// Rising-falling triple for confirm.
pub const SELECT: [Note; 3] = [pitch::G3, pitch::B3, pitch::D3];
/// Mirrored triple for back.
pub const BACK: [Note; 3] = [pitch::D3, pitch::B3, pitch::G3];

/// Play the motif for `key`, honoring the sound toggle and volume.
pub fn key_tone<B: ToneFeedback>(beeper: &mut B, config: &Config, key: Key) {
    if !config.ui_sound {
        return;
    }
    let notes: &[Note] = match key {
        Key::Previous => &UP,
        Key::Next => &DOWN,
        Key::Confirm => &SELECT,
        Key::Back => &BACK,
        Key::Exit => return,
    };
    beeper.play(notes, NOTE_MS, config.volume);
}
