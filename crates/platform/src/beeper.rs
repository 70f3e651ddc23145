//! Short-tone UI feedback abstraction

/// A single tone pitch, in Hz.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Note(pub u16);

/// Pitches used by the stock feedback sequences.
pub mod pitch {
    use super::Note;

    /// D3
    pub const D3: Note = Note(147);
    /// G3
    pub const G3: Note = Note(196);
    /// B3
    pub const B3: Note = Note(247);
}

/// Tone feedback trait — plays short note sequences for key feedback.
///
/// Fire-and-forget: the generator mixes the tone in the background and the
/// call returns immediately, so feedback never stalls the UI loop.
pub trait ToneFeedback {
    /// Play `notes` back to back, `note_ms` milliseconds each, at `volume`
    /// (0-10).
    fn play(&mut self, notes: &[Note], note_ms: u32, volume: u8);
}
