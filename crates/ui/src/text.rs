//! Bounded text building for screen lines and error messages.

use core::fmt;

/// A `fmt::Write` sink that silently clips at `N` bytes instead of failing.
///
/// Screen lines and on-screen error messages have a fixed character budget;
/// formatting into this type can never error, it just stops keeping text.
/// [`clipped`](Self::clipped) reports whether anything was dropped so the
/// caller can append an ellipsis.
#[derive(Debug, Default)]
pub struct ClippedString<const N: usize> {
    buf: heapless::String<N>,
    clipped: bool,
}

impl<const N: usize> ClippedString<N> {
    /// Create an empty buffer.
    pub fn new() -> Self {
        Self {
            buf: heapless::String::new(),
            clipped: false,
        }
    }

    /// The text kept so far.
    pub fn as_str(&self) -> &str {
        self.buf.as_str()
    }

    /// Whether any input was dropped.
    pub fn clipped(&self) -> bool {
        self.clipped
    }

    /// Replace the tail with `"..."` when the input was clipped.
    pub fn ellipsize(&mut self) {
        if !self.clipped {
            return;
        }
        while self.buf.len() + 3 > N {
            if self.buf.pop().is_none() {
                break;
            }
        }
        let _ = self.buf.push_str("...");
    }
}

impl<const N: usize> fmt::Write for ClippedString<N> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for c in s.chars() {
            if self.buf.push(c).is_err() {
                self.clipped = true;
                break;
            }
        }
        Ok(())
    }
}
