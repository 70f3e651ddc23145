//! Input device abstraction

/// The set of keys reported by one poll (keys newly pressed since the
/// previous poll — key-edge semantics, no repeats while held).
pub type KeySet = heapless::Vec<Key, 8>;

/// Input device trait for the keyboard matrix.
pub trait InputDevice {
    /// Return every key newly pressed since the previous poll (non-blocking).
    fn poll_new_keys(&mut self) -> KeySet;

    /// Wait for the next newly pressed key (async, power-efficient).
    fn wait_key(&mut self) -> impl core::future::Future<Output = Key>;
}

/// Semantic keys of the handheld keyboard.
///
/// The keyboard driver maps its physical matrix to these five; everything
/// else is dropped before it reaches the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Key {
    /// Cursor up / previous item
    Previous,
    /// Cursor down / next item
    Next,
    /// Select / play
    Confirm,
    /// Back out of the current view
    Back,
    /// Global exit (leave the application)
    Exit,
}
