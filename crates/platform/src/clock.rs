//! Monotonic time source abstraction.
//!
//! The player takes its pacing from the blocking audio write, not from
//! timers; the clock exists only for elapsed-position display and for
//! rate-limiting screen refreshes, so a plain millisecond counter is the
//! whole contract.

/// Monotonic millisecond clock.
pub trait Clock {
    /// Milliseconds since an arbitrary fixed origin. Never goes backwards.
    fn now_ms(&self) -> u64;
}
