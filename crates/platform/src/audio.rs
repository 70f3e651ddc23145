//! Audio output abstraction

/// Audio output trait — an I²S-style PCM sink.
pub trait AudioOutput {
    /// Error type
    type Error: core::fmt::Debug;

    /// Configure the peripheral for a stream. Must be called before
    /// [`write`](Self::write); may be called again after
    /// [`release`](Self::release).
    fn configure(
        &mut self,
        config: AudioConfig,
    ) -> impl core::future::Future<Output = Result<(), Self::Error>>;

    /// Write PCM samples.
    ///
    /// The returned future completes only once the peripheral has accepted
    /// the data. On a correctly sized hardware buffer this paces the caller
    /// to real time — callers must not wrap this in their own rate limiting.
    fn write(
        &mut self,
        samples: &[i16],
    ) -> impl core::future::Future<Output = Result<(), Self::Error>>;

    /// Release the peripheral. Idempotent; called on every playback exit
    /// path, including errors.
    fn release(&mut self) -> impl core::future::Future<Output = ()>;
}

/// Audio stream configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AudioConfig {
    /// Sample rate in Hz
    pub sample_rate: u32,
    /// Number of channels (1 = mono, 2 = stereo)
    pub channels: u8,
    /// Bit depth (16 or 24)
    pub bit_depth: u8,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            sample_rate: 44_100,
            channels: 1,
            bit_depth: 16,
        }
    }
}
