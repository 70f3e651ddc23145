//! The chunk pump: storage → sample conversion → audio peripheral.

use core::fmt::Write as _;

use library::track::TrackName;
use library::wav::{self, HeaderReadError, StreamDescriptor};
use platform::audio::{AudioConfig, AudioOutput};
use platform::clock::Clock;
use platform::config::Palette;
use platform::display::DisplaySurface;
use platform::input::InputDevice;
use platform::storage::{File, Storage};
use ui::now_playing::NowPlayingScreen;
use ui::render;

/// PCM bytes read per pump iteration.
pub const CHUNK_BYTES: usize = 1024;
/// Samples per full chunk (16-bit mono).
pub const SAMPLES_PER_CHUNK: usize = CHUNK_BYTES / 2;
/// Minimum interval between now-playing redraws.
pub const DISPLAY_REFRESH_MS: u64 = 1000;

/// Why a track did not play to the end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PlaybackError {
    /// The file could not be opened.
    NotFound,
    /// The file is not a playable WAV.
    MalformedHeader,
    /// The audio peripheral rejected the stream configuration.
    OutputConfig,
    /// Storage or peripheral failure mid-stream.
    Io,
}

impl core::fmt::Display for PlaybackError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::NotFound => write!(f, "file not found"),
            Self::MalformedHeader => write!(f, "not a playable WAV file"),
            Self::OutputConfig => write!(f, "audio output rejected configuration"),
            Self::Io => write!(f, "I/O failure during playback"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for PlaybackError {}

/// How a playback attempt ended.
///
/// Errors are part of the outcome, not propagated: the controller shows
/// them and returns to the menu, it never tears down over a bad file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackOutcome {
    /// The data chunk was pumped to the end.
    Completed,
    /// A key press stopped playback.
    Interrupted,
    /// Playback could not start or died mid-stream.
    Failed(PlaybackError),
}

/// Plays one track at a time over borrowed peripherals.
///
/// Borrows everything for the duration of one `play` call; the controller
/// keeps ownership and regains exclusive use between tracks. Once the
/// stream starts, the audio peripheral is released on every exit path.
pub struct PlaybackEngine<'a, S, A, D, I, C> {
    storage: &'a mut S,
    audio: &'a mut A,
    display: &'a mut D,
    input: &'a mut I,
    clock: &'a C,
    palette: &'a Palette,
}

impl<'a, S, A, D, I, C> PlaybackEngine<'a, S, A, D, I, C>
where
    S: Storage,
    A: AudioOutput,
    D: DisplaySurface,
    I: InputDevice,
    C: Clock,
{
    /// Borrow the peripherals for one play session.
    pub fn new(
        storage: &'a mut S,
        audio: &'a mut A,
        display: &'a mut D,
        input: &'a mut I,
        clock: &'a C,
        palette: &'a Palette,
    ) -> Self {
        Self {
            storage,
            audio,
            display,
            input,
            clock,
            palette,
        }
    }

    /// Play `filename` from `dir` start to finish, key press, or failure.
    pub async fn play(&mut self, filename: &str, dir: &str) -> PlaybackOutcome {
        let mut path: heapless::String<160> = heapless::String::new();
        if write!(path, "{dir}/{filename}").is_err() {
            return PlaybackOutcome::Failed(PlaybackError::NotFound);
        }

        let mut file = match self.storage.open_file(path.as_str()).await {
            Ok(file) => file,
            Err(_e) => {
                #[cfg(feature = "defmt")]
                defmt::warn!("could not open track for playback");
                return PlaybackOutcome::Failed(PlaybackError::NotFound);
            }
        };

        let descriptor = match wav::read_descriptor(&mut file).await {
            Ok(descriptor) => descriptor,
            Err(HeaderReadError::Format(_)) => {
                return PlaybackOutcome::Failed(PlaybackError::MalformedHeader);
            }
            Err(HeaderReadError::Storage(_)) => {
                return PlaybackOutcome::Failed(PlaybackError::Io);
            }
        };

        let track = TrackName::parse(filename);
        let outcome = self.run_stream(&mut file, &descriptor, track).await;
        // The peripheral must come back regardless of how the stream ended.
        self.audio.release().await;
        outcome
    }

    async fn run_stream(
        &mut self,
        file: &mut S::File,
        descriptor: &StreamDescriptor,
        track: TrackName,
    ) -> PlaybackOutcome {
        let config = AudioConfig {
            sample_rate: descriptor.sample_rate_hz,
            channels: descriptor.channels,
            bit_depth: descriptor.bits_per_sample,
        };
        if self.audio.configure(config).await.is_err() {
            return PlaybackOutcome::Failed(PlaybackError::OutputConfig);
        }
        if file.seek(u64::from(descriptor.data_offset)).await.is_err() {
            return PlaybackOutcome::Failed(PlaybackError::Io);
        }

        let mut screen = NowPlayingScreen::new(
            track,
            descriptor.total_data_bytes,
            descriptor.duration_secs(),
        );
        self.refresh_screen(&screen).await;

        // Presses from before playback started must not stop it.
        let _ = self.input.poll_new_keys();

        let started = self.clock.now_ms();
        let mut last_draw = started;
        let mut buf = [0u8; CHUNK_BYTES];
        let mut samples = [0i16; SAMPLES_PER_CHUNK];

        loop {
            #[allow(clippy::cast_possible_truncation)]
            let remaining = descriptor
                .total_data_bytes
                .saturating_sub(screen.bytes_consumed) as usize;
            if remaining == 0 {
                return PlaybackOutcome::Completed;
            }
            let want = remaining.min(CHUNK_BYTES);
            let n = match file.read(&mut buf[..want]).await {
                Ok(n) => n,
                Err(_e) => return PlaybackOutcome::Failed(PlaybackError::Io),
            };
            if n == 0 {
                // File shorter than its header claimed; treat as the end.
                return PlaybackOutcome::Completed;
            }

            // A trailing odd byte cannot form a sample and is dropped.
            let count = n / 2;
            for (sample, pair) in samples[..count].iter_mut().zip(buf.chunks_exact(2)) {
                *sample = i16::from_le_bytes([pair[0], pair[1]]);
            }
            // Completes only when the peripheral has taken the data; this
            // is what paces the loop.
            if self.audio.write(&samples[..count]).await.is_err() {
                return PlaybackOutcome::Failed(PlaybackError::Io);
            }

            #[allow(clippy::cast_possible_truncation)]
            {
                screen.bytes_consumed = screen.bytes_consumed.saturating_add(n as u32);
            }
            let now = self.clock.now_ms();
            #[allow(clippy::cast_possible_truncation)]
            {
                screen.position_secs = ((now.saturating_sub(started)) / 1000) as u32;
            }
            if now.saturating_sub(last_draw) >= DISPLAY_REFRESH_MS {
                self.refresh_screen(&screen).await;
                last_draw = now;
            }

            if !self.input.poll_new_keys().is_empty() {
                return PlaybackOutcome::Interrupted;
            }
        }
    }

    /// Redraw and flush the now-playing screen. Display failures are
    /// logged and swallowed; audio keeps going on a broken panel.
    async fn refresh_screen(&mut self, screen: &NowPlayingScreen) {
        match render::draw_now_playing(self.display, screen, self.palette) {
            Ok(()) => {
                let _ = self.display.flush().await;
            }
            Err(_e) => {
                #[cfg(feature = "defmt")]
                defmt::warn!("now-playing draw failed");
            }
        }
    }
}
