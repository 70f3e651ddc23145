//! Now-playing screen state — track name, progress, elapsed time.
//!
//! Pure data plus integer math; the playback engine updates it once per
//! audio chunk and [`crate::render::draw_now_playing`] turns it into pixels.

use library::track::TrackName;

/// State shown while a track is playing.
#[derive(Debug, Clone)]
pub struct NowPlayingScreen {
    /// Parsed track name, structured or raw
    pub track: TrackName,
    /// PCM bytes pumped to the audio peripheral so far
    pub bytes_consumed: u32,
    /// PCM bytes in the data chunk
    pub total_bytes: u32,
    /// Elapsed wall-clock seconds
    pub position_secs: u32,
    /// Track duration in seconds
    pub duration_secs: u32,
}

impl NowPlayingScreen {
    /// Create a screen at position zero.
    pub fn new(track: TrackName, total_bytes: u32, duration_secs: u32) -> Self {
        Self {
            track,
            bytes_consumed: 0,
            total_bytes,
            position_secs: 0,
            duration_secs,
        }
    }

    /// Filled width of a `bar_width`-pixel progress bar.
    ///
    /// Integer math only; a zero-length track reads as empty.
    pub fn bar_fill(&self, bar_width: u32) -> u32 {
        if self.total_bytes == 0 {
            return 0;
        }
        let consumed = u64::from(self.bytes_consumed.min(self.total_bytes));
        #[allow(clippy::cast_possible_truncation)]
        let fill = (consumed * u64::from(bar_width) / u64::from(self.total_bytes)) as u32;
        fill.min(bar_width)
    }
}

/// Format seconds as `mm:ss`, both fields zero-padded.
///
/// Minutes past 99 keep counting; the field just widens.
pub fn format_time(secs: u32) -> heapless::String<16> {
    use core::fmt::Write as _;

    let mut out = heapless::String::new();
    let _ = write!(out, "{:02}:{:02}", secs / 60, secs % 60);
    out
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;

    fn screen(consumed: u32, total: u32) -> NowPlayingScreen {
        let mut s = NowPlayingScreen::new(TrackName::parse("A - B - C.wav"), total, 100);
        s.bytes_consumed = consumed;
        s
    }

    #[test]
    fn test_bar_fill_proportional() {
        assert_eq!(screen(0, 1000).bar_fill(220), 0);
        assert_eq!(screen(500, 1000).bar_fill(220), 110);
        assert_eq!(screen(1000, 1000).bar_fill(220), 220);
    }

    #[test]
    fn test_bar_fill_zero_length_track() {
        assert_eq!(screen(0, 0).bar_fill(220), 0);
    }

    #[test]
    fn test_bar_fill_clamps_overshoot() {
        // Final chunk can push consumed past total on padded files.
        assert_eq!(screen(1100, 1000).bar_fill(220), 220);
    }

    #[test]
    fn test_format_time_zero_padded() {
        assert_eq!(format_time(0).as_str(), "00:00");
        assert_eq!(format_time(65).as_str(), "01:05");
        assert_eq!(format_time(600).as_str(), "10:00");
    }

    #[test]
    fn test_format_time_long_track_widens() {
        assert_eq!(format_time(100 * 60 + 1).as_str(), "100:01");
    }
}
