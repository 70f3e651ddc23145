//! WAV container header reader.
//!
//! Reads the fixed-size prefix of a canonical WAV file and extracts the one
//! field playback needs — the sample rate — plus the PCM data start offset.
//!
//! Layout assumption (canonical, non-extended WAV):
//!
//! | Bytes  | Content                                      |
//! |--------|----------------------------------------------|
//! | 0..12  | RIFF descriptor                              |
//! | 12..36 | format chunk (sample rate at bytes 24..28)   |
//! | 36..44 | data chunk header                            |
//! | 44..   | PCM samples                                  |
//!
//! No RIFF/WAVE magic or chunk-size validation is performed; a file with
//! extra chunks before `data` will play garbage rather than fail. The only
//! hard requirements are a 44-byte minimum length and a non-zero sample
//! rate.

use platform::storage::File;

/// Length of the RIFF descriptor.
pub const RIFF_DESCRIPTOR_LEN: usize = 12;
/// Length of the format chunk including its 8-byte header.
pub const FMT_CHUNK_LEN: usize = 24;
/// Length of the data chunk header.
pub const DATA_HEADER_LEN: usize = 8;
/// Total fixed prefix covering all recognized header chunks.
pub const HEADER_LEN: usize = RIFF_DESCRIPTOR_LEN + FMT_CHUNK_LEN + DATA_HEADER_LEN;
/// Absolute byte offset of the little-endian 32-bit sample-rate field.
pub const SAMPLE_RATE_OFFSET: usize = 24;
/// Byte offset where PCM samples start.
pub const PCM_DATA_OFFSET: u32 = 44;
/// The only bit depth this player produces.
pub const BITS_PER_SAMPLE: u8 = 16;
/// The only channel count this player produces.
pub const CHANNELS: u8 = 1;

/// Everything playback needs to know about an opened stream.
///
/// Derived once per opened file; immutable for the stream's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreamDescriptor {
    /// Sample rate from the format chunk, Hz. Always non-zero.
    pub sample_rate_hz: u32,
    /// Byte offset of the first PCM sample.
    pub data_offset: u32,
    /// PCM payload length: file size minus the header prefix.
    pub total_data_bytes: u32,
    /// Fixed at 16.
    pub bits_per_sample: u8,
    /// Fixed at 1 (mono).
    pub channels: u8,
}

impl StreamDescriptor {
    /// Estimated duration in whole seconds.
    ///
    /// Computed from payload size and sample rate (2 bytes per sample,
    /// mono), not from a duration field — exact only for unpadded,
    /// non-extended files.
    pub fn duration_secs(&self) -> u32 {
        // Widened so a corrupt rate near u32::MAX cannot overflow the
        // bytes-per-second product.
        #[allow(clippy::cast_possible_truncation)]
        {
            (u64::from(self.total_data_bytes) / (u64::from(self.sample_rate_hz) * 2)) as u32
        }
    }
}

/// Header parse failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum WavError {
    /// The file is shorter than the 44-byte header prefix.
    MalformedHeader,
    /// The sample-rate field is zero; the stream is rejected.
    ZeroSampleRate,
}

impl core::fmt::Display for WavError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::MalformedHeader => write!(f, "truncated or non-WAV header"),
            Self::ZeroSampleRate => write!(f, "sample rate field is zero"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for WavError {}

/// Error from [`read_descriptor`].
#[derive(Debug)]
pub enum HeaderReadError<E: core::fmt::Debug> {
    /// I/O error from the underlying `File` implementation.
    Storage(E),
    /// The bytes read do not form a usable header.
    Format(WavError),
}

/// Parse a header prefix into a [`StreamDescriptor`].
///
/// `prefix` must hold at least [`HEADER_LEN`] bytes; `file_size` is the full
/// file length used to derive the payload size.
pub fn parse_header(prefix: &[u8], file_size: u64) -> Result<StreamDescriptor, WavError> {
    if prefix.len() < HEADER_LEN {
        return Err(WavError::MalformedHeader);
    }
    let rate_bytes = [
        prefix[SAMPLE_RATE_OFFSET],
        prefix[SAMPLE_RATE_OFFSET + 1],
        prefix[SAMPLE_RATE_OFFSET + 2],
        prefix[SAMPLE_RATE_OFFSET + 3],
    ];
    let sample_rate_hz = u32::from_le_bytes(rate_bytes);
    if sample_rate_hz == 0 {
        return Err(WavError::ZeroSampleRate);
    }
    #[allow(clippy::cast_possible_truncation)]
    let total_data_bytes = file_size.saturating_sub(u64::from(PCM_DATA_OFFSET)) as u32;
    Ok(StreamDescriptor {
        sample_rate_hz,
        data_offset: PCM_DATA_OFFSET,
        total_data_bytes,
        bits_per_sample: BITS_PER_SAMPLE,
        channels: CHANNELS,
    })
}

/// Read and parse the header of an open file.
///
/// Seeks to offset 0 and reads the fixed prefix. A short read (truncated or
/// non-WAV file) maps to `Format(MalformedHeader)` — callers must treat this
/// as a playback abort, not a crash.
pub async fn read_descriptor<F: File>(
    file: &mut F,
) -> Result<StreamDescriptor, HeaderReadError<F::Error>> {
    file.seek(0).await.map_err(HeaderReadError::Storage)?;

    let mut buf = [0u8; HEADER_LEN];
    let mut filled = 0;
    while filled < HEADER_LEN {
        let n = file
            .read(&mut buf[filled..])
            .await
            .map_err(HeaderReadError::Storage)?;
        if n == 0 {
            break;
        }
        filled += n;
    }
    if filled < HEADER_LEN {
        return Err(HeaderReadError::Format(WavError::MalformedHeader));
    }
    parse_header(&buf, file.size()).map_err(HeaderReadError::Format)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use platform::mocks::MockStorage;
    use platform::storage::Storage;

    /// Build a canonical 44-byte header with the given sample rate.
    pub(crate) fn header_bytes(sample_rate: u32) -> [u8; HEADER_LEN] {
        let mut h = [0u8; HEADER_LEN];
        h[..4].copy_from_slice(b"RIFF");
        h[8..12].copy_from_slice(b"WAVE");
        h[12..16].copy_from_slice(b"fmt ");
        h[SAMPLE_RATE_OFFSET..SAMPLE_RATE_OFFSET + 4]
            .copy_from_slice(&sample_rate.to_le_bytes());
        h[36..40].copy_from_slice(b"data");
        h
    }

    #[test]
    fn test_parse_header_documented_offset() {
        let desc = parse_header(&header_bytes(44_100), 44).unwrap();
        assert_eq!(desc.sample_rate_hz, 44_100);
        assert_eq!(desc.data_offset, 44);
        assert_eq!(desc.total_data_bytes, 0);
        assert_eq!(desc.bits_per_sample, 16);
        assert_eq!(desc.channels, 1);
    }

    #[test]
    fn test_parse_header_short_prefix_fails() {
        assert_eq!(
            parse_header(&[0u8; 43], 43),
            Err(WavError::MalformedHeader)
        );
    }

    #[test]
    fn test_parse_header_zero_rate_rejected() {
        assert_eq!(
            parse_header(&header_bytes(0), 1000),
            Err(WavError::ZeroSampleRate)
        );
    }

    #[test]
    fn test_duration_from_payload_size() {
        // 5 seconds of 44.1 kHz mono 16-bit audio.
        let payload = 44_100u32 * 2 * 5;
        let desc = parse_header(&header_bytes(44_100), u64::from(payload) + 44).unwrap();
        assert_eq!(desc.total_data_bytes, payload);
        assert_eq!(desc.duration_secs(), 5);
    }

    #[test]
    fn test_duration_survives_absurd_sample_rate() {
        // A corrupt rate field near u32::MAX passes the zero check; the
        // duration math must not overflow on it.
        let desc = parse_header(&header_bytes(0x8000_0000), 1_000_000).unwrap();
        assert_eq!(desc.duration_secs(), 0);

        let desc = parse_header(&header_bytes(u32::MAX), u64::from(u32::MAX)).unwrap();
        assert_eq!(desc.duration_secs(), 0);
    }

    #[tokio::test]
    async fn test_read_descriptor_from_file() {
        let mut storage = MockStorage::new();
        let mut data = header_bytes(22_050).to_vec();
        data.extend_from_slice(&[0u8; 100]);
        storage.insert("music/t.wav", &data);

        let mut file = storage.open_file("music/t.wav").await.unwrap();
        let desc = read_descriptor(&mut file).await.unwrap();
        assert_eq!(desc.sample_rate_hz, 22_050);
        assert_eq!(desc.total_data_bytes, 100);
    }

    #[tokio::test]
    async fn test_read_descriptor_truncated_file() {
        let mut storage = MockStorage::new();
        storage.insert("music/short.wav", &[0u8; 20]);
        let mut file = storage.open_file("music/short.wav").await.unwrap();
        assert!(matches!(
            read_descriptor(&mut file).await,
            Err(HeaderReadError::Format(WavError::MalformedHeader))
        ));
    }
}
