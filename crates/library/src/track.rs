//! TrackName — parsing the `Artist - Album - Song.wav` naming convention.
//!
//! The library carries no tag metadata; everything the player knows about a
//! track is embedded in its filename. A name with exactly two `" - "`
//! separators is structured; anything else is kept as a raw filename that
//! only appears in the flat file listing.

use heapless::String;

/// An artist, album or song title (up to 64 UTF-8 bytes).
pub type Name = String<64>;

/// A bare WAV filename (up to 128 UTF-8 bytes).
pub type Filename = String<128>;

/// The separator between the artist, album and song parts.
pub const PART_SEPARATOR: &str = " - ";

/// A track's identity, parsed once at index-build time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrackName {
    /// The filename matched `Artist - Album - Song.wav` exactly.
    Structured {
        /// Artist part
        artist: Name,
        /// Album part
        album: Name,
        /// Song title part
        song: Name,
    },
    /// Anything else — playable from the flat listing only.
    Raw(Filename),
}

impl TrackName {
    /// Parse a filename into a [`TrackName`].
    ///
    /// The `.wav` suffix is stripped case-insensitively before splitting on
    /// `" - "`. Exactly three parts make a structured name; a different part
    /// count, an empty part, or a part exceeding the [`Name`] capacity all
    /// fall back to [`TrackName::Raw`].
    pub fn parse(filename: &str) -> TrackName {
        let stem = strip_wav_extension(filename).unwrap_or(filename);

        let mut parts = stem.split(PART_SEPARATOR);
        let (Some(artist), Some(album), Some(song), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return TrackName::Raw(clip(filename));
        };
        if artist.is_empty() || album.is_empty() || song.is_empty() {
            return TrackName::Raw(clip(filename));
        }
        match (fit(artist), fit(album), fit(song)) {
            (Some(artist), Some(album), Some(song)) => TrackName::Structured {
                artist,
                album,
                song,
            },
            _ => TrackName::Raw(clip(filename)),
        }
    }
}

/// Returns `true` when `name` ends in `.wav`, case-insensitively.
pub fn has_wav_extension(name: &str) -> bool {
    let Some(dot) = name.rfind('.') else {
        return false;
    };
    name[dot + 1..].eq_ignore_ascii_case("wav")
}

/// Strip a case-insensitive `.wav` suffix, or `None` if there is none.
fn strip_wav_extension(name: &str) -> Option<&str> {
    if !has_wav_extension(name) {
        return None;
    }
    name.rfind('.').map(|dot| &name[..dot])
}

/// Copy `s` into a bounded string, or `None` if it does not fit.
fn fit(s: &str) -> Option<Name> {
    let mut out = Name::new();
    out.push_str(s).ok()?;
    Some(out)
}

/// Copy `s` into a [`Filename`], truncating at a char boundary if needed.
fn clip(s: &str) -> Filename {
    let mut out = Filename::new();
    for c in s.chars() {
        if out.push(c).is_err() {
            break;
        }
    }
    out
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_three_part_name() {
        let name = TrackName::parse("Beatles - Abbey Road - Come Together.wav");
        let TrackName::Structured {
            artist,
            album,
            song,
        } = name
        else {
            panic!("expected structured name");
        };
        assert_eq!(artist.as_str(), "Beatles");
        assert_eq!(album.as_str(), "Abbey Road");
        assert_eq!(song.as_str(), "Come Together");
    }

    #[test]
    fn test_parse_uppercase_extension() {
        let name = TrackName::parse("A - B - C.WAV");
        assert!(matches!(name, TrackName::Structured { .. }));
    }

    #[test]
    fn test_parse_two_parts_is_raw() {
        let name = TrackName::parse("Beatles - Something.wav");
        assert_eq!(
            name,
            TrackName::Raw(clip("Beatles - Something.wav"))
        );
    }

    #[test]
    fn test_parse_four_parts_is_raw() {
        let name = TrackName::parse("A - B - C - D.wav");
        assert!(matches!(name, TrackName::Raw(_)));
    }

    #[test]
    fn test_parse_plain_filename_is_raw() {
        assert!(matches!(
            TrackName::parse("recording01.wav"),
            TrackName::Raw(_)
        ));
    }

    #[test]
    fn test_hyphen_without_spaces_is_not_a_separator() {
        // "a-b" has no " - " separator; the whole stem is one part.
        assert!(matches!(TrackName::parse("a-b.wav"), TrackName::Raw(_)));
    }

    #[test]
    fn test_has_wav_extension_case_insensitive() {
        assert!(has_wav_extension("a.wav"));
        assert!(has_wav_extension("a.WAV"));
        assert!(has_wav_extension("a.Wav"));
        assert!(!has_wav_extension("a.mp3"));
        assert!(!has_wav_extension("wav"));
        assert!(!has_wav_extension(""));
    }

    #[test]
    fn test_overlong_part_falls_back_to_raw() {
        let long = "x".repeat(80);
        let mut name = std::string::String::new();
        name.push_str(&long);
        name.push_str(" - Album - Song.wav");
        assert!(matches!(TrackName::parse(&name), TrackName::Raw(_)));
    }

    #[test]
    fn test_clip_respects_char_boundaries() {
        // 127 ASCII bytes followed by a 2-byte char: the char cannot fit.
        let mut s = "x".repeat(127);
        s.push('é');
        let clipped = clip(&s);
        assert_eq!(clipped.len(), 127);
    }
}
