//! Screen rendering — menu lists, message screens, the now-playing view.
//!
//! All functions draw onto a caller-supplied `DrawTarget<Color = Rgb565>`
//! and never flush; the caller decides when a frame goes out. Geometry is
//! laid out for a 240x135 panel but everything derives from the constants
//! below.

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::mono_font::ascii::{FONT_6X10, FONT_10X20};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics::text::{Baseline, Text};

use core::fmt::Write as _;

use library::index::MusicIndex;
use library::track::TrackName;
use platform::config::Palette;

use crate::menu::{MenuNavigator, ViewKind};
use crate::now_playing::{NowPlayingScreen, format_time};
use crate::text::ClippedString;

/// Panel width in pixels.
pub const DISPLAY_WIDTH: u32 = 240;
/// Panel height in pixels.
pub const DISPLAY_HEIGHT: u32 = 135;

/// Menu row height (FONT_10X20 plus leading).
pub const LINE_HEIGHT: u32 = 22;
/// Menu rows that fit on one screen.
pub const ITEMS_PER_SCREEN: usize = 6;
/// Scrollbar width at the right edge.
pub const SCROLLBAR_WIDTH: u32 = 3;
/// Characters per menu row before the ellipsis kicks in.
pub const MENU_CHARS: usize = 23;
/// Characters per small info line (FONT_6X10).
pub const INFO_CHARS: usize = 38;

/// Progress bar geometry on the now-playing screen.
pub const BAR_X: i32 = 10;
/// Progress bar top edge.
pub const BAR_Y: i32 = 100;
/// Progress bar width.
pub const BAR_WIDTH: u32 = 220;
/// Progress bar height.
pub const BAR_HEIGHT: u32 = 10;

/// Shown when the flat file view is empty.
pub const NO_FILES_MESSAGE: &str = "No WAV files found";

/// Draw the current menu view: visible rows, highlight, scrollbar.
#[allow(clippy::cast_possible_wrap, clippy::cast_possible_truncation)]
pub fn draw_menu<D>(
    display: &mut D,
    nav: &MenuNavigator,
    index: &MusicIndex,
    palette: &Palette,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    display.clear(palette.background)?;

    let len = nav.item_count(index);
    if len == 0 && nav.view() == ViewKind::Files {
        return draw_message(display, &[NO_FILES_MESSAGE], palette);
    }

    let cursor = nav.cursor();
    let first = cursor.offset();
    let last = (first + cursor.visible()).min(len);
    for (row, pos) in (first..last).enumerate() {
        let Some(item) = nav.item(index, pos) else {
            break;
        };
        let mut line: ClippedString<MENU_CHARS> = ClippedString::new();
        let _ = write!(line, "{item}");
        line.ellipsize();

        let color = if pos == cursor.cursor() {
            palette.highlight
        } else {
            palette.text
        };
        let style = MonoTextStyle::new(&FONT_10X20, color);
        let y = row as i32 * LINE_HEIGHT as i32 + 2;
        Text::with_baseline(line.as_str(), Point::new(4, y), style, Baseline::Top)
            .draw(display)?;
    }

    if len > cursor.visible() {
        draw_scrollbar(display, len, cursor.visible(), first, palette)?;
    }
    Ok(())
}

/// Right-edge scrollbar: thumb height and position mirror how far the
/// viewport has moved through the list.
#[allow(clippy::cast_possible_wrap, clippy::cast_possible_truncation)]
fn draw_scrollbar<D>(
    display: &mut D,
    len: usize,
    visible: usize,
    offset: usize,
    palette: &Palette,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    let x = (DISPLAY_WIDTH - SCROLLBAR_WIDTH) as i32;
    Rectangle::new(
        Point::new(x, 0),
        Size::new(SCROLLBAR_WIDTH, DISPLAY_HEIGHT),
    )
    .into_styled(PrimitiveStyle::with_fill(palette.bar_track))
    .draw(display)?;

    let steps = (len - visible) as u32;
    let thumb_h = (DISPLAY_HEIGHT / (steps + 1)).max(4);
    let thumb_y = ((DISPLAY_HEIGHT - thumb_h) * offset as u32 / steps.max(1)) as i32;
    Rectangle::new(Point::new(x, thumb_y), Size::new(SCROLLBAR_WIDTH, thumb_h))
        .into_styled(PrimitiveStyle::with_fill(palette.bar_fill))
        .draw(display)
}

/// Draw a block of centered text lines on a cleared screen.
#[allow(clippy::cast_possible_wrap, clippy::cast_possible_truncation)]
pub fn draw_message<D>(
    display: &mut D,
    lines: &[&str],
    palette: &Palette,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    display.clear(palette.background)?;

    let style = MonoTextStyle::new(&FONT_10X20, palette.text);
    let block_h = lines.len() as u32 * LINE_HEIGHT;
    let top = (DISPLAY_HEIGHT.saturating_sub(block_h) / 2) as i32;
    for (row, line) in lines.iter().enumerate() {
        let text_w = line.len() as u32 * 10;
        let x = (DISPLAY_WIDTH.saturating_sub(text_w) / 2) as i32;
        let y = top + row as i32 * LINE_HEIGHT as i32;
        Text::with_baseline(line, Point::new(x, y), style, Baseline::Top).draw(display)?;
    }
    Ok(())
}

/// Draw the now-playing screen: track metadata, progress bar, elapsed time.
#[allow(clippy::cast_possible_wrap, clippy::cast_possible_truncation)]
pub fn draw_now_playing<D>(
    display: &mut D,
    screen: &NowPlayingScreen,
    palette: &Palette,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    display.clear(palette.background)?;

    let style = MonoTextStyle::new(&FONT_10X20, palette.text);
    let small = MonoTextStyle::new(&FONT_6X10, palette.text);

    match &screen.track {
        TrackName::Structured {
            artist,
            album,
            song,
        } => {
            let rows: [(&str, &str); 3] = [
                ("Artist: ", artist.as_str()),
                ("Album:  ", album.as_str()),
                ("Song:   ", song.as_str()),
            ];
            for (row, (label, value)) in rows.iter().enumerate() {
                let mut line: ClippedString<INFO_CHARS> = ClippedString::new();
                let _ = write!(line, "{label}{value}");
                line.ellipsize();
                let y = 12 + row as i32 * 16;
                Text::with_baseline(line.as_str(), Point::new(10, y), small, Baseline::Top)
                    .draw(display)?;
            }
        }
        TrackName::Raw(name) => {
            let mut line: ClippedString<MENU_CHARS> = ClippedString::new();
            let _ = write!(line, "{name}");
            line.ellipsize();
            Text::with_baseline(line.as_str(), Point::new(10, 24), style, Baseline::Top)
                .draw(display)?;
        }
    }

    Rectangle::new(Point::new(BAR_X, BAR_Y), Size::new(BAR_WIDTH, BAR_HEIGHT))
        .into_styled(PrimitiveStyle::with_fill(palette.bar_track))
        .draw(display)?;
    let fill = screen.bar_fill(BAR_WIDTH);
    if fill > 0 {
        Rectangle::new(Point::new(BAR_X, BAR_Y), Size::new(fill, BAR_HEIGHT))
            .into_styled(PrimitiveStyle::with_fill(palette.bar_fill))
            .draw(display)?;
    }

    let mut time: ClippedString<16> = ClippedString::new();
    let _ = write!(
        time,
        "{} / {}",
        format_time(screen.position_secs),
        format_time(screen.duration_secs)
    );
    let text_w = time.as_str().len() as u32 * 6;
    let x = (DISPLAY_WIDTH.saturating_sub(text_w) / 2) as i32;
    Text::with_baseline(
        time.as_str(),
        Point::new(x, BAR_Y + BAR_HEIGHT as i32 + 4),
        small,
        Baseline::Top,
    )
    .draw(display)
    .map(|_| ())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use platform::mocks::{MockDisplay, MockStorage};

    async fn sample_index() -> MusicIndex {
        let mut storage = MockStorage::new();
        for name in [
            "Beatles - Abbey Road - Come Together.wav",
            "Eno - Another Green World - Becalmed.wav",
        ] {
            storage.insert(&format!("music/{name}"), b"");
        }
        let mut index = MusicIndex::new();
        index.rebuild(&mut storage, "music").await;
        index
    }

    #[tokio::test]
    async fn test_draw_menu_produces_pixels() {
        let index = sample_index().await;
        let nav = MenuNavigator::new();
        let mut display = MockDisplay::new(DISPLAY_WIDTH, DISPLAY_HEIGHT);
        draw_menu(&mut display, &nav, &index, &Palette::default()).unwrap();
        assert!(display.pixels_drawn() > 0);
    }

    #[tokio::test]
    async fn test_draw_menu_scrollbar_only_when_list_overflows() {
        let mut storage = MockStorage::new();
        for i in 0..10 {
            storage.insert(&format!("music/file{i:02}.wav"), b"");
        }
        let mut index = MusicIndex::new();
        index.rebuild(&mut storage, "music").await;

        // 3 main items in a 6-row window: no scrollbar pixels beyond the rows.
        let nav = MenuNavigator::new();
        let mut short = MockDisplay::new(DISPLAY_WIDTH, DISPLAY_HEIGHT);
        draw_menu(&mut short, &nav, &index, &Palette::default()).unwrap();

        // 10 files in the same window: scrollbar track adds a full column.
        let mut nav = MenuNavigator::new();
        let mut key = |k| {
            nav.handle_key(k, &index, 0);
        };
        key(platform::input::Key::Confirm); // Library
        for _ in 0..3 {
            key(platform::input::Key::Next);
        }
        key(platform::input::Key::Confirm); // Files
        let mut long = MockDisplay::new(DISPLAY_WIDTH, DISPLAY_HEIGHT);
        draw_menu(&mut long, &nav, &index, &Palette::default()).unwrap();
        assert!(long.pixels_drawn() > short.pixels_drawn());
    }

    #[test]
    fn test_draw_message_centered_lines() {
        let mut display = MockDisplay::new(DISPLAY_WIDTH, DISPLAY_HEIGHT);
        draw_message(&mut display, &["SD Card", "Mount Error"], &Palette::default()).unwrap();
        assert!(display.pixels_drawn() > 0);
    }

    #[test]
    fn test_draw_now_playing_structured_and_raw() {
        let palette = Palette::default();
        let mut display = MockDisplay::new(DISPLAY_WIDTH, DISPLAY_HEIGHT);
        let mut screen = NowPlayingScreen::new(
            TrackName::parse("Beatles - Abbey Road - Something.wav"),
            88_200,
            1,
        );
        screen.bytes_consumed = 44_100;
        draw_now_playing(&mut display, &screen, &palette).unwrap();
        let structured_pixels = display.pixels_drawn();

        let mut display = MockDisplay::new(DISPLAY_WIDTH, DISPLAY_HEIGHT);
        let raw = NowPlayingScreen::new(TrackName::parse("field recording.wav"), 0, 0);
        draw_now_playing(&mut display, &raw, &palette).unwrap();
        assert!(display.pixels_drawn() > 0);
        assert!(structured_pixels > 0);
    }
}
