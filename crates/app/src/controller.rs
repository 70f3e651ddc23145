//! The application controller — menu loop, playback hand-off, shutdown.

use core::fmt::Write as _;

use library::index::MusicIndex;
use platform::audio::AudioOutput;
use platform::beeper::ToneFeedback;
use platform::clock::Clock;
use platform::config::{Config, MUSIC_DIR};
use platform::display::DisplaySurface;
use platform::input::InputDevice;
use platform::storage::Storage;
use playback::{PlaybackEngine, PlaybackOutcome};
use ui::menu::{MenuAction, MenuNavigator};
use ui::render;
use ui::text::ClippedString;

use crate::feedback;

/// Shown when the removable media cannot be mounted.
pub const MOUNT_ERROR_LINES: [&str; 2] = ["SD Card", "Mount Error"];

/// Owns every peripheral plus the catalogue and menu state.
///
/// Everything runs on one cooperative loop: while a track plays nothing
/// else executes, and the menu is frozen until playback hands control back.
pub struct AppController<S, A, D, I, C, B> {
    storage: S,
    audio: A,
    display: D,
    input: I,
    clock: C,
    beeper: B,
    config: Config,
    index: MusicIndex,
    nav: MenuNavigator,
}

impl<S, A, D, I, C, B> AppController<S, A, D, I, C, B>
where
    S: Storage,
    A: AudioOutput,
    D: DisplaySurface,
    I: InputDevice,
    C: Clock,
    B: ToneFeedback,
{
    /// Take ownership of the peripherals and start at the main menu.
    pub fn new(
        storage: S,
        audio: A,
        display: D,
        input: I,
        clock: C,
        beeper: B,
        config: Config,
    ) -> Self {
        Self {
            storage,
            audio,
            display,
            input,
            clock,
            beeper,
            config,
            index: MusicIndex::new(),
            nav: MenuNavigator::new(),
        }
    }

    /// The music catalogue as currently indexed.
    pub fn index(&self) -> &MusicIndex {
        &self.index
    }

    /// Give the peripherals back, e.g. for post-run inspection.
    pub fn into_parts(self) -> (S, A, D, I, C, B) {
        (
            self.storage,
            self.audio,
            self.display,
            self.input,
            self.clock,
            self.beeper,
        )
    }

    /// Run until the user exits. Mount and scan once up front; every error
    /// after that is shown on screen and control returns to the menu.
    pub async fn run(&mut self) {
        match self.storage.mount().await {
            Ok(()) => {
                self.index.rebuild(&mut self.storage, MUSIC_DIR).await;
            }
            Err(_e) => {
                #[cfg(feature = "defmt")]
                defmt::warn!("media mount failed, starting with an empty library");
                self.show_message(&MOUNT_ERROR_LINES).await;
            }
        }

        loop {
            self.draw_menu().await;
            let key = self.input.wait_key().await;
            feedback::key_tone(&mut self.beeper, &self.config, key);

            match self.nav.handle_key(key, &self.index, self.clock.now_ms()) {
                MenuAction::None
                | MenuAction::Up
                | MenuAction::Down
                | MenuAction::Back => {}
                MenuAction::Info(message) => self.show_message(&[message]).await,
                MenuAction::Play(filename) | MenuAction::PlayShuffle(filename) => {
                    self.play_track(filename.as_str()).await;
                }
                MenuAction::Exit => break,
            }
        }

        self.storage.unmount().await;
    }

    async fn play_track(&mut self, filename: &str) {
        let mut engine = PlaybackEngine::new(
            &mut self.storage,
            &mut self.audio,
            &mut self.display,
            &mut self.input,
            &self.clock,
            &self.config.palette,
        );
        let outcome = engine.play(filename, MUSIC_DIR).await;

        if let PlaybackOutcome::Failed(error) = outcome {
            let mut detail: ClippedString<{ render::MENU_CHARS }> = ClippedString::new();
            let _ = write!(detail, "{error}");
            detail.ellipsize();
            self.show_message(&["Playback Error:", detail.as_str()]).await;
        }
    }

    /// Show a message screen until any key is pressed.
    ///
    /// Deliberate UX change from the original's ~2 s auto-dismiss: with no
    /// timer source in the loop, dismiss-on-key keeps the design free of
    /// sleeps and lets the user read at their own pace.
    async fn show_message(&mut self, lines: &[&str]) {
        if render::draw_message(&mut self.display, lines, &self.config.palette).is_ok() {
            let _ = self.display.flush().await;
        }
        let _ = self.input.wait_key().await;
    }

    async fn draw_menu(&mut self) {
        if render::draw_menu(
            &mut self.display,
            &self.nav,
            &self.index,
            &self.config.palette,
        )
        .is_ok()
        {
            let _ = self.display.flush().await;
        }
    }
}
