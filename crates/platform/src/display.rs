//! Display abstraction layer

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

/// Display driver trait for the ST7789-class LCD panel.
///
/// Drawing goes through the [`DrawTarget`] impl into an off-screen
/// framebuffer; nothing reaches the panel until [`flush`](Self::flush).
pub trait DisplaySurface: DrawTarget<Color = Rgb565> {
    /// Error type for panel transfer operations
    type FlushError: core::fmt::Debug;

    /// Push the framebuffer to the panel.
    fn flush(&mut self) -> impl core::future::Future<Output = Result<(), Self::FlushError>>;

    /// Get display dimensions
    fn dimensions(&self) -> Size {
        self.bounding_box().size
    }
}
