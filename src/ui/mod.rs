//! User interface subsystem - OLED status screen + screensaver.
//!
//! The scheduler mirrors the current color and length into a
//! [`DisplayDriver`] and asks it to render. While the rig is idle the
//! display shows the blinking-eyes screensaver instead.
//!
//! ## Components
//!
//! - **Display**: SSD1306 128×64 OLED via I²C, drawn with embedded-graphics
//! - **Screensaver**: randomized open/closed eyes with minimum hold times

pub mod display;
pub mod screensaver;

use crate::clock::Millis;
use crate::error::Error;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::DrawTarget;
use smart_leds::RGB8;

pub use display::OledDisplay;
pub use screensaver::{Eyes, Screensaver, ScreensaverConfig};

/// Commands the scheduler issues to the display.
pub trait DisplayDriver {
    fn set_title(&mut self, title: &str);
    fn set_length(&mut self, n: u32);
    fn set_color(&mut self, color: RGB8);
    /// Raise or lower the idle-screen flag.
    fn set_idle(&mut self, idle: bool);
    fn render(&mut self, now: Millis);
}

/// A monochrome frame buffer that can be sent to the glass.
pub trait Panel: DrawTarget<Color = BinaryColor> {
    fn present(&mut self) -> Result<(), Error>;
}
