//! Status screen and screensaver rendering.

use super::screensaver::{Eyes, Screensaver};
use super::{DisplayDriver, Panel};
use crate::clock::Millis;
use core::fmt::Write;
use embedded_graphics::mono_font::ascii::{FONT_10X20, FONT_6X10};
use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, Line, PrimitiveStyle};
use embedded_graphics::text::{Baseline, Text};
use heapless::String;
use smart_leds::RGB8;

/// Longest title kept; longer titles are truncated.
pub const TITLE_CAPACITY: usize = 48;

fn text_style(font: &'static MonoFont<'static>) -> MonoTextStyle<'static, BinaryColor> {
    MonoTextStyle::new(font, BinaryColor::On)
}

/// `"LEDs: <n>"`.
pub fn length_line(n: u32) -> String<16> {
    let mut line = String::new();
    let _ = write!(line, "LEDs: {}", n);
    line
}

/// `"R:rrr G:ggg B:bbb"` with every channel zero-padded to 3 digits.
pub fn rgb_line(color: RGB8) -> String<20> {
    let mut line = String::new();
    let _ = write!(line, "R:{:03} G:{:03} B:{:03}", color.r, color.g, color.b);
    line
}

/// OLED front panel of the rig.
pub struct OledDisplay<P> {
    panel: P,
    title: String<TITLE_CAPACITY>,
    length: u32,
    color: RGB8,
    idle: bool,
    screensaver: Screensaver,
}

impl<P: Panel> OledDisplay<P> {
    pub fn new(panel: P, screensaver: Screensaver) -> Self {
        Self {
            panel,
            title: String::new(),
            length: 0,
            color: RGB8::default(),
            idle: false,
            screensaver,
        }
    }

    pub fn panel(&self) -> &P {
        &self.panel
    }

    pub fn title(&self) -> &str {
        self.title.as_str()
    }

    pub fn is_idle(&self) -> bool {
        self.idle
    }

    fn draw_status(&mut self) {
        let _ = self.panel.clear(BinaryColor::Off);

        let small = text_style(&FONT_6X10);
        let _ = Text::with_baseline(self.title.as_str(), Point::zero(), small, Baseline::Top)
            .draw(&mut self.panel);

        let _ = Text::with_baseline(
            length_line(self.length).as_str(),
            Point::new(0, 25),
            text_style(&FONT_10X20),
            Baseline::Top,
        )
        .draw(&mut self.panel);

        let _ = Text::with_baseline(
            rgb_line(self.color).as_str(),
            Point::new(0, 50),
            small,
            Baseline::Top,
        )
        .draw(&mut self.panel);

        self.present();
    }

    fn draw_screensaver(&mut self, eyes: Eyes) {
        let _ = self.panel.clear(BinaryColor::Off);

        let caption = self.title.lines().next().unwrap_or_default();
        let _ = Text::with_baseline(caption, Point::zero(), text_style(&FONT_6X10), Baseline::Top)
            .draw(&mut self.panel);

        let on = BinaryColor::On;
        for x in [36, 76] {
            let _ = match eyes {
                Eyes::Open => Circle::new(Point::new(x, 26), 16)
                    .into_styled(PrimitiveStyle::with_fill(on))
                    .draw(&mut self.panel),
                Eyes::Closed => Line::new(Point::new(x, 34), Point::new(x + 15, 34))
                    .into_styled(PrimitiveStyle::with_stroke(on, 2))
                    .draw(&mut self.panel),
            };
        }

        self.present();
    }

    fn present(&mut self) {
        if let Err(e) = self.panel.present() {
            warn!("Display: flush failed ({})", e);
        }
    }
}

impl<P: Panel> DisplayDriver for OledDisplay<P> {
    fn set_title(&mut self, title: &str) {
        self.title.clear();
        // Truncate rather than fail on long titles.
        for c in title.chars() {
            if self.title.push(c).is_err() {
                break;
            }
        }
    }

    fn set_length(&mut self, n: u32) {
        self.length = n;
    }

    fn set_color(&mut self, color: RGB8) {
        self.color = color;
    }

    fn set_idle(&mut self, idle: bool) {
        if idle && !self.idle {
            self.screensaver.restart();
        }
        self.idle = idle;
    }

    fn render(&mut self, now: Millis) {
        if !self.idle {
            self.draw_status();
        } else if let Some(eyes) = self.screensaver.poll(now) {
            self.draw_screensaver(eyes);
        }
    }
}
