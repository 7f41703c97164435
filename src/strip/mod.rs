//! WS2812 strip under test.
//!
//! [`LedStrip`] turns "N LEDs of one color" into frames for any
//! [`SmartLedsWrite`] writer. When the strip gets shorter, the frame also
//! covers the pixels that fell off the end and sends them black, so a
//! shrink never leaves stale LEDs lit.

use crate::error::StripFault;
use core::iter;
use smart_leds::{SmartLedsWrite, RGB8};

/// Commands the scheduler issues to the strip.
pub trait StripDriver {
    /// Requested strip length (before any capacity clamp).
    fn length(&self) -> u32;
    fn set_length(&mut self, n: u32);
    fn color(&self) -> RGB8;
    fn set_color(&mut self, color: RGB8);
    /// Send the pending length and color to the LEDs.
    fn push(&mut self);
}

/// Single-color strip over a smart-leds writer.
pub struct LedStrip<W> {
    writer: W,
    capacity: usize,
    length: u32,
    color: RGB8,
    /// Pixels covered by the last frame that went out.
    lit: usize,
}

impl<W> LedStrip<W>
where
    W: SmartLedsWrite<Color = RGB8>,
{
    /// `capacity` is the most pixels a frame may address.
    pub fn new(writer: W, capacity: usize) -> Self {
        Self {
            writer,
            capacity,
            length: 0,
            color: RGB8::default(),
            lit: 0,
        }
    }

    /// Pixels the next frame lights.
    fn target_len(&self) -> usize {
        (self.length as usize).min(self.capacity)
    }

    /// Compose and send one frame: `length` pixels of `color`, then black
    /// over whatever the previous frame lit beyond that.
    pub fn try_push(&mut self) -> Result<(), StripFault> {
        let lit = self.target_len();
        let blank = self.lit.saturating_sub(lit);

        let frame = iter::repeat(self.color)
            .take(lit)
            .chain(iter::repeat(RGB8::default()).take(blank));
        self.writer.write(frame).map_err(|_| StripFault::Write)?;

        self.lit = lit;
        Ok(())
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }
}

impl<W> StripDriver for LedStrip<W>
where
    W: SmartLedsWrite<Color = RGB8>,
{
    fn length(&self) -> u32 {
        self.length
    }

    fn set_length(&mut self, n: u32) {
        if n as usize > self.capacity {
            warn!("Strip: {} LEDs requested, clamping to {}", n, self.capacity);
        }
        self.length = n;
    }

    fn color(&self) -> RGB8 {
        self.color
    }

    fn set_color(&mut self, color: RGB8) {
        self.color = color;
    }

    fn push(&mut self) {
        if let Err(e) = self.try_push() {
            warn!("Strip: frame dropped ({})", e);
        }
    }
}
