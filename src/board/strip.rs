//! WS2812 data line on PWM0, driven by `embassy-nrf-ws2812-pwm`.
//!
//! The driver is async; the main loop is not, so every frame is run to
//! completion with `block_on`.

use embassy_futures::block_on;
use smart_leds::{SmartLedsWrite, SmartLedsWriteAsync, RGB8};
use static_cell::StaticCell;
use ws2812_tester::config::STRIP_MAX_LEDS;
use ws2812_tester::error::StripFault;

/// PWM duty words: 24 per LED.
pub const BUFFER_SIZE: usize = STRIP_MAX_LEDS * 24;

/// Sequence buffer; EasyDMA can only read from RAM.
static LED_BUFFER: StaticCell<[u16; BUFFER_SIZE]> = StaticCell::new();

/// Hand out the driver's sequence buffer. Succeeds once.
pub fn led_buffer() -> Result<&'static mut [u16; BUFFER_SIZE], StripFault> {
    LED_BUFFER.try_init([0; BUFFER_SIZE]).ok_or(StripFault::Init)
}

/// Blocking [`SmartLedsWrite`] front for an async strip driver.
pub struct BlockingStrip<W>(W);

impl<W> BlockingStrip<W> {
    pub fn new(driver: W) -> Self {
        Self(driver)
    }
}

impl<W> SmartLedsWrite for BlockingStrip<W>
where
    W: SmartLedsWriteAsync<Color = RGB8>,
{
    type Error = W::Error;
    type Color = RGB8;

    fn write<T, I>(&mut self, iterator: T) -> Result<(), Self::Error>
    where
        T: IntoIterator<Item = I>,
        I: Into<Self::Color>,
    {
        block_on(self.0.write(iterator.into_iter().map(Into::into)))
    }
}
