//! SSD1306 OLED display wrapper.

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_hal::i2c::I2c;
use ssd1306::mode::BufferedGraphicsMode;
use ssd1306::prelude::*;
use ssd1306::I2CDisplayInterface;
use ssd1306::Ssd1306;
use ws2812_tester::config::{OLED_HEIGHT, OLED_I2C_ADDRESS, OLED_WIDTH};
use ws2812_tester::error::DisplayFault;
use ws2812_tester::ui::Panel;
use ws2812_tester::Error;

/// Type alias for the concrete display driver.
type Display<I2C> =
    Ssd1306<I2CInterface<I2C>, DisplaySize128x64, BufferedGraphicsMode<DisplaySize128x64>>;

// The driver below is fixed to `DisplaySize128x64`.
const _: () = assert!(OLED_WIDTH == 128 && OLED_HEIGHT == 64);

/// Buffered 128×64 SSD1306 as a [`Panel`].
pub struct Oled<I2C>(Display<I2C>);

/// Initialise the SSD1306 display and clear the screen.
pub fn init<I2C: I2c>(i2c: I2C) -> Result<Oled<I2C>, Error> {
    let interface = I2CDisplayInterface::new_custom_address(i2c, OLED_I2C_ADDRESS);
    let mut display = Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
        .into_buffered_graphics_mode();
    display.init().map_err(|_| DisplayFault::Init)?;
    display.clear_buffer();
    display.flush().map_err(|_| DisplayFault::Init)?;
    Ok(Oled(display))
}

impl<I2C: I2c> OriginDimensions for Oled<I2C> {
    fn size(&self) -> Size {
        self.0.size()
    }
}

impl<I2C: I2c> DrawTarget for Oled<I2C> {
    type Color = BinaryColor;
    type Error = <Display<I2C> as DrawTarget>::Error;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        self.0.draw_iter(pixels)
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.0.clear(color)
    }
}

impl<I2C: I2c> Panel for Oled<I2C> {
    fn present(&mut self) -> Result<(), Error> {
        self.0.flush().map_err(|_| DisplayFault::Flush.into())
    }
}
