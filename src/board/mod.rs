//! nRF52840 adapters for the tester core.
//!
//! Each submodule implements one of the library's hardware traits on top
//! of an embassy-nrf peripheral.

pub mod encoder;
pub mod oled;
pub mod pots;
pub mod strip;

use defmt::error;
use embassy_nrf::{bind_interrupts, peripherals, rng, saadc, twim};
use embassy_time::Instant;
use ws2812_tester::clock::{Clock, Millis};
use ws2812_tester::Error;

bind_interrupts!(pub struct Irqs {
    SAADC => saadc::InterruptHandler;
    TWISPI0 => twim::InterruptHandler<peripherals::TWISPI0>;
    RNG => rng::InterruptHandler<peripherals::RNG>;
});

/// Embassy time driver (RTC1) as the scheduler clock.
pub struct Uptime;

impl Clock for Uptime {
    fn now(&self) -> Millis {
        Millis(Instant::now().as_millis())
    }
}

/// Stop for good after a start-up fault.
pub fn halt(err: Error) -> ! {
    error!("Fatal: {}, halting", err);
    loop {
        cortex_m::asm::wfe();
    }
}
