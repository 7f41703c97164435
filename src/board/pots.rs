//! Color pots on three SAADC channels.

use super::Irqs;
use embassy_futures::block_on;
use embassy_nrf::saadc::{self, ChannelConfig, Resolution, Saadc};
use embassy_nrf::{peripherals, Peripheral};
use ws2812_tester::input::PotSource;

pub struct SaadcPots<'d> {
    saadc: Saadc<'d, 3>,
}

impl<'d> SaadcPots<'d> {
    /// Red, green and blue wipers, in that order.
    pub fn new(
        adc: peripherals::SAADC,
        red: impl Peripheral<P = impl saadc::Input> + 'd,
        green: impl Peripheral<P = impl saadc::Input> + 'd,
        blue: impl Peripheral<P = impl saadc::Input> + 'd,
    ) -> Self {
        let mut config = saadc::Config::default();
        config.resolution = Resolution::_12BIT;

        let saadc = Saadc::new(
            adc,
            Irqs,
            config,
            [
                ChannelConfig::single_ended(red),
                ChannelConfig::single_ended(green),
                ChannelConfig::single_ended(blue),
            ],
        );
        block_on(saadc.calibrate());

        Self { saadc }
    }
}

impl PotSource for SaadcPots<'_> {
    fn sample(&mut self) -> [u16; 3] {
        let mut buf = [0i16; 3];
        block_on(self.saadc.sample(&mut buf));
        // Single-ended readings can dip just below 0 near ground.
        buf.map(|raw| raw.max(0) as u16)
    }
}
