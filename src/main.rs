//! WS2812 tester firmware for the nRF52840.
//!
//! The scheduler runs as a plain blocking loop in thread mode. The only
//! async work is the quadrature decoder, which runs on a higher-priority
//! interrupt executor so encoder edges are caught mid-frame.

#![no_std]
#![no_main]

mod board;

use board::encoder::{quadrature_task, SharedCounter};
use board::pots::SaadcPots;
use board::strip::{led_buffer, BlockingStrip};
use board::{halt, oled, Irqs, Uptime};
use cortex_m_rt::entry;
use defmt::{error, info};
use embassy_executor::InterruptExecutor;
use embassy_nrf::gpio::AnyPin;
use embassy_nrf::interrupt;
use embassy_nrf::interrupt::{InterruptExt, Priority};
use embassy_nrf::{rng, twim};
use embassy_nrf_ws2812_pwm::Ws2812;
use ws2812_tester::clock::Clock;
use ws2812_tester::config;
use ws2812_tester::input::{ColorPots, EncoderConfig, PotConfig, SizeEncoder};
use ws2812_tester::strip::LedStrip;
use ws2812_tester::ui::{OledDisplay, Screensaver, ScreensaverConfig};
use ws2812_tester::{Scheduler, SchedulerConfig};
use {defmt_rtt as _, panic_probe as _};

static EXECUTOR_HIGH: InterruptExecutor = InterruptExecutor::new();

#[interrupt]
unsafe fn EGU1_SWI1() {
    EXECUTOR_HIGH.on_interrupt()
}

#[entry]
fn main() -> ! {
    let p = embassy_nrf::init(Default::default());
    info!("{} v{} starting", config::FW_NAME, config::FW_REVISION);

    // - Encoder ----------------------------------------
    interrupt::EGU1_SWI1.set_priority(Priority::P6);
    let spawner = EXECUTOR_HIGH.start(interrupt::EGU1_SWI1);
    if spawner
        .spawn(quadrature_task(AnyPin::from(p.P1_01), AnyPin::from(p.P1_02)))
        .is_err()
    {
        error!("Encoder: failed to spawn decoder task");
    }

    // - Display ----------------------------------------
    let mut i2c_config = twim::Config::default();
    i2c_config.frequency = twim::Frequency::K400;
    let i2c = twim::Twim::new(p.TWISPI0, Irqs, p.P0_26, p.P0_27, i2c_config);
    let panel = match oled::init(i2c) {
        Ok(panel) => panel,
        Err(e) => halt(e),
    };
    info!("Display: SSD1306 ready");

    // - Strip ------------------------------------------
    let buffer = match led_buffer() {
        Ok(buffer) => buffer,
        Err(e) => halt(e.into()),
    };
    let writer = BlockingStrip::new(Ws2812::new(p.PWM0, p.P1_10, buffer));
    info!("Strip: PWM0 ready, up to {} LEDs", config::STRIP_MAX_LEDS);

    // - Screensaver seed -------------------------------
    let mut seed = [0u8; 8];
    rng::Rng::new(p.RNG, Irqs).blocking_fill_bytes(&mut seed);

    let clock = Uptime;
    let now = clock.now();
    let pots = ColorPots::new(
        SaadcPots::new(p.SAADC, p.P0_02, p.P0_03, p.P0_04),
        PotConfig::default(),
        now,
    );
    let encoder = SizeEncoder::new(SharedCounter, EncoderConfig::default(), now);
    let display = OledDisplay::new(
        panel,
        Screensaver::new(ScreensaverConfig::default(), u64::from_le_bytes(seed)),
    );
    let strip = LedStrip::new(writer, config::STRIP_MAX_LEDS);

    let mut scheduler = Scheduler::new(clock, pots, encoder, display, strip, SchedulerConfig::default());
    info!("Startup complete");

    scheduler.run()
}
