//! Application-wide constants and compile-time configuration.
//!
//! All hardware pin assignments, timing parameters, and scaling
//! constants live here so they can be tuned in one place.

// Firmware info (shown at the top of the display)

/// Name of the firmware.
pub const FW_NAME: &str = "WS2812 Tester";

/// Revision of the firmware, taken from the package version.
pub const FW_REVISION: &str = env!("CARGO_PKG_VERSION");

/// Title projected on the top of the status screen (two lines).
pub const TITLE: &str = concat!("WS2812 Tester v", env!("CARGO_PKG_VERSION"), "\nLED strip test rig");

// GPIO pin assignments (nRF52840-DK defaults)
//
// Logical names only; the concrete `embassy_nrf::peripherals::*` are
// picked in `main.rs`.  Adjust for your own rig.
//
//   Pot RED        → P0.02 (AIN0)
//   Pot GREEN      → P0.03 (AIN1)
//   Pot BLUE       → P0.04 (AIN2)
//   Encoder A      → P1.01
//   Encoder B      → P1.02
//   WS2812 DIN     → P1.10
//   I²C SDA        → P0.26
//   I²C SCL        → P0.27

// Color pots

/// Number of ADC samples averaged per channel to compensate for noisy pots.
pub const POT_AVG_SAMPLES: u16 = 255;

/// Right shift from a raw SAADC count (12-bit) to an 8-bit intensity.
pub const POT_ADC_SHIFT: u8 = 4;

/// Averaged values at or above this collapse to 255 (end-of-travel noise).
pub const POT_UPPER_BOUND: u8 = 253;

/// Averaged values at or below this collapse to 0.
pub const POT_LOWER_BOUND: u8 = 0;

// Rotary encoder

/// Quiet time (ms) before a new encoder position is applied to the strip.
pub const ENCODER_SETTLE_MS: u64 = 20;

/// Right shift from quadrature quarter-steps to detents.
/// The encoder produces 4 quarter-steps per detent, so shift by 2.
pub const ENCODER_STEP_SHIFT: u8 = 2;

// WS2812 strip

/// Most LEDs a single frame may address. Sizes the PWM sequence buffer.
pub const STRIP_MAX_LEDS: usize = 300;

// Screensaver

/// Inactivity (ms) after which the screensaver is shown, provided
/// the color pots are all at 0.
pub const IDLE_AFTER_MS: u64 = 20_000;

/// Minimum time (ms) the eyes stay open.
pub const SCREENSAVER_EYES_OPEN_MS: u64 = 3_000;

/// Minimum time (ms) a blink lasts.
pub const SCREENSAVER_BLINK_MS: u64 = 150;

/// Draws in `0..100` at or below this value show open eyes.
pub const SCREENSAVER_OPEN_THRESHOLD: u8 = 60;

// OLED display

/// Width of the display in pixels.
pub const OLED_WIDTH: u32 = 128;

/// Height of the display in pixels.
pub const OLED_HEIGHT: u32 = 64;

/// I²C address of the display.
pub const OLED_I2C_ADDRESS: u8 = 0x3C;
