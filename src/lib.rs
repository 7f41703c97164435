//! WS2812 strip tester - host-testable core.
//!
//! Three pots pick a color, a rotary encoder picks how many LEDs light up,
//! and an OLED shows both. After a quiet spell with the color at zero the
//! display drops into a blinking-eyes screensaver until an input moves.
//!
//! Everything in this crate is hardware-agnostic and runs on the host:
//! the nRF52840 adapters live in the firmware binary (`src/main.rs` and
//! `src/board/`) and plug into the traits defined here.
//!
//! Usage: `cargo test` for the core, `cargo run --release --features
//! embedded --target thumbv7em-none-eabihf` to flash the rig.

#![cfg_attr(not(test), no_std)]

// Must come first so the logging macros are visible to every module.
#[macro_use]
mod fmt;

pub mod clock;
pub mod config;
pub mod error;
pub mod idle;
pub mod input;
pub mod scheduler;
pub mod strip;
pub mod ui;

pub use error::{Error, Result};
pub use scheduler::{Scheduler, SchedulerConfig, Tick};
pub use smart_leds::RGB8;
