//! Blinking-eyes screensaver timing.
//!
//! Each draw picks open or closed eyes at random and then holds that frame
//! for its minimum time. Nothing is redrawn while a hold is running.

use crate::clock::Millis;
use crate::config;

/// The two screensaver frames.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Eyes {
    Open,
    Closed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScreensaverConfig {
    /// Hold time (ms) after drawing open eyes.
    pub open_ms: u64,
    /// Hold time (ms) after drawing a blink.
    pub blink_ms: u64,
    /// A roll in `0..100` at or below this draws open eyes.
    pub open_threshold: u8,
}

impl Default for ScreensaverConfig {
    fn default() -> Self {
        Self {
            open_ms: config::SCREENSAVER_EYES_OPEN_MS,
            blink_ms: config::SCREENSAVER_BLINK_MS,
            open_threshold: config::SCREENSAVER_OPEN_THRESHOLD,
        }
    }
}

pub struct Screensaver {
    config: ScreensaverConfig,
    rng: fastrand::Rng,
    hold_until: Option<Millis>,
}

impl Screensaver {
    pub fn new(config: ScreensaverConfig, seed: u64) -> Self {
        Self {
            config,
            rng: fastrand::Rng::with_seed(seed),
            hold_until: None,
        }
    }

    /// Forget the running hold so the next poll draws straight away.
    pub fn restart(&mut self) {
        self.hold_until = None;
    }

    /// The frame to draw now, or `None` while the last one is still held.
    pub fn poll(&mut self, now: Millis) -> Option<Eyes> {
        if self.hold_until.is_some_and(|until| now < until) {
            return None;
        }

        let (eyes, hold) = if self.rng.u8(0..100) <= self.config.open_threshold {
            (Eyes::Open, self.config.open_ms)
        } else {
            (Eyes::Closed, self.config.blink_ms)
        };
        self.hold_until = Some(now + hold);
        Some(eyes)
    }
}
