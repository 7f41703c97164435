//! Color potentiometers.
//!
//! Each update averages a burst of raw ADC readings per channel. The
//! rounded mean is saturated near both ends of travel, where cheap pots
//! never settle on a clean 0 or full scale.

use crate::clock::Millis;
use crate::config;
use smart_leds::RGB8;

/// Raw analog readings for the red, green and blue pots, in that order.
pub trait PotSource {
    fn sample(&mut self) -> [u16; 3];
}

/// Averaging and saturation parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PotConfig {
    /// Raw readings averaged per channel. 0 is treated as 1.
    pub samples: u16,
    /// Right shift from a raw reading to 8 bits. 16 or more reads as 0.
    pub adc_shift: u8,
    /// Means at or above this read as 255.
    pub upper_bound: u8,
    /// Means at or below this read as 0.
    pub lower_bound: u8,
}

impl Default for PotConfig {
    fn default() -> Self {
        Self {
            samples: config::POT_AVG_SAMPLES,
            adc_shift: config::POT_ADC_SHIFT,
            upper_bound: config::POT_UPPER_BOUND,
            lower_bound: config::POT_LOWER_BOUND,
        }
    }
}

impl PotConfig {
    /// Collapse an averaged value onto the rails when it is close enough.
    pub fn saturate(&self, value: u8) -> u8 {
        if value >= self.upper_bound {
            255
        } else if value <= self.lower_bound {
            0
        } else {
            value
        }
    }

    fn scale(&self, raw: u16) -> u32 {
        u32::from(raw.checked_shr(u32::from(self.adc_shift)).unwrap_or(0)).min(255)
    }
}

/// The three color pots and their change tracking.
pub struct ColorPots<S> {
    source: S,
    config: PotConfig,
    rgb: RGB8,
    last_change: Millis,
}

impl<S: PotSource> ColorPots<S> {
    /// Take an initial reading. The pots count as having changed at `now`.
    pub fn new(source: S, config: PotConfig, now: Millis) -> Self {
        let mut pots = Self {
            source,
            config,
            rgb: RGB8::default(),
            last_change: now,
        };
        pots.rgb = pots.sample();
        pots
    }

    /// Read one averaged, saturated triple without touching the stored state.
    pub fn sample(&mut self) -> RGB8 {
        let n = u32::from(self.config.samples.max(1));
        let mut sums = [0u32; 3];

        for _ in 0..n {
            let raw = self.source.sample();
            for (sum, value) in sums.iter_mut().zip(raw) {
                *sum += self.config.scale(value);
            }
        }

        // Round half up; the mean of values in 0..=255 stays in 0..=255.
        let [r, g, b] = sums.map(|sum| self.config.saturate(((sum + n / 2) / n) as u8));
        RGB8::new(r, g, b)
    }

    /// Sample the pots and report whether any channel moved.
    pub fn update(&mut self, now: Millis) -> bool {
        let rgb = self.sample();
        let changed = rgb != self.rgb;
        if changed {
            self.last_change = now;
        }
        self.rgb = rgb;
        changed
    }

    /// All three pots sit at their 0 position.
    pub fn zeroed(&self) -> bool {
        self.rgb == RGB8::default()
    }

    /// Values from the last `update()` call.
    pub fn rgb(&self) -> RGB8 {
        self.rgb
    }

    /// Time (ms) since the last registered change.
    pub fn time_since_change(&self, now: Millis) -> u64 {
        now.saturating_since(self.last_change)
    }
}
