//! Strip-length rotary encoder with a settle window.
//!
//! Every raw position change clears `ready` and restarts the settle timer.
//! Only after the position has held still for the full settle duration is
//! it copied into `ready_pos`, which is what drives the strip. This is a
//! debounce, not a low-pass filter: intermediate positions passed through
//! while turning never become ready.

use crate::clock::Millis;
use crate::config;

/// Raw incremental counter fed by the quadrature decoder.
pub trait QuadratureCounter {
    fn read(&mut self) -> i32;
    fn write(&mut self, value: i32);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EncoderConfig {
    /// Quiet time (ms) before a position becomes ready.
    pub settle_ms: u64,
    /// Right shift from raw counts to detents. 32 or more reads as 0.
    pub step_shift: u8,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            settle_ms: config::ENCODER_SETTLE_MS,
            step_shift: config::ENCODER_STEP_SHIFT,
        }
    }
}

pub struct SizeEncoder<Q> {
    counter: Q,
    config: EncoderConfig,
    saved_pos: u32,
    ready_pos: u32,
    ready: bool,
    ready_at: Millis,
    last_change: Millis,
}

impl<Q: QuadratureCounter> SizeEncoder<Q> {
    /// Adopt the current counter value as the initial ready position and
    /// start a settle window from `now`.
    pub fn new(counter: Q, config: EncoderConfig, now: Millis) -> Self {
        let mut enc = Self {
            counter,
            config,
            saved_pos: 0,
            ready_pos: 0,
            ready: false,
            ready_at: now,
            last_change: now,
        };
        enc.saved_pos = enc.read_position();
        enc.ready_pos = enc.saved_pos;
        enc.arm(now);
        enc
    }

    /// Detent position, with negative counts folded back to 0.
    fn read_position(&mut self) -> u32 {
        let pos = self
            .counter
            .read()
            .checked_shr(u32::from(self.config.step_shift))
            .unwrap_or(0);
        if pos < 0 {
            // Stop the raw counter from drifting further below zero.
            self.counter.write(0);
            return 0;
        }
        pos as u32
    }

    fn arm(&mut self, now: Millis) {
        self.ready = false;
        self.ready_at = now + self.config.settle_ms;
    }

    /// Read the counter. Returns true iff the raw position changed.
    pub fn update(&mut self, now: Millis) -> bool {
        let pos = self.read_position();

        if pos != self.saved_pos {
            self.saved_pos = pos;
            self.last_change = now;
            self.arm(now);
            return true;
        }

        if !self.ready && now >= self.ready_at {
            self.ready_pos = pos;
            self.ready = true;
        }

        false
    }

    /// The position has been stable for the settle duration.
    pub fn ready(&self) -> bool {
        self.ready
    }

    /// Last settled position.
    pub fn ready_pos(&self) -> u32 {
        self.ready_pos
    }

    /// Instantaneous position, settled or not.
    pub fn position(&self) -> u32 {
        self.saved_pos
    }

    pub fn time_since_change(&self, now: Millis) -> u64 {
        now.saturating_since(self.last_change)
    }

    #[cfg(test)]
    pub(crate) fn counter(&self) -> &Q {
        &self.counter
    }
}
