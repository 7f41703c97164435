//! Idle tracking - decides when the rig counts as unused.
//!
//! The rig goes idle once the color pots sit at zero and neither the pots
//! nor the encoder have moved for the idle threshold. Any raw input
//! change wakes it again. There is no timeout out of `Idle`.

use crate::config;

/// Whether the idle screen should be shown, from the raw conditions.
///
/// All three must hold: zeroed color, quiet pots, quiet encoder.
pub fn idle_due(zeroed: bool, pot_quiet_ms: u64, encoder_quiet_ms: u64, threshold_ms: u64) -> bool {
    zeroed && pot_quiet_ms >= threshold_ms && encoder_quiet_ms >= threshold_ms
}

/// Activity state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Activity {
    /// Normal operation - status screen, strip follows the inputs.
    Active,
    /// Screensaver - only the inputs and the idle visual are serviced.
    Idle,
}

/// Owns the idle-screen flag and its two transitions.
pub struct IdleMonitor {
    state: Activity,
    threshold_ms: u64,
}

impl IdleMonitor {
    pub fn new(threshold_ms: u64) -> Self {
        Self {
            state: Activity::Active,
            threshold_ms,
        }
    }

    pub fn state(&self) -> Activity {
        self.state
    }

    pub fn is_idle(&self) -> bool {
        self.state == Activity::Idle
    }

    /// Enter `Idle` if due. Returns true only on the transition itself.
    pub fn try_sleep(&mut self, zeroed: bool, pot_quiet_ms: u64, encoder_quiet_ms: u64) -> bool {
        if self.is_idle() || !idle_due(zeroed, pot_quiet_ms, encoder_quiet_ms, self.threshold_ms) {
            return false;
        }
        info!(
            "Idle: inputs quiet for {} ms and color zeroed, showing screensaver",
            pot_quiet_ms.min(encoder_quiet_ms)
        );
        self.state = Activity::Idle;
        true
    }

    /// Input activity seen. Returns true if this ended an idle period.
    pub fn wake(&mut self) -> bool {
        if !self.is_idle() {
            return false;
        }
        info!("Idle: input activity, waking");
        self.state = Activity::Active;
        true
    }
}

impl Default for IdleMonitor {
    fn default() -> Self {
        Self::new(config::IDLE_AFTER_MS)
    }
}
