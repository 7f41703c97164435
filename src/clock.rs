//! Monotonic millisecond time base.
//!
//! A `u64` millisecond counter outlives the hardware by several hundred
//! million years, so instants never wrap. Elapsed-time math saturates at
//! zero if an "earlier" instant turns out to be later.

use core::ops::Add;

/// Milliseconds since boot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Millis(pub u64);

impl Millis {
    pub const ZERO: Millis = Millis(0);

    /// Raw millisecond count.
    pub const fn as_millis(self) -> u64 {
        self.0
    }

    /// Milliseconds elapsed from `earlier` to `self`, or 0 if `earlier` is later.
    pub const fn saturating_since(self, earlier: Millis) -> u64 {
        self.0.saturating_sub(earlier.0)
    }
}

impl Add<u64> for Millis {
    type Output = Millis;

    fn add(self, ms: u64) -> Millis {
        Millis(self.0.saturating_add(ms))
    }
}

/// Source of the current time.
pub trait Clock {
    fn now(&self) -> Millis;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> Millis {
        (**self).now()
    }
}
