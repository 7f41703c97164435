//! Unified error type for the tester.
//!
//! We avoid `alloc` - all error variants carry only fixed-size data.
//! Implements `defmt::Format` for efficient on-target logging.
//!
//! Only start-up can fail fatally. Steady-state driver faults are logged
//! and dropped by the component that hit them.

/// Top-level error type used across the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// The OLED panel failed.
    Display(DisplayFault),

    /// The WS2812 strip driver failed.
    Strip(StripFault),
}

/// What went wrong with the display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayFault {
    /// Controller did not acknowledge its init sequence.
    Init,
    /// Frame buffer could not be transferred to the panel.
    Flush,
}

/// What went wrong with the strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StripFault {
    /// PWM peripheral rejected its configuration.
    Init,
    /// A frame could not be sent.
    Write,
}

pub type Result<T> = core::result::Result<T, Error>;

// Convenience conversions

impl From<DisplayFault> for Error {
    fn from(e: DisplayFault) -> Self {
        Error::Display(e)
    }
}

impl From<StripFault> for Error {
    fn from(e: StripFault) -> Self {
        Error::Strip(e)
    }
}
