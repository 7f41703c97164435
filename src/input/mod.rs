//! Operator inputs - three color pots and the strip-length encoder.
//!
//! Both leaves follow the same contract: `update(now)` samples the
//! hardware and reports whether anything changed, and
//! `time_since_change(now)` reports how long the input has been quiet.
//! The scheduler is the only caller.
//!
//! ## Components
//!
//! - **Pots**: 3 potentiometers on SAADC channels, averaged and saturated
//! - **Encoder**: quadrature knob with a settle window before a new
//!   length becomes authoritative

pub mod encoder;
pub mod pots;
pub mod quadrature;

#[cfg(test)]
mod tests;

pub use encoder::{EncoderConfig, QuadratureCounter, SizeEncoder};
pub use pots::{ColorPots, PotConfig, PotSource};
pub use quadrature::QuadratureDecoder;
