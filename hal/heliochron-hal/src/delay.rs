//! Short busy-wait delays
//!
//! The shift-register protocol holds its clock-select lines for a fixed
//! settle time between edges. These delays are busy-waits of a few tens of
//! microseconds, not suspension points, so they get their own narrow trait
//! instead of an async timer.

/// Microsecond-scale busy-wait delay provider
pub trait DelayUs {
    /// Block for at least `us` microseconds
    fn delay_us(&mut self, us: u32);
}

/// Delay provider that returns immediately
///
/// Used by unit tests to run the transmission protocol without wall-clock
/// waits.
#[derive(Debug, Clone, Copy, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct NoopDelay;

impl DelayUs for NoopDelay {
    fn delay_us(&mut self, _us: u32) {}
}
