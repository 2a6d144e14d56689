//! Busy-wait delay provider

use embassy_time::{block_for, Duration};
use heliochron_hal::delay::DelayUs;

/// Microsecond busy-wait over the system timer
///
/// The display bus holds its select lines for a fixed settle window
/// between edges. Those windows are far below the scheduler's useful
/// resolution, so they spin instead of yielding.
#[derive(Debug, Clone, Copy, Default)]
pub struct BusyDelay;

impl BusyDelay {
    pub fn new() -> Self {
        Self
    }
}

impl DelayUs for BusyDelay {
    fn delay_us(&mut self, us: u32) {
        block_for(Duration::from_micros(u64::from(us)));
    }
}
