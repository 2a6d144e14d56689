//! Free-running tick source over the system timer

use embassy_time::Instant;
use heliochron_hal::timer::TickTimer;

/// Tick source backed by the always-on system timer
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemTimer;

impl SystemTimer {
    pub fn new() -> Self {
        Self
    }
}

impl TickTimer for SystemTimer {
    fn free_running_ticks(&mut self) -> u64 {
        Instant::now().as_ticks()
    }

    fn ticks_to_millis(&self, ticks: u64) -> u64 {
        ticks * 1000 / embassy_time::TICK_HZ
    }
}
