//! Sub-second clock over the free-running hardware timer

use heliochron_core::traits::SubsecondClock;
use heliochron_hal::timer::TickTimer;

/// Millisecond offset source backed by a free-running tick counter
///
/// The counter itself never stops; the offset is its current value
/// reduced to milliseconds within the running second.
pub struct TickClock<T> {
    timer: T,
}

impl<T: TickTimer> TickClock<T> {
    pub fn new(timer: T) -> Self {
        Self { timer }
    }
}

impl<T: TickTimer> SubsecondClock for TickClock<T> {
    fn subsec_millis(&mut self) -> u16 {
        let ticks = self.timer.free_running_ticks();
        (self.timer.ticks_to_millis(ticks) % 1000) as u16
    }
}
