//! Hardware timer abstraction
//!
//! The elapsed-time tracker needs the position of a free-running counter
//! inside the current second to compute sub-second offsets. The periodic
//! 1 Hz interrupt itself is wired by the platform (a timer ISR or an async
//! tick task) and is not part of this trait, but it must fire when the
//! counter crosses a whole-second boundary: the rollover correction in the
//! tracker assumes the counted seconds and the sub-second position wrap
//! together.

/// Free-running tick counter access
pub trait TickTimer {
    /// Current free-running tick count
    fn free_running_ticks(&mut self) -> u64;

    /// Convert a tick count to milliseconds
    fn ticks_to_millis(&self, ticks: u64) -> u64;
}
