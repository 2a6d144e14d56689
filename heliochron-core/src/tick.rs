//! Tick-interrupt shared state
//!
//! The periodic interrupt and the control loop communicate through exactly
//! two values: the refresh flag (set by the interrupt, consumed by the
//! loop) and the elapsed-seconds counter (incremented by the interrupt
//! while a measurement runs, read by the loop). Both are atomics, so a
//! read torn by the interrupt cannot be observed. The counting gate is a
//! third atomic: the interrupt never inspects the state machine, it only
//! checks the gate the control loop maintains.

use portable_atomic::{AtomicBool, AtomicU16, Ordering};

/// State shared between the tick interrupt and the control loop
///
/// Designed to live in a `static`; every method takes `&self`.
pub struct TickShared {
    refresh_due: AtomicBool,
    counting: AtomicBool,
    seconds: AtomicU16,
}

impl TickShared {
    pub const fn new() -> Self {
        Self {
            refresh_due: AtomicBool::new(false),
            counting: AtomicBool::new(false),
            seconds: AtomicU16::new(0),
        }
    }

    /// Tick-interrupt entry point
    ///
    /// Marks a refresh due and, while a measurement is running, adds one
    /// second. Safe to call from interrupt context.
    pub fn on_tick(&self) {
        self.refresh_due.store(true, Ordering::Relaxed);
        if self.counting.load(Ordering::Relaxed) {
            self.seconds.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Mark a refresh due from the control context
    pub fn arm_refresh(&self) {
        self.refresh_due.store(true, Ordering::Relaxed);
    }

    /// Consume a pending refresh, if any
    pub fn take_refresh(&self) -> bool {
        self.refresh_due.swap(false, Ordering::Relaxed)
    }

    /// Zero the seconds counter and open the counting gate
    pub fn start_counting(&self) {
        self.seconds.store(0, Ordering::Relaxed);
        self.counting.store(true, Ordering::Relaxed);
    }

    /// Close the counting gate and return the final count
    pub fn stop_counting(&self) -> u16 {
        self.counting.store(false, Ordering::Relaxed);
        self.seconds.load(Ordering::Relaxed)
    }

    /// Seconds accumulated so far
    pub fn seconds(&self) -> u16 {
        self.seconds.load(Ordering::Relaxed)
    }
}

impl Default for TickShared {
    fn default() -> Self {
        Self::new()
    }
}
