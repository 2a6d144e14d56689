//! Sub-second time source trait

/// Trait for reading the position inside the current second
///
/// Backed by the same free-running counter that paces the 1 Hz tick, so
/// the value wraps exactly when the tick fires. The stopwatch relies on
/// that alignment for its rollover borrow.
pub trait SubsecondClock {
    /// Milliseconds into the current second, 0..=999
    fn subsec_millis(&mut self) -> u16;
}
