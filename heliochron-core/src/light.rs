//! Light-level drop detection policy
//!
//! The measurement window is bounded by a drop below the armed baseline
//! and a recovery back to it. The two comparisons are asymmetric: a drop
//! requires the level to fall a full threshold below the baseline, while
//! recovery requires a return all the way to the baseline. The gap between
//! the two keeps the detector from oscillating when the level hovers near
//! the drop point.

/// Default drop threshold in ADC counts
pub const DROP_THRESHOLD: u16 = 50;

/// Hysteresis comparisons against an armed baseline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DropDetector {
    /// How far the level must fall below the baseline to count as a drop
    pub threshold: u16,
}

impl DropDetector {
    /// Detector with the given threshold
    pub const fn new(threshold: u16) -> Self {
        Self { threshold }
    }

    /// True when `reading` is more than the threshold below `baseline`
    pub fn is_drop(&self, baseline: u16, reading: u16) -> bool {
        reading.saturating_add(self.threshold) < baseline
    }

    /// True when `reading` has returned to or above `baseline`
    pub fn is_recovery(&self, baseline: u16, reading: u16) -> bool {
        reading >= baseline
    }
}

impl Default for DropDetector {
    fn default() -> Self {
        Self::new(DROP_THRESHOLD)
    }
}
