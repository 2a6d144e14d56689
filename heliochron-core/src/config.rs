//! Instrument configuration
//!
//! The meter has a single tunable: how far the light level must fall
//! below the armed baseline before the dark window opens. Board-level
//! timing (bus settle delay, poll cadence) lives with the drivers and the
//! firmware.

use crate::light::DROP_THRESHOLD;

/// Tunable measurement parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MeterConfig {
    /// Drop threshold in ADC counts
    pub drop_threshold: u16,
}

impl Default for MeterConfig {
    fn default() -> Self {
        Self {
            drop_threshold: DROP_THRESHOLD,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_detector_constant() {
        assert_eq!(MeterConfig::default().drop_threshold, DROP_THRESHOLD);
    }
}
