//! State machine definition
//!
//! Everything the meter shows and how it reacts to the button is a
//! function of the current state and an event.

use super::events::Event;

/// Meter states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum State {
    /// No measurement in progress; the display mirrors the live light level
    Inactive,
    /// Measurement armed or running
    Measuring {
        /// Light level recorded when the measurement was armed
        baseline: u16,
        /// Latched once the level falls a full threshold below the
        /// baseline; never cleared while measuring
        drop_reached: bool,
    },
    /// Measurement complete; the display holds the result until acknowledged
    Finished,
}

impl State {
    /// Check if a measurement is in progress
    pub fn is_measuring(&self) -> bool {
        matches!(self, State::Measuring { .. })
    }

    /// Check if the interesting window is open (drop seen, recovery not yet)
    pub fn in_dark_window(&self) -> bool {
        matches!(
            self,
            State::Measuring {
                drop_reached: true,
                ..
            }
        )
    }

    /// Baseline recorded at arming, if measuring
    pub fn baseline(&self) -> Option<u16> {
        match self {
            State::Measuring { baseline, .. } => Some(*baseline),
            _ => None,
        }
    }

    /// Process an event and return the next state
    ///
    /// This is the core state transition logic.
    pub fn transition(self, event: Event) -> Self {
        use Event::*;
        use State::*;

        match (self, event) {
            // Arming: the press-time light level becomes the baseline
            (Inactive, ButtonPressed { light_level }) => Measuring {
                baseline: light_level,
                drop_reached: false,
            },

            // The drop condition latches
            (Measuring { baseline, .. }, DropDetected) => Measuring {
                baseline,
                drop_reached: true,
            },

            // Recovery only ends a measurement after the drop has latched
            (
                Measuring {
                    drop_reached: true, ..
                },
                LightRecovered,
            ) => Finished,

            // Acknowledge: discard the result
            (Finished, ButtonPressed { .. }) => Inactive,

            // Default: stay in current state
            _ => self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(level: u16) -> Event {
        Event::ButtonPressed { light_level: level }
    }

    #[test]
    fn test_press_arms_measurement() {
        let state = State::Inactive;
        let next = state.transition(press(500));
        assert_eq!(
            next,
            State::Measuring {
                baseline: 500,
                drop_reached: false
            }
        );
    }

    #[test]
    fn test_drop_latches_once() {
        let armed = State::Measuring {
            baseline: 500,
            drop_reached: false,
        };
        let dropped = armed.transition(Event::DropDetected);
        assert_eq!(
            dropped,
            State::Measuring {
                baseline: 500,
                drop_reached: true
            }
        );

        // A second drop event changes nothing
        assert_eq!(dropped.transition(Event::DropDetected), dropped);
    }

    #[test]
    fn test_recovery_before_drop_is_ignored() {
        let armed = State::Measuring {
            baseline: 500,
            drop_reached: false,
        };
        assert_eq!(armed.transition(Event::LightRecovered), armed);
    }

    #[test]
    fn test_recovery_after_drop_finishes() {
        let dark = State::Measuring {
            baseline: 500,
            drop_reached: true,
        };
        assert_eq!(dark.transition(Event::LightRecovered), State::Finished);
    }

    #[test]
    fn test_press_acknowledges_result() {
        let next = State::Finished.transition(press(300));
        assert_eq!(next, State::Inactive);
    }

    #[test]
    fn test_press_during_measurement_is_ignored() {
        let armed = State::Measuring {
            baseline: 500,
            drop_reached: false,
        };
        assert_eq!(armed.transition(press(500)), armed);

        let dark = State::Measuring {
            baseline: 500,
            drop_reached: true,
        };
        assert_eq!(dark.transition(press(500)), dark);
    }

    #[test]
    fn test_light_events_outside_measurement_are_ignored() {
        for event in [Event::DropDetected, Event::LightRecovered] {
            assert_eq!(State::Inactive.transition(event), State::Inactive);
            assert_eq!(State::Finished.transition(event), State::Finished);
        }
    }

    #[test]
    fn test_full_cycle() {
        let state = State::Inactive;
        let state = state.transition(press(820));
        assert!(state.is_measuring());
        assert_eq!(state.baseline(), Some(820));
        assert!(!state.in_dark_window());

        let state = state.transition(Event::DropDetected);
        assert!(state.in_dark_window());

        let state = state.transition(Event::LightRecovered);
        assert_eq!(state, State::Finished);

        let state = state.transition(press(820));
        assert_eq!(state, State::Inactive);
    }
}
