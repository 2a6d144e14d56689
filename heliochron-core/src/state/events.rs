//! Events that trigger state transitions

/// Events that can trigger state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    // User events
    /// Action button went from released to pressed; carries the light
    /// level sampled at press time (the baseline when arming)
    ButtonPressed {
        /// ADC reading taken when the press was detected
        light_level: u16,
    },

    // Light events
    /// Level fell more than the drop threshold below the armed baseline
    DropDetected,
    /// Level returned to or above the armed baseline
    LightRecovered,
}

impl Event {
    /// Check if this event is user-initiated
    pub fn is_user_event(&self) -> bool {
        matches!(self, Event::ButtonPressed { .. })
    }

    /// Check if this event comes from the light monitor
    pub fn is_light_event(&self) -> bool {
        matches!(self, Event::DropDetected | Event::LightRecovered)
    }
}
