//! Action button edge detection
//!
//! The meter reacts to presses, not levels. The detector remembers the
//! last raw sample and reports a press exactly when the level reads high
//! after a non-high sample. There is no debounce time window: a bounce
//! that reads a transient low registers as a second press.

/// Press detector for a level-sensed button
#[derive(Debug, Clone, Copy, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonEdge {
    was_high: bool,
}

impl ButtonEdge {
    /// Detector that treats the first high sample as a press
    pub const fn new() -> Self {
        Self { was_high: false }
    }

    /// Feed one raw sample; true exactly when this sample is a fresh press
    pub fn update(&mut self, raw_high: bool) -> bool {
        let pressed = raw_high && !self.was_high;
        self.was_high = raw_high;
        pressed
    }
}
