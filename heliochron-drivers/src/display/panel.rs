//! Three-digit 7-segment panel
//!
//! Composes glyphs for the three display positions and pushes them over
//! the shift-register bus, least significant digit first. The panel is
//! common-anode, a segment lights when its line is low, so every pattern
//! is inverted as it goes out.

use heliochron_core::segments::{self, DASH, DOT};
use heliochron_core::traits::SegmentDisplay;
use heliochron_core::value::DisplayValue;
use heliochron_hal::delay::DelayUs;
use heliochron_hal::gpio::OutputPin;

use super::bus::{Channel, ShiftBus};

/// Driver for the 3-digit common-anode display stack
pub struct SegmentPanel<A, B, D, T> {
    bus: ShiftBus<A, B, D, T>,
}

impl<A, B, D, T> SegmentPanel<A, B, D, T>
where
    A: OutputPin,
    B: OutputPin,
    D: OutputPin,
    T: DelayUs,
{
    /// Builds the panel over its bus pins and parks the bus on idle
    pub fn new(select_a: A, select_b: B, data: D, delay: T) -> Self {
        Self {
            bus: ShiftBus::new(select_a, select_b, data, delay),
        }
    }

    /// Inverts a lit-segments pattern into line levels and transmits it
    fn send(&mut self, channel: Channel, pattern: u8) {
        self.bus.write(channel, !pattern);
    }
}

impl<A, B, D, T> SegmentDisplay for SegmentPanel<A, B, D, T>
where
    A: OutputPin,
    B: OutputPin,
    D: OutputPin,
    T: DelayUs,
{
    fn render(&mut self, value: DisplayValue) {
        let [units, tens, hundreds] = value.digits();
        self.send(Channel::First, segments::encode(units));
        self.send(Channel::Second, segments::encode(tens));
        let mut pattern = segments::encode(hundreds);
        if value.overflow() {
            pattern |= DOT;
        }
        self.send(Channel::Third, pattern);
    }

    fn render_placeholder(&mut self) {
        self.send(Channel::First, DASH);
        self.send(Channel::Second, DASH);
        self.send(Channel::Third, DASH);
    }
}
