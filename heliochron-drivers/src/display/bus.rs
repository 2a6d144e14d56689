//! Clock-multiplexed shift-register bus
//!
//! Three shift registers share a single serial data line. Their clock
//! inputs hang off a 2-to-4 line decoder, so two select pins address all
//! three: the decoder drives every output high except the one matching
//! the select code, and the unused fourth output is the idle position.
//!
//! Pulsing a register's clock means dropping the select pins to that
//! register's code, holding through the settle window, then parking the
//! decoder back on idle. The deselect edge is what the register sees as
//! its rising clock, so the data line must already carry the bit when
//! the selection is released.

use heliochron_hal::delay::DelayUs;
use heliochron_hal::gpio::OutputPin;

/// Hold time between clock-select edges in microseconds
pub const SETTLE_US: u32 = 100;

/// One of the three shift registers behind the decoder
///
/// The decoder input code is `A + 2 * B` with select pin A as the low
/// order bit; each channel names the decoder output its clock hangs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Channel {
    /// Decoder output 0, both selects low
    First,
    /// Decoder output 1, select B low
    Second,
    /// Decoder output 2, select A low. This register latches one clock
    /// behind its shift stage, which the bus compensates for with a
    /// trailing pulse.
    Third,
}

/// Serial bus over two select pins, one data pin and a delay source
pub struct ShiftBus<A, B, D, T> {
    select_a: A,
    select_b: B,
    data: D,
    delay: T,
}

impl<A, B, D, T> ShiftBus<A, B, D, T>
where
    A: OutputPin,
    B: OutputPin,
    D: OutputPin,
    T: DelayUs,
{
    /// Takes ownership of the bus pins and parks the decoder on idle
    pub fn new(mut select_a: A, mut select_b: B, data: D, delay: T) -> Self {
        select_a.set_high();
        select_b.set_high();
        Self {
            select_a,
            select_b,
            data,
            delay,
        }
    }

    /// Serializes one byte to a channel, most significant bit first
    ///
    /// The byte is shifted out as raw line levels; display polarity is
    /// the caller's concern.
    pub fn write(&mut self, channel: Channel, byte: u8) {
        for bit in (0..8).rev() {
            self.data.set_state(byte & (1 << bit) != 0);
            self.pulse_clock(channel);
        }
        // The third register commits its shift stage one clock late, so
        // one more pulse brings the byte into view.
        if channel == Channel::Third {
            self.pulse_clock(channel);
        }
    }

    /// Selects the channel's decoder output, holds, then returns to idle
    fn pulse_clock(&mut self, channel: Channel) {
        match channel {
            Channel::First => {
                self.select_a.set_low();
                self.select_b.set_low();
            }
            Channel::Second => {
                self.select_b.set_low();
            }
            Channel::Third => {
                self.select_a.set_low();
            }
        }
        self.delay.delay_us(SETTLE_US);
        self.select_a.set_high();
        self.select_b.set_high();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::testutil::{SamplingDelay, WirePin, Wires, FIRST, SECOND, THIRD};

    fn bus_over(wires: &Wires) -> ShiftBus<WirePin<'_>, WirePin<'_>, WirePin<'_>, SamplingDelay<'_>> {
        let (a, b, data, delay) = wires.pins();
        ShiftBus::new(a, b, data, delay)
    }

    #[test]
    fn test_new_parks_decoder_on_idle() {
        let wires = Wires::default();
        let _bus = bus_over(&wires);
        assert!(wires.idle());
    }

    #[test]
    fn test_write_shifts_msb_first() {
        let wires = Wires::default();
        let mut bus = bus_over(&wires);

        bus.write(Channel::First, 0b1010_0101);

        let bits = wires.sampled_bits(FIRST);
        assert_eq!(
            &bits[..],
            &[true, false, true, false, false, true, false, true]
        );
    }

    #[test]
    fn test_first_and_second_channels_take_eight_pulses() {
        let wires = Wires::default();
        let mut bus = bus_over(&wires);

        bus.write(Channel::First, 0xF0);
        bus.write(Channel::Second, 0x0F);

        assert_eq!(wires.sampled_bits(FIRST).len(), 8);
        assert_eq!(wires.sampled_bits(SECOND).len(), 8);
        assert_eq!(wires.byte_for(FIRST), 0xF0);
        assert_eq!(wires.byte_for(SECOND), 0x0F);
    }

    #[test]
    fn test_third_channel_gets_trailing_commit_pulse() {
        let wires = Wires::default();
        let mut bus = bus_over(&wires);

        bus.write(Channel::Third, 0x3C);

        let bits = wires.sampled_bits(THIRD);
        assert_eq!(bits.len(), 9);
        assert_eq!(wires.byte_for(THIRD), 0x3C);
        // The extra pulse leaves the data line on the last shifted bit
        assert_eq!(bits[8], bits[7]);
    }

    #[test]
    fn test_bus_returns_to_idle_after_write() {
        let wires = Wires::default();
        let mut bus = bus_over(&wires);

        bus.write(Channel::Second, 0xAA);

        assert!(wires.idle());
    }

    #[test]
    fn test_channels_select_distinct_decoder_outputs() {
        let wires = Wires::default();
        let mut bus = bus_over(&wires);

        bus.write(Channel::First, 0xFF);
        bus.write(Channel::Second, 0xFF);
        bus.write(Channel::Third, 0xFF);

        let codes = wires.sampled_codes();
        assert!(codes[..8].iter().all(|&code| code == FIRST));
        assert!(codes[8..16].iter().all(|&code| code == SECOND));
        assert!(codes[16..].iter().all(|&code| code == THIRD));
    }
}
