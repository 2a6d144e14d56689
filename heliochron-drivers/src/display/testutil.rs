//! Pin and delay doubles for exercising the bus without hardware

use core::cell::{Cell, RefCell};

use heapless::Vec;
use heliochron_hal::delay::DelayUs;
use heliochron_hal::gpio::OutputPin;

/// Decoder code of the first channel
pub const FIRST: u8 = 0;
/// Decoder code of the second channel
pub const SECOND: u8 = 1;
/// Decoder code of the third channel
pub const THIRD: u8 = 2;
/// Decoder code of an idle bus, both selects high
pub const IDLE: u8 = 3;

/// Shared view of the three bus lines plus a sample log
#[derive(Default)]
pub struct Wires {
    a: Cell<bool>,
    b: Cell<bool>,
    data: Cell<bool>,
    samples: RefCell<Vec<(u8, bool), 128>>,
}

impl Wires {
    /// Hands out pin doubles for the two selects, the data line and a
    /// delay source that samples the lines at every settle window
    pub fn pins(&self) -> (WirePin<'_>, WirePin<'_>, WirePin<'_>, SamplingDelay<'_>) {
        (
            WirePin {
                wires: self,
                role: Role::SelectA,
            },
            WirePin {
                wires: self,
                role: Role::SelectB,
            },
            WirePin {
                wires: self,
                role: Role::Data,
            },
            SamplingDelay { wires: self },
        )
    }

    /// Current decoder input code, select A as the low order bit
    pub fn code(&self) -> u8 {
        u8::from(self.a.get()) | (u8::from(self.b.get()) << 1)
    }

    pub fn idle(&self) -> bool {
        self.code() == IDLE
    }

    /// Data levels sampled while `code` was selected
    pub fn sampled_bits(&self, code: u8) -> Vec<bool, 128> {
        self.samples
            .borrow()
            .iter()
            .filter(|(c, _)| *c == code)
            .map(|(_, d)| *d)
            .collect()
    }

    /// Sequence of decoder codes, one per settle window
    pub fn sampled_codes(&self) -> Vec<u8, 128> {
        self.samples.borrow().iter().map(|(c, _)| *c).collect()
    }

    /// Byte reassembled from the first eight samples on `code`
    pub fn byte_for(&self, code: u8) -> u8 {
        let bits = self.sampled_bits(code);
        assert!(bits.len() >= 8, "fewer than eight bits on code {}", code);
        bits[..8]
            .iter()
            .fold(0u8, |acc, &bit| (acc << 1) | u8::from(bit))
    }
}

#[derive(Clone, Copy)]
enum Role {
    SelectA,
    SelectB,
    Data,
}

/// Output pin double bound to one bus line
pub struct WirePin<'w> {
    wires: &'w Wires,
    role: Role,
}

impl WirePin<'_> {
    fn set(&self, level: bool) {
        match self.role {
            Role::SelectA => self.wires.a.set(level),
            Role::SelectB => self.wires.b.set(level),
            Role::Data => self.wires.data.set(level),
        }
    }
}

impl OutputPin for WirePin<'_> {
    fn set_high(&mut self) {
        self.set(true);
    }

    fn set_low(&mut self) {
        self.set(false);
    }

    fn is_set_high(&mut self) -> bool {
        match self.role {
            Role::SelectA => self.wires.a.get(),
            Role::SelectB => self.wires.b.get(),
            Role::Data => self.wires.data.get(),
        }
    }
}

/// Delay double that snapshots the lines at every settle window
///
/// The bus holds its selection stable across the settle delay, so the
/// snapshot captures exactly what the addressed register clocks in.
pub struct SamplingDelay<'w> {
    wires: &'w Wires,
}

impl DelayUs for SamplingDelay<'_> {
    fn delay_us(&mut self, _us: u32) {
        let code = self.wires.code();
        let data = self.wires.data.get();
        self.wires.samples.borrow_mut().push((code, data)).unwrap();
    }
}
