//! Blocking ADC front end
//!
//! Wraps the chip's SAR converter behind the shared [`AdcConverter`]
//! trait. The shared contract is a 10-bit reading; the RP2040 converts at
//! 12 bits, so raw conversions are scaled down before they leave this
//! module.

use embassy_rp::adc::{Adc, Blocking, Channel};
use heliochron_hal::adc::AdcConverter;

/// ADC front end bound to one analog pin
///
/// On this chip the conversion channel is fixed by the pin handed to
/// [`BoardAdc::new`], and the converter is running as soon as it is
/// constructed, so the routing calls of the shared trait have nothing
/// left to do here.
pub struct BoardAdc<'d> {
    adc: Adc<'d, Blocking>,
    channel: Channel<'d>,
    last: u16,
}

impl<'d> BoardAdc<'d> {
    pub fn new(adc: Adc<'d, Blocking>, channel: Channel<'d>) -> Self {
        Self {
            adc,
            channel,
            last: 0,
        }
    }
}

impl AdcConverter for BoardAdc<'_> {
    fn select_channel(&mut self, _channel: u8) {}

    fn enable(&mut self) {}

    /// Converts once and scales the 12-bit result to the 10-bit contract
    ///
    /// A failed conversion repeats the last good reading rather than
    /// injecting a spurious level into the drop detector.
    fn latest_value(&mut self) -> u16 {
        match self.adc.blocking_read(&mut self.channel) {
            Ok(raw) => {
                self.last = raw >> 2;
                self.last
            }
            Err(_) => {
                #[cfg(feature = "defmt")]
                defmt::warn!("adc conversion failed, repeating last reading");
                self.last
            }
        }
    }
}
